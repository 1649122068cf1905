//! Identifier generation for records created at runtime.

use crate::model::UserId;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues strictly increasing IDs derived from the current time in milliseconds.
///
/// Two calls within the same millisecond (or a clock that steps backwards) still get
/// distinct values: each ID is at least one more than the previous one.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicU64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> UserId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return UserId(candidate),
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let ids = TimestampIds::new();
        let issued: Vec<UserId> = (0..1000).map(|_| ids.next_id()).collect();
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
        let distinct: HashSet<UserId> = issued.iter().copied().collect();
        assert_eq!(distinct.len(), issued.len());
    }

    #[test]
    fn test_ids_track_wall_clock() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = TimestampIds::new().next_id();
        assert!(id.0 >= before);
    }
}
