//! # Mock Framework
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running [`ResourceActor`](crate::framework::ResourceActor).
//! Use it to test logic *around* a client (the dashboard reducer, for instance) without any
//! store state, and to inject failures that a real actor never produces.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, canned replies | Real ordered store |
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Only by dropping the actor |
//!
//! Expectations are consumed in order. A request of the wrong kind, or one addressed to a
//! different ID, is recorded as a mismatch; its reply channel is dropped (the caller sees
//! [`FrameworkError::ActorDropped`]) and [`MockClient::verify`] panics with the details.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<User>::new();
//! mock.expect_delete(UserId(2)).return_ok(true);
//! let client = UserClient::new(mock.client());
//! // ... exercise code that uses `client` ...
//! mock.verify();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Reply<R> = Result<R, FrameworkError>;

/// Represents an expected request and the reply it should receive.
enum Expectation<T: ActorEntity> {
    Get { id: T::Id, response: Reply<Option<T>> },
    List { response: Reply<Vec<T>> },
    Create { response: Reply<T> },
    Update { id: T::Id, response: Reply<Option<T>> },
    Delete { id: T::Id, response: Reply<bool> },
    Seed { response: Reply<usize> },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failures = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                if let Some(mismatch) = Self::answer(request, expectation) {
                    failures.lock().unwrap().push(mismatch);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Replies to `request` from `expectation`, or describes why they do not match.
    fn answer(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) -> Option<String> {
        match (request, expectation) {
            (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                if id != want {
                    return Some(format!("get: expected id {want}, got {id}"));
                }
                let _ = respond_to.send(response);
            }
            (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                let _ = respond_to.send(response);
            }
            (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Update { id, respond_to, .. },
                Some(Expectation::Update { id: want, response }),
            ) => {
                if id != want {
                    return Some(format!("update: expected id {want}, got {id}"));
                }
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::Delete { id, respond_to },
                Some(Expectation::Delete { id: want, response }),
            ) => {
                if id != want {
                    return Some(format!("delete: expected id {want}, got {id}"));
                }
                let _ = respond_to.send(response);
            }
            (ResourceRequest::Seed { respond_to, .. }, Some(Expectation::Seed { response })) => {
                let _ = respond_to.send(response);
            }
            (request, None) => {
                return Some(format!("unexpected {} request", Self::kind(&request)));
            }
            (request, Some(_)) => {
                return Some(format!("{} request did not match the next expectation", Self::kind(&request)));
            }
        }
        None
    }

    fn kind(request: &ResourceRequest<T>) -> &'static str {
        match request {
            ResourceRequest::Create { .. } => "create",
            ResourceRequest::Get { .. } => "get",
            ResourceRequest::List { .. } => "list",
            ResourceRequest::Update { .. } => "update",
            ResourceRequest::Delete { .. } => "delete",
            ResourceRequest::Seed { .. } => "seed",
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, bool> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects a `seed` operation.
    pub fn expect_seed(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(|response| Expectation::Seed { response })
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Reply<R>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met and no request went astray.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Mock received unexpected requests: {}", mismatches.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that queues one expectation once its reply is chosen.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Reply<R>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Reply<R>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
