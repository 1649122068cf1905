use std::time::Duration;
use user_dashboard::clients::UserClient;
use user_dashboard::dashboard::{Command, Dashboard, USER_DELETED, USER_UPDATED};
use user_dashboard::framework::mock::MockClient;
use user_dashboard::framework::FrameworkError;
use user_dashboard::model::{sample_users, User, UserId, UserStatus};
use user_dashboard::notification::Notifier;
use user_dashboard::user_actor::UserError;

fn dashboard(mock: &MockClient<User>) -> Dashboard {
    Dashboard::new(UserClient::new(mock.client()), Notifier::new(Duration::from_secs(3)))
}

#[tokio::test]
async fn test_delete_sends_one_remove_then_reads() {
    let users = sample_users().unwrap();
    let remaining: Vec<User> = users.iter().filter(|u| u.id != UserId(2)).cloned().collect();

    let mut mock = MockClient::<User>::new();
    mock.expect_delete(UserId(2)).return_ok(true);
    mock.expect_list().return_ok(remaining);

    let mut dashboard = dashboard(&mock);
    let view = dashboard.dispatch(Command::Delete(UserId(2))).await.unwrap();

    assert_eq!(view.users.len(), 4);
    assert_eq!(view.stats.inactive, 1);
    assert_eq!(view.notification.unwrap().message, USER_DELETED);
    mock.verify();
}

#[tokio::test]
async fn test_edit_submit_replaces_target() {
    let users = sample_users().unwrap();
    let mut edited = users[0].clone();
    edited.status = UserStatus::Inactive;
    let mut after = users.clone();
    after[0] = edited.clone();

    let mut mock = MockClient::<User>::new();
    mock.expect_get(UserId(1)).return_ok(Some(users[0].clone()));
    mock.expect_list().return_ok(users.clone());
    mock.expect_list().return_ok(users.clone());
    mock.expect_update(UserId(1)).return_ok(Some(edited));
    mock.expect_list().return_ok(after);

    let mut dashboard = dashboard(&mock);
    dashboard.dispatch(Command::StartEdit(UserId(1))).await.unwrap();
    dashboard.dispatch(Command::SetStatus(UserStatus::Inactive)).await.unwrap();
    let view = dashboard.dispatch(Command::Submit).await.unwrap();

    assert_eq!(view.users[0].status, UserStatus::Inactive);
    assert_eq!(view.notification.unwrap().message, USER_UPDATED);
    mock.verify();
}

#[tokio::test]
async fn test_validation_failure_never_reaches_the_store() {
    let mut mock = MockClient::<User>::new();
    mock.expect_list().return_ok(Vec::new());

    let mut dashboard = dashboard(&mock);
    dashboard.dispatch(Command::StartCreate).await.unwrap();
    let err = dashboard.dispatch(Command::Submit).await.unwrap_err();

    assert_eq!(
        err,
        UserError::Validation("required field missing: name, email".into())
    );
    mock.verify();
}

#[tokio::test]
async fn test_store_failure_surfaces_as_communication_error() {
    let mut mock = MockClient::<User>::new();
    mock.expect_list().return_err(FrameworkError::ActorClosed);

    let err = dashboard(&mock).view().await.unwrap_err();
    assert!(matches!(err, UserError::ActorCommunication(_)));
    mock.verify();
}
