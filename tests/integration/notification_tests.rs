use crate::common::demo_session;
use figo_client::prelude::*;

#[tokio::test]
async fn test_notification_lifecycle() {
    let session = demo_session();
    let request = Notification::new("/rest/transactions", "http://figo.me/test", "qwe");

    let added = session.add_notification(&request).await.unwrap();
    let notification_id = added.notification_id.clone().unwrap();
    assert_eq!(added.observe_key, "/rest/transactions");
    assert_eq!(added.notify_uri, "http://figo.me/test");
    assert_eq!(added.state, "qwe");

    let fetched = session
        .get_notification(&notification_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, added);

    let mut changed = fetched.clone();
    changed.state = "asd".to_string();
    let updated = session.update_notification(&changed).await.unwrap();
    assert_eq!(updated, changed);

    let refetched = session
        .get_notification(&notification_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(refetched.state, "asd");

    assert!(session.remove_notification(&refetched).await.unwrap());
    assert!(
        session
            .get_notification(&notification_id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_get_notifications() {
    let session = demo_session();

    let notifications = session.get_notifications().await.unwrap();

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].notification_id.as_deref(), Some("N1.1"));
}

#[tokio::test]
async fn test_add_notification_without_observe_key_is_rejected() {
    let session = demo_session();
    let request = Notification::new("", "http://figo.me/test", "qwe");

    let err = session.add_notification(&request).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Domain);
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_remove_missing_notification_is_false() {
    let session = demo_session();
    let mut notification = Notification::new("/rest/accounts", "http://figo.me/x", "");
    notification.notification_id = Some("N9.9".to_string());

    assert!(!session.remove_notification(&notification).await.unwrap());
}

#[tokio::test]
async fn test_remove_unstored_notification_sends_nothing() {
    let session = demo_session();
    let notification = Notification::new("/rest/accounts", "http://figo.me/x", "");

    let err = session.remove_notification(&notification).await.unwrap_err();

    assert_eq!(err.code(), Some("missing_id"));
    assert_eq!(session.transport().calls(), 0);
}
