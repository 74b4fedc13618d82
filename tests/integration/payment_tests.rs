use crate::common::demo_session;
use figo_client::prelude::*;

fn transfer() -> Payment {
    Payment {
        payment_type: Some("Transfer".to_string()),
        name: Some("figo".to_string()),
        account_number: Some("4711951501".to_string()),
        bank_code: Some("90090042".to_string()),
        amount: 0.89,
        currency: Some("EUR".to_string()),
        purpose: Some("Thanks for all the fish.".to_string()),
        ..Payment::default()
    }
}

#[tokio::test]
async fn test_payment_lifecycle() {
    let session = demo_session();
    let before = session.get_payments(Some("A1.1")).await.unwrap().len();

    let added = session.add_payment("A1.1", &transfer()).await.unwrap();
    let payment_id = added.payment_id.clone().expect("Added payment must carry an id");
    assert!(!payment_id.is_empty());
    assert_eq!(added.account_id.as_deref(), Some("A1.1"));
    assert_eq!(added.bank_name.as_deref(), Some("Demobank"));
    assert_eq!(added.amount, 0.89);
    assert!(added.same_order_as(&transfer()));

    let listed = session.get_payments(Some("A1.1")).await.unwrap();
    assert_eq!(listed.len(), before + 1);

    let fetched = session.get_payment("A1.1", &payment_id).await.unwrap().unwrap();
    assert_eq!(fetched, added);

    let mut changed = fetched.clone();
    changed.amount = 2.39;
    let updated = session.update_payment(&changed).await.unwrap();
    assert_eq!(updated.amount, 2.39);
    assert_eq!(updated.payment_id.as_deref(), Some(payment_id.as_str()));

    let refetched = session.get_payment("A1.1", &payment_id).await.unwrap().unwrap();
    assert_eq!(refetched.amount, 2.39);
    assert_eq!(refetched.bank_name.as_deref(), Some("Demobank"));
    assert!(fetched.same_order_as(&Payment {
        amount: 0.89,
        ..refetched.clone()
    }));

    assert!(session.remove_payment(&updated).await.unwrap());
    assert!(session.get_payment("A1.1", &payment_id).await.unwrap().is_none());
    assert!(!session.remove_payment(&updated).await.unwrap());
}

#[tokio::test]
async fn test_get_payments_everywhere() {
    let session = demo_session();

    let payments = session.get_payments(None).await.unwrap();

    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].name.as_deref(), Some("Rent"));
}

#[tokio::test]
async fn test_get_payment_absent() {
    let session = demo_session();

    assert!(session.get_payment("A1.1", "P9.9.9").await.unwrap().is_none());
}

#[tokio::test]
async fn test_add_payment_to_unknown_account_fails() {
    let session = demo_session();

    let err = session.add_payment("A1.5", &transfer()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Domain);
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_add_incomplete_payment_is_rejected() {
    let session = demo_session();
    let payment = Payment {
        name: None,
        ..transfer()
    };

    let err = session.add_payment("A1.1", &payment).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Domain);
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.code(), Some("1000"));
}

#[tokio::test]
async fn test_update_unstored_payment_sends_nothing() {
    let session = demo_session();

    let err = session.update_payment(&transfer()).await.unwrap_err();

    assert_eq!(err.code(), Some("missing_id"));
    assert_eq!(session.transport().calls(), 0);
}

#[tokio::test]
async fn test_dot_segment_payment_id_sends_nothing() {
    let session = demo_session();
    let payment = Payment {
        payment_id: Some("..".to_string()),
        account_id: Some("A1.1".to_string()),
        ..transfer()
    };

    let err = session.remove_payment(&payment).await.unwrap_err();

    assert_eq!(err.code(), Some("invalid_id"));
    assert_eq!(session.transport().calls(), 0);
    assert_eq!(session.get_payments(Some("A1.1")).await.unwrap().len(), 1);
}
