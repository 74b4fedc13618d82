/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::presentation::notification::Notification;
use crate::presentation::payment::Payment;
use serde::Serialize;

/// Writable fields of a payment, as sent on creation and update
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentRequest<'a> {
    /// Payment type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<&'a str>,
    /// Name of the payee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    /// Account number of the payee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<&'a str>,
    /// Bank code of the payee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<&'a str>,
    /// Amount to transfer
    pub amount: f64,
    /// Three-character currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'a str>,
    /// Purpose text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<&'a str>,
}

impl<'a> From<&'a Payment> for PaymentRequest<'a> {
    fn from(payment: &'a Payment) -> Self {
        Self {
            payment_type: payment.payment_type.as_deref(),
            name: payment.name.as_deref(),
            account_number: payment.account_number.as_deref(),
            bank_code: payment.bank_code.as_deref(),
            amount: payment.amount,
            currency: payment.currency.as_deref(),
            purpose: payment.purpose.as_deref(),
        }
    }
}

/// Writable fields of a notification, as sent on creation and update
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotificationRequest<'a> {
    /// Path pattern of the resources to observe
    pub observe_key: &'a str,
    /// Webhook target
    pub notify_uri: &'a str,
    /// Opaque value echoed back on every call
    pub state: &'a str,
}

impl<'a> From<&'a Notification> for NotificationRequest<'a> {
    fn from(notification: &'a Notification) -> Self {
        Self {
            observe_key: &notification.observe_key,
            notify_uri: &notification.notify_uri,
            state: &notification.state,
        }
    }
}

/// Request for a synchronization task token
///
/// Only `state` and `redirect_uri` are required; the remaining fields tune
/// what the service does once the token is redeemed.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SyncRequest {
    /// Opaque value returned unchanged on the redirect
    pub state: String,
    /// URI the user is redirected to once the synchronization has finished
    pub redirect_uri: String,
    /// Suppress notifications triggered by this synchronization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notifications: Option<bool>,
    /// Only sync accounts not synced within this many minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_not_synced_since: Option<u32>,
    /// Continue to the redirect without user interaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_continue: Option<bool>,
    /// Restrict the synchronization to these accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
    /// Restrict the synchronization to these data kinds, e.g. `transactions`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_tasks: Option<Vec<String>>,
}

impl SyncRequest {
    /// Minimal sync request
    pub fn new(state: &str, redirect_uri: &str) -> Self {
        Self {
            state: state.to_string(),
            redirect_uri: redirect_uri.to_string(),
            ..Self::default()
        }
    }
}
