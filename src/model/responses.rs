use crate::presentation::account::Account;
use crate::presentation::notification::Notification;
use crate::presentation::payment::Payment;
use crate::presentation::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Envelope of `GET /rest/accounts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountsResponse {
    /// Accounts in service order
    pub accounts: Vec<Account>,
}

/// Envelope of the transaction listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionsResponse {
    /// Transactions in service order
    pub transactions: Vec<Transaction>,
}

/// Envelope of the payment listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentsResponse {
    /// Payments in service order
    pub payments: Vec<Payment>,
}

/// Envelope of `GET /rest/notifications`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsResponse {
    /// Notifications in service order
    pub notifications: Vec<Notification>,
}

/// Response of `POST /rest/sync`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncTokenResponse {
    /// One-time token redeemable through the hosted synchronization flow
    pub task_token: String,
}
