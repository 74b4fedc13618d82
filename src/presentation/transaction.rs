use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Booked or pending transaction on an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Internal figo identifier of the transaction
    pub transaction_id: String,
    /// Internal figo identifier of the account
    pub account_id: String,
    /// Name of originator or recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account number of originator or recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Bank code of originator or recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Bank name of originator or recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Transaction amount, negative for debits
    pub amount: f64,
    /// Three-character currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Booking date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<DateTime<Utc>>,
    /// Value date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_date: Option<DateTime<Utc>>,
    /// Purpose text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Transaction type, e.g. `Transfer` or `Direct debit`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    /// Booking text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_text: Option<String>,
    /// Whether the transaction is booked or pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked: Option<bool>,
    /// Whether the user has already seen the transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited: Option<bool>,
    /// Internal creation timestamp on the figo side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    /// Internal modification timestamp on the figo side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_timestamp: Option<DateTime<Utc>>,
}

/// Filters accepted by the transaction listing endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    /// Restrict to one account; `None` lists transactions of all accounts
    pub account_id: Option<String>,
    /// Only return transactions newer than this transaction id or date
    pub since: Option<String>,
    /// Maximum number of transactions to return
    pub count: Option<u32>,
    /// Offset into the result set
    pub offset: Option<u32>,
    /// Also return pending transactions
    pub include_pending: Option<bool>,
}

impl TransactionQuery {
    /// Query for the transactions of a single account
    pub fn for_account(account_id: &str) -> Self {
        Self {
            account_id: Some(account_id.to_string()),
            ..Self::default()
        }
    }

    /// Query string parameters in a stable order
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(since) = &self.since {
            params.push(("since", since.clone()));
        }
        if let Some(count) = self.count {
            params.push(("count", count.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(include_pending) = self.include_pending {
            params.push(("include_pending", u8::from(include_pending).to_string()));
        }
        params
    }
}
