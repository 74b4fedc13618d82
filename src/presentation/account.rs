/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Bank account connected to the user's figo profile
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Internal figo identifier of the account
    pub account_id: String,
    /// Internal figo identifier of the bank the account belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    /// Account name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Whether the account is synchronized automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_sync: Option<bool>,
    /// Account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Bank code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Bank name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Three-character currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// IBAN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// BIC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    /// Account type, e.g. `Giro account` or `Savings account`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// URL of the bank icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the balance counts towards the user's total balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_total_balance: Option<bool>,
    /// Whether this is a preview account created before the first sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<bool>,
    /// Balance details; always present on a fetched account
    pub balance: AccountBalance,
}

/// Balance of an account at a given moment
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountBalance {
    /// Account balance
    pub balance: f64,
    /// Date of the balance
    pub balance_date: DateTime<Utc>,
    /// Credit line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_line: Option<f64>,
    /// User-defined spending limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_spending_limit: Option<f64>,
    /// Synchronization status of the balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SyncStatus>,
}

/// Outcome of the last synchronization of an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct SyncStatus {
    /// Internal status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Human-readable status message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Timestamp of the last synchronization attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_timestamp: Option<DateTime<Utc>>,
    /// Timestamp of the last successful synchronization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_timestamp: Option<DateTime<Utc>>,
}

impl Account {
    /// Name to show for the account, falling back to the account id
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.account_id)
    }
}
