use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Payment order, either stored on figo or described by the caller before submission
///
/// Identifier, bank name and timestamps are assigned by the service; when
/// creating a payment leave them unset.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Payment {
    /// Internal figo identifier of the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Internal figo identifier of the account the payment is issued from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Payment type, e.g. `Transfer` or `Direct debit`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Name of the payee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account number of the payee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Bank code of the payee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Bank name of the payee, resolved by the service from the bank code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// URL of the payee's bank icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_icon: Option<String>,
    /// Amount to transfer
    #[serde(default)]
    pub amount: f64,
    /// Three-character currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Purpose text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Time the payment was submitted to the bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_timestamp: Option<DateTime<Utc>>,
    /// Internal creation timestamp on the figo side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    /// Internal modification timestamp on the figo side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_timestamp: Option<DateTime<Utc>>,
    /// Id of the transaction created when the payment was booked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl Payment {
    /// True when every field the caller can write matches `other`
    #[must_use]
    pub fn same_order_as(&self, other: &Payment) -> bool {
        self.payment_type == other.payment_type
            && self.name == other.name
            && self.account_number == other.account_number
            && self.bank_code == other.bank_code
            && self.amount == other.amount
            && self.currency == other.currency
            && self.purpose == other.purpose
    }
}
