//! Path templates of the figo REST resources

use crate::constants::REST_PREFIX;
use crate::error::AppError;
use url::form_urlencoded;

/// Checks that `id` can be used as a single path segment
///
/// Only unreserved URI characters (`A-Z a-z 0-9 - . _ ~`) are accepted, and
/// the dot segments `.` and `..` are refused since URL resolution collapses them.
pub fn check_id(id: &str) -> Result<&str, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::rejected("invalid_id", "id must not be empty"));
    }
    let unreserved = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~');
    if id == "." || id == ".." || !id.chars().all(unreserved) {
        return Err(AppError::rejected(
            "invalid_id",
            format!("id {id:?} is not a valid path segment"),
        ));
    }
    Ok(id)
}

/// Unwraps the id of a stored record, failing when the record was never stored
pub fn require_id<'a>(id: Option<&'a str>, what: &str) -> Result<&'a str, AppError> {
    match id {
        Some(id) if !id.is_empty() => check_id(id),
        _ => Err(AppError::rejected(
            "missing_id",
            format!("{what} carries no id"),
        )),
    }
}

pub fn accounts() -> String {
    format!("{REST_PREFIX}/accounts")
}

pub fn account(account_id: &str) -> String {
    format!("{REST_PREFIX}/accounts/{account_id}")
}

pub fn account_balance(account_id: &str) -> String {
    format!("{REST_PREFIX}/accounts/{account_id}/balance")
}

/// Transactions of every account, or of `account_id` when given
pub fn transactions(account_id: Option<&str>) -> String {
    match account_id {
        Some(account_id) => format!("{REST_PREFIX}/accounts/{account_id}/transactions"),
        None => format!("{REST_PREFIX}/transactions"),
    }
}

pub fn transaction(account_id: &str, transaction_id: &str) -> String {
    format!("{REST_PREFIX}/accounts/{account_id}/transactions/{transaction_id}")
}

/// Payments of every account, or of `account_id` when given
pub fn payments(account_id: Option<&str>) -> String {
    match account_id {
        Some(account_id) => format!("{REST_PREFIX}/accounts/{account_id}/payments"),
        None => format!("{REST_PREFIX}/payments"),
    }
}

pub fn payment(account_id: &str, payment_id: &str) -> String {
    format!("{REST_PREFIX}/accounts/{account_id}/payments/{payment_id}")
}

pub fn notifications() -> String {
    format!("{REST_PREFIX}/notifications")
}

pub fn notification(notification_id: &str) -> String {
    format!("{REST_PREFIX}/notifications/{notification_id}")
}

pub fn user() -> String {
    format!("{REST_PREFIX}/user")
}

pub fn sync() -> String {
    format!("{REST_PREFIX}/sync")
}

/// Appends url-encoded query parameters to `path`
pub fn with_query(path: String, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path;
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    format!("{path}?{query}")
}
