use crate::error::AppError;
use crate::presentation::payment::Payment;
use async_trait::async_trait;

/// Interface for the payment service
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Gets payments of all accounts, or of one account when `account_id` is given
    async fn get_payments(&self, account_id: Option<&str>) -> Result<Vec<Payment>, AppError>;

    /// Gets a single payment addressed by its account and payment ids
    ///
    /// # Returns
    /// * `Ok(None)` - If the payment was never created or has been removed
    async fn get_payment(
        &self,
        account_id: &str,
        payment_id: &str,
    ) -> Result<Option<Payment>, AppError>;

    /// Stores a new payment on `account_id`
    ///
    /// Ids set on `payment` are ignored. The returned payment carries the
    /// server-assigned id and server-computed fields such as the bank name.
    /// Calling this twice creates two payments.
    async fn add_payment(&self, account_id: &str, payment: &Payment) -> Result<Payment, AppError>;

    /// Persists the writable fields of a stored payment; idempotent
    async fn update_payment(&self, payment: &Payment) -> Result<Payment, AppError>;

    /// Removes a stored payment
    ///
    /// # Returns
    /// * `Ok(true)` - The payment was removed
    /// * `Ok(false)` - The payment did not exist (anymore)
    async fn remove_payment(&self, payment: &Payment) -> Result<bool, AppError>;
}
