use crate::error::AppError;
use crate::presentation::account::{Account, AccountBalance};
use crate::presentation::transaction::{Transaction, TransactionQuery};
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets all accounts connected to the user, in service order
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError>;

    /// Gets a single account
    ///
    /// # Arguments
    /// * `account_id` - Internal figo identifier, e.g. `A1.2`
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - The account, with its balance and balance date
    /// * `Ok(None)` - If the service does not know the account
    async fn get_account(&self, account_id: &str) -> Result<Option<Account>, AppError>;

    /// Gets the current balance of an account, `None` if the account does not exist
    async fn get_account_balance(
        &self,
        account_id: &str,
    ) -> Result<Option<AccountBalance>, AppError>;
}

/// Interface for the transaction service
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Gets transactions of all accounts, or of one account when `account_id` is given
    ///
    /// The order is the one delivered by the service. An empty list is a valid result.
    async fn get_transactions(&self, account_id: Option<&str>)
    -> Result<Vec<Transaction>, AppError>;

    /// Gets transactions matching `query`
    async fn get_transactions_with(
        &self,
        query: &TransactionQuery,
    ) -> Result<Vec<Transaction>, AppError>;

    /// Gets a single transaction, `None` if it does not exist
    async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Option<Transaction>, AppError>;
}
