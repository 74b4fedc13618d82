use crate::application::interfaces::account::{AccountService, TransactionService};
use crate::error::AppError;
use crate::model::http::Transport;
use crate::model::mapper::ResponseMapper;
use crate::model::responses::{AccountsResponse, TransactionsResponse};
use crate::presentation::account::{Account, AccountBalance};
use crate::presentation::transaction::{Transaction, TransactionQuery};
use crate::session::interface::Session;
use crate::session::paths;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl<T: Transport + 'static, M: ResponseMapper + 'static> AccountService for Session<T, M> {
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        info!("Getting accounts");

        let result: AccountsResponse = self.fetch(&paths::accounts()).await?;

        debug!("Accounts obtained: {} accounts", result.accounts.len());
        Ok(result.accounts)
    }

    async fn get_account(&self, account_id: &str) -> Result<Option<Account>, AppError> {
        let account_id = paths::check_id(account_id)?;
        info!("Getting account {}", account_id);

        let account: Option<Account> = self.fetch_optional(&paths::account(account_id)).await?;
        if let Some(account) = &account {
            ensure_same_id(account_id, &account.account_id)?;
        }
        Ok(account)
    }

    async fn get_account_balance(
        &self,
        account_id: &str,
    ) -> Result<Option<AccountBalance>, AppError> {
        let account_id = paths::check_id(account_id)?;
        info!("Getting balance of account {}", account_id);

        self.fetch_optional(&paths::account_balance(account_id))
            .await
    }
}

#[async_trait]
impl<T: Transport + 'static, M: ResponseMapper + 'static> TransactionService for Session<T, M> {
    async fn get_transactions(
        &self,
        account_id: Option<&str>,
    ) -> Result<Vec<Transaction>, AppError> {
        let query = TransactionQuery {
            account_id: account_id.map(str::to_string),
            ..TransactionQuery::default()
        };
        self.get_transactions_with(&query).await
    }

    async fn get_transactions_with(
        &self,
        query: &TransactionQuery,
    ) -> Result<Vec<Transaction>, AppError> {
        let account_id = query.account_id.as_deref().map(paths::check_id).transpose()?;
        info!(
            "Getting transactions of {}",
            account_id.unwrap_or("all accounts")
        );

        let path = paths::with_query(paths::transactions(account_id), &query.params());
        let result: TransactionsResponse = self.fetch(&path).await?;

        debug!(
            "Transactions obtained: {} transactions",
            result.transactions.len()
        );
        Ok(result.transactions)
    }

    async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Option<Transaction>, AppError> {
        let account_id = paths::check_id(account_id)?;
        let transaction_id = paths::check_id(transaction_id)?;
        info!("Getting transaction {} of account {}", transaction_id, account_id);

        let transaction: Option<Transaction> = self
            .fetch_optional(&paths::transaction(account_id, transaction_id))
            .await?;
        if let Some(transaction) = &transaction {
            ensure_same_id(transaction_id, &transaction.transaction_id)?;
        }
        Ok(transaction)
    }
}

/// A record fetched by id must carry that id
pub(crate) fn ensure_same_id(requested: &str, returned: &str) -> Result<(), AppError> {
    if requested == returned {
        Ok(())
    } else {
        Err(AppError::Decode(format!(
            "requested id {requested} but the service returned {returned}"
        )))
    }
}
