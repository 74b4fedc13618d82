use crate::application::interfaces::payment::PaymentService;
use crate::application::services::account_service::ensure_same_id;
use crate::error::AppError;
use crate::model::http::Transport;
use crate::model::mapper::ResponseMapper;
use crate::model::requests::PaymentRequest;
use crate::model::responses::PaymentsResponse;
use crate::presentation::payment::Payment;
use crate::session::interface::Session;
use crate::session::paths;
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

#[async_trait]
impl<T: Transport + 'static, M: ResponseMapper + 'static> PaymentService for Session<T, M> {
    async fn get_payments(&self, account_id: Option<&str>) -> Result<Vec<Payment>, AppError> {
        let account_id = account_id.map(paths::check_id).transpose()?;
        info!("Getting payments of {}", account_id.unwrap_or("all accounts"));

        let result: PaymentsResponse = self.fetch(&paths::payments(account_id)).await?;

        debug!("Payments obtained: {} payments", result.payments.len());
        Ok(result.payments)
    }

    async fn get_payment(
        &self,
        account_id: &str,
        payment_id: &str,
    ) -> Result<Option<Payment>, AppError> {
        let account_id = paths::check_id(account_id)?;
        let payment_id = paths::check_id(payment_id)?;
        info!("Getting payment {} of account {}", payment_id, account_id);

        let payment: Option<Payment> = self
            .fetch_optional(&paths::payment(account_id, payment_id))
            .await?;
        if let Some(payment) = &payment {
            ensure_same_id(payment_id, payment.payment_id.as_deref().unwrap_or_default())?;
        }
        Ok(payment)
    }

    async fn add_payment(&self, account_id: &str, payment: &Payment) -> Result<Payment, AppError> {
        let account_id = paths::check_id(account_id)?;
        info!("Adding payment to account {}", account_id);

        let stored: Option<Payment> = self
            .submit(
                Method::POST,
                &paths::payments(Some(account_id)),
                &PaymentRequest::from(payment),
            )
            .await?;

        let mut stored =
            stored.ok_or_else(|| AppError::Decode("payment creation returned no body".into()))?;
        if stored.payment_id.as_deref().is_none_or(str::is_empty) {
            return Err(AppError::Decode(
                "created payment carries no payment_id".into(),
            ));
        }
        if stored.account_id.is_none() {
            stored.account_id = Some(account_id.to_string());
        }

        debug!("Payment stored with id {:?}", stored.payment_id);
        Ok(stored)
    }

    async fn update_payment(&self, payment: &Payment) -> Result<Payment, AppError> {
        let account_id = paths::require_id(payment.account_id.as_deref(), "payment account")?;
        let payment_id = paths::require_id(payment.payment_id.as_deref(), "payment")?;
        info!("Updating payment {} of account {}", payment_id, account_id);

        let stored: Option<Payment> = self
            .submit(
                Method::PUT,
                &paths::payment(account_id, payment_id),
                &PaymentRequest::from(payment),
            )
            .await?;

        if let Some(stored) = &stored {
            ensure_same_id(payment_id, stored.payment_id.as_deref().unwrap_or_default())?;
        }
        Ok(stored.unwrap_or_else(|| payment.clone()))
    }

    async fn remove_payment(&self, payment: &Payment) -> Result<bool, AppError> {
        let account_id = paths::require_id(payment.account_id.as_deref(), "payment account")?;
        let payment_id = paths::require_id(payment.payment_id.as_deref(), "payment")?;
        info!("Removing payment {} of account {}", payment_id, account_id);

        self.delete(&paths::payment(account_id, payment_id)).await
    }
}
