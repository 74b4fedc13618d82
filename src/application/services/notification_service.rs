use crate::application::interfaces::notification::NotificationService;
use crate::application::services::account_service::ensure_same_id;
use crate::error::AppError;
use crate::model::http::Transport;
use crate::model::mapper::ResponseMapper;
use crate::model::requests::NotificationRequest;
use crate::model::responses::NotificationsResponse;
use crate::presentation::notification::Notification;
use crate::session::interface::Session;
use crate::session::paths;
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

#[async_trait]
impl<T: Transport + 'static, M: ResponseMapper + 'static> NotificationService for Session<T, M> {
    async fn get_notifications(&self) -> Result<Vec<Notification>, AppError> {
        info!("Getting notifications");

        let result: NotificationsResponse = self.fetch(&paths::notifications()).await?;

        debug!(
            "Notifications obtained: {} notifications",
            result.notifications.len()
        );
        Ok(result.notifications)
    }

    async fn get_notification(
        &self,
        notification_id: &str,
    ) -> Result<Option<Notification>, AppError> {
        let notification_id = paths::check_id(notification_id)?;
        info!("Getting notification {}", notification_id);

        let notification: Option<Notification> = self
            .fetch_optional(&paths::notification(notification_id))
            .await?;
        if let Some(notification) = &notification {
            ensure_same_id(
                notification_id,
                notification.notification_id.as_deref().unwrap_or_default(),
            )?;
        }
        Ok(notification)
    }

    async fn add_notification(
        &self,
        notification: &Notification,
    ) -> Result<Notification, AppError> {
        info!("Adding notification for {}", notification.observe_key);

        let stored: Option<Notification> = self
            .submit(
                Method::POST,
                &paths::notifications(),
                &NotificationRequest::from(notification),
            )
            .await?;

        let stored = stored
            .ok_or_else(|| AppError::Decode("notification creation returned no body".into()))?;
        if stored.notification_id.as_deref().is_none_or(str::is_empty) {
            return Err(AppError::Decode(
                "created notification carries no notification_id".into(),
            ));
        }

        debug!("Notification stored with id {:?}", stored.notification_id);
        Ok(stored)
    }

    async fn update_notification(
        &self,
        notification: &Notification,
    ) -> Result<Notification, AppError> {
        let notification_id =
            paths::require_id(notification.notification_id.as_deref(), "notification")?;
        info!("Updating notification {}", notification_id);

        let stored: Option<Notification> = self
            .submit(
                Method::PUT,
                &paths::notification(notification_id),
                &NotificationRequest::from(notification),
            )
            .await?;

        if let Some(stored) = &stored {
            ensure_same_id(
                notification_id,
                stored.notification_id.as_deref().unwrap_or_default(),
            )?;
        }
        Ok(stored.unwrap_or_else(|| notification.clone()))
    }

    async fn remove_notification(&self, notification: &Notification) -> Result<bool, AppError> {
        let notification_id =
            paths::require_id(notification.notification_id.as_deref(), "notification")?;
        info!("Removing notification {}", notification_id);

        self.delete(&paths::notification(notification_id)).await
    }
}
