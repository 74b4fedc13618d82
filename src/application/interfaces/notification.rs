use crate::error::AppError;
use crate::presentation::notification::Notification;
use async_trait::async_trait;

/// Interface for the notification service
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Gets all notifications registered for the user
    async fn get_notifications(&self) -> Result<Vec<Notification>, AppError>;

    /// Gets a single notification, `None` if it does not exist
    async fn get_notification(
        &self,
        notification_id: &str,
    ) -> Result<Option<Notification>, AppError>;

    /// Registers a new notification and returns it with its assigned id
    async fn add_notification(
        &self,
        notification: &Notification,
    ) -> Result<Notification, AppError>;

    /// Persists the fields of a stored notification; idempotent
    async fn update_notification(
        &self,
        notification: &Notification,
    ) -> Result<Notification, AppError>;

    /// Removes a stored notification, returning `false` if it did not exist
    async fn remove_notification(&self, notification: &Notification) -> Result<bool, AppError>;
}
