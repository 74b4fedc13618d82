use crate::error::AppError;
use crate::model::requests::SyncRequest;
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets the profile bound to the session's access token
    ///
    /// Fails with a domain failure if the token is invalid or expired.
    async fn get_user(&self) -> Result<User, AppError>;
}

/// Interface for the synchronization handshake
#[async_trait]
pub trait SyncService: Send + Sync {
    /// Requests a one-time token that starts a server-side synchronization when redeemed
    ///
    /// # Arguments
    /// * `state` - Opaque, non-empty value returned unchanged on the redirect
    /// * `redirect_uri` - Absolute URI the user is sent to once syncing has finished
    ///
    /// # Returns
    /// * `Ok(String)` - Non-empty task token
    /// * `Err(AppError::Domain)` - If `state` or `redirect_uri` is rejected
    async fn get_sync_task_token(&self, state: &str, redirect_uri: &str)
    -> Result<String, AppError>;

    /// Same as [`get_sync_task_token`](Self::get_sync_task_token) with the optional sync settings
    async fn get_sync_task_token_with(&self, request: &SyncRequest) -> Result<String, AppError>;
}
