use crate::application::interfaces::user::{SyncService, UserService};
use crate::error::AppError;
use crate::model::http::Transport;
use crate::model::mapper::ResponseMapper;
use crate::model::requests::SyncRequest;
use crate::model::responses::SyncTokenResponse;
use crate::presentation::user::User;
use crate::session::interface::Session;
use crate::session::paths;
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};
use url::Url;

#[async_trait]
impl<T: Transport + 'static, M: ResponseMapper + 'static> UserService for Session<T, M> {
    async fn get_user(&self) -> Result<User, AppError> {
        info!("Getting user profile");

        let user: User = self.fetch(&paths::user()).await?;

        debug!("User profile obtained for {}", user.email);
        Ok(user)
    }
}

#[async_trait]
impl<T: Transport + 'static, M: ResponseMapper + 'static> SyncService for Session<T, M> {
    async fn get_sync_task_token(
        &self,
        state: &str,
        redirect_uri: &str,
    ) -> Result<String, AppError> {
        self.get_sync_task_token_with(&SyncRequest::new(state, redirect_uri))
            .await
    }

    async fn get_sync_task_token_with(&self, request: &SyncRequest) -> Result<String, AppError> {
        validate_sync_request(request)?;
        info!("Requesting sync task token for {}", request.redirect_uri);

        let response: Option<SyncTokenResponse> =
            self.submit(Method::POST, &paths::sync(), request).await?;

        match response {
            Some(SyncTokenResponse { task_token }) if !task_token.is_empty() => {
                debug!("Sync task token obtained");
                Ok(task_token)
            }
            _ => Err(AppError::Decode(
                "sync response carries no task_token".into(),
            )),
        }
    }
}

/// Mirrors the service's validation of sync requests
fn validate_sync_request(request: &SyncRequest) -> Result<(), AppError> {
    if request.state.trim().is_empty() {
        return Err(AppError::rejected(
            "invalid_state",
            "state must not be empty",
        ));
    }
    if Url::parse(&request.redirect_uri).is_err() {
        return Err(AppError::rejected(
            "invalid_redirect_uri",
            format!("{:?} is not an absolute URI", request.redirect_uri),
        ));
    }
    Ok(())
}
