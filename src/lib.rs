//! # figo Client
//!
//! Typed asynchronous client for the figo banking REST API.
//!
//! A [`Session`](session::interface::Session) holds one bearer access token and
//! exposes the figo resources through service traits:
//!
//! | Trait | Resources |
//! |---|---|
//! | [`AccountService`](application::interfaces::account::AccountService) | accounts, balances |
//! | [`TransactionService`](application::interfaces::account::TransactionService) | transactions |
//! | [`PaymentService`](application::interfaces::payment::PaymentService) | payments (CRUD) |
//! | [`NotificationService`](application::interfaces::notification::NotificationService) | notifications (CRUD) |
//! | [`UserService`](application::interfaces::user::UserService) | user profile |
//! | [`SyncService`](application::interfaces::user::SyncService) | synchronization task tokens |
//!
//! ## Outcomes
//!
//! Each operation issues exactly one HTTP request and yields one of:
//!
//! - a value (`Ok(T)`), or `Ok(None)` / `Ok(false)` when the addressed resource
//!   does not exist;
//! - [`AppError::Domain`](error::AppError::Domain) when the service rejected the
//!   request, with the code and message from the response body;
//! - [`AppError::Transport`](error::AppError::Transport) when the request could
//!   not be completed;
//! - [`AppError::Decode`](error::AppError::Decode) when the response had an
//!   unexpected shape.
//!
//! Nothing is retried and nothing is cached.
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads `FIGO_ACCESS_TOKEN`,
//! `FIGO_API_URL`, `FIGO_REST_TIMEOUT` and the `FIGO_RATE_LIMIT_*` variables
//! from the environment or a `.env` file.
//!
//! ```rust,no_run
//! use figo_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let session = Session::from_config(&Config::new())?;
//!
//!     for transaction in session.get_transactions(Some("A1.2")).await? {
//!         info!("{} {:?}", transaction.amount, transaction.purpose);
//!     }
//!
//!     let token = session
//!         .get_sync_task_token(&get_state(), "http://localhost:3000/callback")
//!         .await?;
//!     info!("Open {} to synchronize", session.sync_url(&token));
//!     Ok(())
//! }
//! ```

/// Configuration, service interfaces and their implementations
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Transport and mapper seams, request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Resource models
pub mod presentation;
/// Authenticated session and response classification
pub mod session;
/// Environment, identifier and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
