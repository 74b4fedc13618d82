/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # figo Client Prelude
//!
//! Convenient imports for the most commonly used types and traits.
//!
//! ```rust,no_run
//! use figo_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let session = Session::new("ASHWLIkouP2O6_bgA2wWReRhletgWKHYjLqDaqb0LFfam")?;
//! if let Some(account) = session.get_account("A1.2").await? {
//!     info!("{} balance: {}", account.display_name(), account.balance.balance);
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the figo API client
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error taxonomy
pub use crate::error::{AppError, FailureKind, FigoResult};

// ============================================================================
// SESSION AND COLLABORATORS
// ============================================================================

/// Authenticated session
pub use crate::session::interface::Session;

/// Transport seam and default HTTP transport
pub use crate::model::http::{HttpTransport, RawResponse, Transport};

/// Response mapper seam and default JSON mapper
pub use crate::model::mapper::{JsonMapper, ResponseMapper};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::account::{AccountService, TransactionService};
pub use crate::application::interfaces::notification::NotificationService;
pub use crate::application::interfaces::payment::PaymentService;
pub use crate::application::interfaces::user::{SyncService, UserService};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::SyncRequest;
pub use crate::presentation::account::{Account, AccountBalance, SyncStatus};
pub use crate::presentation::notification::Notification;
pub use crate::presentation::payment::Payment;
pub use crate::presentation::transaction::{Transaction, TransactionQuery};
pub use crate::presentation::user::{User, UserAddress};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Random state values for the sync handshake
pub use crate::utils::id::get_state;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use tracing::{debug, error, info, warn};
