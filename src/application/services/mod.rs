/// Account and transaction retrieval
pub mod account_service;
/// Notification retrieval and mutation
pub mod notification_service;
/// Payment retrieval and mutation
pub mod payment_service;
/// User profile and synchronization handshake
pub mod user_service;

pub use crate::application::interfaces::account::*;
pub use crate::application::interfaces::notification::*;
pub use crate::application::interfaces::payment::*;
pub use crate::application::interfaces::user::*;
