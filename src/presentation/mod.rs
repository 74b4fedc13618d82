/// Account and balance models
pub mod account;
/// Notification (webhook subscription) models
pub mod notification;
/// Payment models
pub mod payment;
/// Transaction models and listing filters
pub mod transaction;
/// User profile models
pub mod user;
