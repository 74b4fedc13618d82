/// Account and transaction service interfaces
pub mod account;
/// Notification service interface
pub mod notification;
/// Payment service interface
pub mod payment;
/// User and synchronization service interfaces
pub mod user;
