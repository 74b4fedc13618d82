/// Application configuration module
pub mod config;
/// Service interfaces implemented by the session
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Service implementations on top of the session
pub mod services;
