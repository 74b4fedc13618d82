/// Default base URL of the figo API
pub const DEFAULT_BASE_URL: &str = "https://api.figo.me";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default maximum number of requests per rate limiter period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Default rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default number of requests that may be issued at once
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// User agent string used in HTTP requests to identify this client to the figo API
pub const USER_AGENT: &str = "figo-client/0.1.0";
/// Length of the random state strings generated for the sync handshake
pub const STATE_LENGTH: usize = 24;
/// Prefix shared by every REST resource path
pub const REST_PREFIX: &str = "/rest";
