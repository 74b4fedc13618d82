/// Session type and request dispatch
pub mod interface;
/// Path templates of the REST resources
pub mod paths;
/// Classification of responses into values, absence and failures
pub mod response;
