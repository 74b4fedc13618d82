/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Transport seam and the reqwest-based HTTP transport
pub mod http;
/// Response mapper seam and its JSON implementation
pub mod mapper;
/// Request models for API calls
pub mod requests;
/// Response envelopes from API calls
pub mod responses;
