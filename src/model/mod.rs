/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP collaborator and its reqwest implementation
pub mod http;
/// Ordered request parameters
pub mod options;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Date and filter key helpers
pub mod utils;
