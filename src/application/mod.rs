/// Client entry point
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces and traits
pub mod interfaces;
/// Service implementations
pub mod services;
