// Common utilities for integration tests

use thinkific_client::prelude::*;

pub const TEST_API_KEY: &str = "test_api_key";
pub const TEST_SUBDOMAIN: &str = "test-school";

/// Configuration pointing at the given mock server
pub fn create_test_config(server_url: &str) -> Config {
    Config::with_credentials(TEST_API_KEY, TEST_SUBDOMAIN).with_base_url(server_url)
}

/// Creates a client against the given mock server
pub fn create_test_client(server_url: &str) -> Client {
    setup_logger();
    Client::new(create_test_config(server_url)).expect("Failed to create client")
}
