use std::env;
use thinkific_client::application::config::Config;
use thinkific_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use thinkific_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("TK_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("TK_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("TK_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("TK_MISSING_VAR");
        let result: String = get_env_or_default("TK_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("TK_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("TK_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("TK_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("TK_TEST_VAR_OPTION", "123");
        assert_eq!(get_env_or_none::<i32>("TK_TEST_VAR_OPTION"), Some(123));
        env::set_var("TK_TEST_VAR_OPTION", "abc");
        assert_eq!(get_env_or_none::<i32>("TK_TEST_VAR_OPTION"), None);
        env::remove_var("TK_TEST_VAR_OPTION");
        assert_eq!(get_env_or_none::<i32>("TK_TEST_VAR_OPTION"), None);
    }
}

#[test]
fn test_config_with_credentials_uses_defaults() {
    let config = Config::with_credentials("key", "school");
    assert_eq!(config.credentials.api_key, "key");
    assert_eq!(config.credentials.subdomain, "school");
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECONDS);
}

#[test]
fn test_config_with_base_url() {
    let config = Config::with_credentials("key", "school").with_base_url("http://localhost:1234");
    assert_eq!(config.rest_api.base_url, "http://localhost:1234");
}

