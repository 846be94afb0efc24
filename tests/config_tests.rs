use discountex::config;
use std::env;
use std::time::Duration;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://www.wellcome.com.hk/"),
        "https://www.wellcome.com.hk"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("http://127.0.0.1:9000///"),
        "http://127.0.0.1:9000"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://www.wellcome.com.hk/  "),
        "https://www.wellcome.com.hk"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), config::DEFAULT_UPSTREAM_BASE_URL);
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_UPSTREAM_BASE_URL);
}

// Each environment variable is exercised by a single test so parallel tests
// never race on the same key.

#[test]
fn test_get_port() {
    env::remove_var("PORT");
    assert_eq!(config::get_port(), 3000);

    env::set_var("PORT", "8081");
    assert_eq!(config::get_port(), 8081);

    env::set_var("PORT", "not-a-port");
    assert_eq!(config::get_port(), 3000);

    env::remove_var("PORT");
}

#[test]
fn test_get_upstream_base_url() {
    env::remove_var("UPSTREAM_BASE_URL");
    assert_eq!(config::get_upstream_base_url(), "https://www.wellcome.com.hk");

    env::set_var("UPSTREAM_BASE_URL", "http://localhost:9999/");
    assert_eq!(config::get_upstream_base_url(), "http://localhost:9999");

    env::remove_var("UPSTREAM_BASE_URL");
}

#[test]
fn test_get_upstream_timeout() {
    env::remove_var("UPSTREAM_TIMEOUT_SECS");
    assert_eq!(config::get_upstream_timeout(), Duration::from_secs(10));

    env::set_var("UPSTREAM_TIMEOUT_SECS", "3");
    assert_eq!(config::get_upstream_timeout(), Duration::from_secs(3));

    env::set_var("UPSTREAM_TIMEOUT_SECS", "0");
    assert_eq!(config::get_upstream_timeout(), Duration::from_secs(10));

    env::remove_var("UPSTREAM_TIMEOUT_SECS");
}

#[test]
fn test_get_host_and_public_dir_defaults() {
    env::remove_var("HOST");
    env::remove_var("PUBLIC_DIR");
    assert_eq!(config::get_host(), "0.0.0.0");
    assert_eq!(config::get_public_dir(), "public");

    env::set_var("PUBLIC_DIR", " assets ");
    assert_eq!(config::get_public_dir(), "assets");
    env::remove_var("PUBLIC_DIR");
}
