//! Config from the real process environment.

use postdeck::config::{Config, ENV_BASE_URL, ENV_PAGE_SIZE, ENV_TIMEOUT_SECS};
use postdeck::error::ConfigError;
use serial_test::serial;
use std::time::Duration;

struct EnvGuard(&'static [&'static str]);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in self.0 {
            std::env::remove_var(name);
        }
    }
}

const VARS: &[&str] = &[ENV_BASE_URL, ENV_PAGE_SIZE, ENV_TIMEOUT_SECS];

#[test]
#[serial]
fn test_from_env_overrides_defaults() {
    let _guard = EnvGuard(VARS);
    std::env::set_var(ENV_BASE_URL, "http://localhost:4000");
    std::env::set_var(ENV_PAGE_SIZE, "25");
    std::env::set_var(ENV_TIMEOUT_SECS, "5");

    let config = Config::from_env().unwrap();
    assert_eq!(config.endpoints.base_url, "http://localhost:4000");
    assert_eq!(config.page_size, 25);
    assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
}

#[test]
#[serial]
fn test_from_env_rejects_bad_number() {
    let _guard = EnvGuard(VARS);
    std::env::set_var(ENV_PAGE_SIZE, "ten");

    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::InvalidValue { name, .. }) if name == ENV_PAGE_SIZE
    ));
}

#[test]
#[serial]
fn test_zero_page_size_fails_validation() {
    let _guard = EnvGuard(VARS);
    std::env::set_var(ENV_PAGE_SIZE, "0");

    let config = Config::from_env().unwrap();
    assert_eq!(config.validate(), Err(ConfigError::ZeroPageSize));
}
