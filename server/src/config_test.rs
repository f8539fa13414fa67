use super::*;

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()` so no other test sees a half-written environment.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DEPLOY_FEED_INTERVAL_SECS");
        std::env::remove_var("DEPLOY_FEED_SERVICE");
        std::env::remove_var("DEPLOY_FEED_ENVIRONMENT");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _env = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.feed.interval, Duration::from_secs(5));
    assert_eq!(cfg.feed.service, Service::AuthService);
    assert_eq!(cfg.feed.environment, Environment::Prod);
}

#[test]
fn from_env_parses_overrides() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("DEPLOY_FEED_INTERVAL_SECS", "2");
        std::env::set_var("DEPLOY_FEED_SERVICE", "checkout-service");
        std::env::set_var("DEPLOY_FEED_ENVIRONMENT", " test ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.feed.interval, Duration::from_secs(2));
    assert_eq!(cfg.feed.service, Service::CheckoutService);
    assert_eq!(cfg.feed.environment, Environment::Test);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_zero_interval() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("DEPLOY_FEED_INTERVAL_SECS", "0");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("DEPLOY_FEED_INTERVAL_SECS"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_unknown_feed_service() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("DEPLOY_FEED_SERVICE", "login-service");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::FeedTarget(OpsError::UnknownService(_))));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_trims_numeric_values() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("DEPLOY_FEED_INTERVAL_SECS", " 3");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.feed.interval, Duration::from_secs(3));

    unsafe { clear_server_env() };
}
