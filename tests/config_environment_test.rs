// ABOUTME: Tests for environment-driven server, session generator, and logging configuration
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bravoball_server::config::{ConfigError, Environment, ServerConfig, SessionGeneratorConfig};
use bravoball_server::constants::{defaults, ports};
use bravoball_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};

const MANAGED_VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "DATABASE_URL",
    "ENVIRONMENT",
    "RUST_LOG",
    "CORS_ORIGINS",
    "LOG_FORMAT",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
    "SESSION_WEIGHT_PRIMARY_SKILL",
    "SESSION_ESTIMATE_FALLBACK_MINUTES",
    "SESSION_MIN_SCORE",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_server_config_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, ports::DEFAULT_HTTP_PORT);
    assert_eq!(config.database_url, defaults::DATABASE_URL);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors_origins, vec!["*"]);
    assert_eq!(config.session, SessionGeneratorConfig::default());
}

#[test]
#[serial]
fn test_server_config_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HOST", "127.0.0.1");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "production");
    env::set_var(
        "CORS_ORIGINS",
        "https://app.bravoball.example, https://admin.bravoball.example",
    );
    env::set_var("SESSION_MIN_SCORE", "2.5");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9090");
    assert!(config.environment.is_production());
    assert_eq!(config.cors_origins.len(), 2);
    assert!((config.session.min_score - 2.5).abs() < f64::EPSILON);
    assert!(config.summary().contains("bind=127.0.0.1:9090"));
}

#[test]
#[serial]
fn test_server_config_rejects_bad_values() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    env::set_var("HTTP_PORT", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("HOST", "somewhere");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("SESSION_WEIGHT_PRIMARY_SKILL", "lots");
    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_session_config_from_env() {
    clear_env();
    env::set_var("SESSION_ESTIMATE_FALLBACK_MINUTES", "12");

    let config = SessionGeneratorConfig::from_env().unwrap();
    assert_eq!(config.estimates.fallback_minutes, 12);

    env::set_var("SESSION_MIN_SCORE", "-1");
    let result = SessionGeneratorConfig::from_env();
    clear_env();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, defaults::LOG_LEVEL);
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);

    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");
    let config = LoggingConfig::from_env().with_service_name("bravoball-test");
    clear_env();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.service_name, "bravoball-test");
    assert!(config.env_filter().is_ok());
}
