// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, parse failures and validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bodylog_server::config::{CorsConfig, Environment, LogLevel, ServerConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const CONFIG_VARS: [&str; 8] = [
    "HTTP_PORT",
    "PORT",
    "HOST",
    "DATA_FILE",
    "TREND_WINDOW_DAYS",
    "ENVIRONMENT",
    "RUST_LOG",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_config_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("dev"),
        Environment::Development
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(!Environment::Development.is_production());
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.data_file, PathBuf::from("data/bodylog.json"));
    assert_eq!(config.trend_window_days, 30);
    assert_eq!(config.environment, Environment::Development);
    assert!(config.cors.allows_any_origin());
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_config_env();
    env::set_var("PORT", "8080");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("DATA_FILE", "/var/lib/bodylog/data.json");
    env::set_var("TREND_WINDOW_DAYS", "14");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "http://localhost:5173, https://bodylog.example.com");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.data_file, PathBuf::from("/var/lib/bodylog/data.json"));
    assert_eq!(config.trend_window_days, 14);
    assert!(config.environment.is_production());
    assert_eq!(
        config.cors.allowed_origins,
        vec!["http://localhost:5173", "https://bodylog.example.com"]
    );
    assert!(!config.cors.allows_any_origin());
}

#[test]
#[serial]
fn test_http_port_takes_precedence_over_port() {
    clear_config_env();
    env::set_var("HTTP_PORT", "4000");
    env::set_var("PORT", "5000");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.http_port, 4000);
}

#[test]
#[serial]
fn test_invalid_numbers_are_rejected() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
    env::set_var("TREND_WINDOW_DAYS", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
    env::set_var("TREND_WINDOW_DAYS", "200000000");
    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
}

#[test]
fn test_validate() {
    let config = ServerConfig::default();
    assert!(config.validate().is_ok());

    let zero_port = ServerConfig {
        http_port: 0,
        ..ServerConfig::default()
    };
    assert!(zero_port.validate().is_err());

    let empty_file = ServerConfig {
        data_file: PathBuf::new(),
        ..ServerConfig::default()
    };
    assert!(empty_file.validate().is_err());
}

#[test]
fn test_summary_mentions_address_and_file() {
    let config = ServerConfig {
        data_file: PathBuf::from("/tmp/bodylog.json"),
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_owned()],
        },
        ..ServerConfig::default()
    };

    let summary = config.summary();
    assert!(summary.contains("127.0.0.1:3000"));
    assert!(summary.contains("/tmp/bodylog.json"));
    assert!(summary.contains("http://localhost:5173"));
}
