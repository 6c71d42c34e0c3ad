// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads listen address, data file, trend window and CORS origins from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based server configuration

use crate::constants::{defaults, env_vars, limits};
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to a tracing level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; a single `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether any origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(defaults::DEFAULT_CORS_ORIGINS),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind host
    pub host: String,
    /// Path of the JSON data file
    pub data_file: PathBuf,
    /// Lookback window for trend fitting, in days
    pub trend_window_days: u32,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::DEFAULT_HTTP_PORT,
            host: defaults::DEFAULT_HOST.to_owned(),
            data_file: PathBuf::from(defaults::DEFAULT_DATA_FILE),
            trend_window_days: defaults::DEFAULT_TREND_WINDOW_DAYS,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or the resulting
    /// configuration fails validation.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env::var(env_vars::HTTP_PORT).or_else(|_| env::var(env_vars::PORT)) {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid HTTP port: {raw}"))?,
            Err(_) => defaults::DEFAULT_HTTP_PORT,
        };

        let trend_window_days = env_var_or(
            env_vars::TREND_WINDOW_DAYS,
            &defaults::DEFAULT_TREND_WINDOW_DAYS.to_string(),
        )
        .parse::<u32>()
        .context("Invalid TREND_WINDOW_DAYS value")?;

        let config = Self {
            http_port,
            host: env_var_or(env_vars::HOST, defaults::DEFAULT_HOST),
            data_file: PathBuf::from(env_var_or(env_vars::DATA_FILE, defaults::DEFAULT_DATA_FILE)),
            trend_window_days,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_vars::RUST_LOG, "info")),
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::DEFAULT_CORS_ORIGINS,
                )),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for port 0, an empty data file path, or a trend
    /// window outside `1..=MAX_WINDOW_DAYS`.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            bail!("HTTP port must be greater than 0");
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(anyhow!("DATA_FILE must not be empty"));
        }
        if self.trend_window_days == 0 {
            bail!("TREND_WINDOW_DAYS must be at least 1");
        }
        if self.trend_window_days > limits::MAX_WINDOW_DAYS {
            bail!(
                "TREND_WINDOW_DAYS must be at most {}",
                limits::MAX_WINDOW_DAYS
            );
        }
        Ok(())
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Bodylog Server Configuration:\n\
             - HTTP Address: {}\n\
             - Data File: {}\n\
             - Trend Window: {} days\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.data_file.display(),
            self.trend_window_days,
            self.environment,
            self.log_level,
            self.cors.allowed_origins.join(", ")
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
