// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Bodylog tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Defaults applied when the data file or configuration omits a value
pub mod defaults {
    /// Height used when no height has been recorded yet (centimeters)
    pub const DEFAULT_HEIGHT_CM: f64 = 175.0;
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default location of the JSON data file
    pub const DEFAULT_DATA_FILE: &str = "data/bodylog.json";
    /// Default CORS origin list (any origin)
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
    /// Default lookback window for trend fitting, in days
    pub const DEFAULT_TREND_WINDOW_DAYS: u32 = 30;
}

/// Validation bounds for user-entered values
pub mod limits {
    /// Lowest accepted body-fat percentage
    pub const MIN_BODY_FAT_PCT: f64 = 0.0;
    /// Highest accepted body-fat percentage
    pub const MAX_BODY_FAT_PCT: f64 = 100.0;
    /// Upper sanity bound for body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 700.0;
    /// Upper sanity bound for height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Longest accepted trend lookback window, in days
    pub const MAX_WINDOW_DAYS: u32 = 36_500;
}

/// Environment variable names read by the server configuration
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Fallback HTTP listen port name used by most hosting platforms
    pub const PORT: &str = "PORT";
    /// Bind host
    pub const HOST: &str = "HOST";
    /// Path of the JSON data file
    pub const DATA_FILE: &str = "DATA_FILE";
    /// Lookback window for trend fitting, in days
    pub const TREND_WINDOW_DAYS: &str = "TREND_WINDOW_DAYS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Comma-separated list of allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP server binary
    pub const BODYLOG_SERVER: &str = "bodylog-server";
}
