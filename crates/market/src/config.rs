//! Marketplace configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PARTSBAY_DATA_DIR` - Directory for the local store (default: `partsbay-data`)
//! - `ANTHROPIC_API_KEY` - Credential for description generation; when
//!   absent, the feature is disabled and no network call is ever made
//! - `PARTSBAY_DESCRIBE_MODEL` - Model id for description generation
//!   (default: `claude-3-5-haiku-latest`)

use std::path::PathBuf;

use secrecy::SecretString;

/// Default model for description generation.
const DEFAULT_DESCRIBE_MODEL: &str = "claude-3-5-haiku-latest";

/// Marketplace application configuration.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Directory holding the local store.
    pub data_dir: PathBuf,
    /// Description-generation configuration; `None` disables the feature.
    pub describe: Option<DescribeConfig>,
}

/// Description-generation service configuration.
#[derive(Debug, Clone)]
pub struct DescribeConfig {
    /// API credential. `SecretString` redacts it from Debug output.
    pub api_key: SecretString,
    /// Model id to request.
    pub model: String,
}

impl MarketConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable is optional, so loading never fails.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_env_or_default("PARTSBAY_DATA_DIR", "partsbay-data").into();
        let describe = get_optional_env("ANTHROPIC_API_KEY").map(|key| DescribeConfig {
            api_key: SecretString::from(key),
            model: get_env_or_default("PARTSBAY_DESCRIBE_MODEL", DEFAULT_DESCRIBE_MODEL),
        });

        Self { data_dir, describe }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
