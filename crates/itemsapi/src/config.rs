use std::env;

use anyhow::Context;
use itemsapi_core::storage::ScanLimit;

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "itemsapi=info,itemsapi_core=info";

/// Function configuration loaded once from environment variables at cold
/// start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the items table (`DYNAMODB_TABLE`).
    pub table_name: Option<String>,
    /// Maximum number of items returned by a scan (default: 50)
    pub scan_limit: ScanLimit,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE` - Items table name (required by the DynamoDB backend)
    /// - `SCAN_LIMIT` - Scan cap, at least 1 (default: 50)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("DYNAMODB_TABLE").filter(|v| !v.trim().is_empty()),
            scan_limit: lookup("SCAN_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .and_then(|n| ScanLimit::new(n).ok())
                .unwrap_or_default(),
        }
    }

    /// Returns the table name, failing if it was not configured.
    pub fn require_table_name(&self) -> anyhow::Result<&str> {
        self.table_name
            .as_deref()
            .context("DYNAMODB_TABLE environment variable is not set")
    }
}
