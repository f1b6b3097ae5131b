//! Environment-sourced configuration
//!
//! Missing variables resolve to empty strings rather than load errors; the
//! identity platform rejects empty credentials and the failure surfaces
//! through the normal error path.

use std::env;

/// Read-once configuration for a single probe run
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub from_email: String,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("MICROSOFT_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("MICROSOFT_CLIENT_SECRET").unwrap_or_default(),
            tenant_id: env::var("MICROSOFT_TENANT_ID").unwrap_or_default(),
            from_email: env::var("FROM_EMAIL").unwrap_or_default(),
        }
    }
}
