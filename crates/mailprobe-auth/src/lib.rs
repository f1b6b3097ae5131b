//! Authentication module for mailprobe
//!
//! Implements the OAuth2 client-credentials grant against the Microsoft
//! identity platform: the application authenticates as itself (no user
//! context) and receives a bearer token scoped to the Graph API.

mod client_credentials;
mod error;

pub use client_credentials::{AppCredentials, TokenClient, TokenResponse};
pub use error::{AuthError, AuthResult};

/// Microsoft identity-platform endpoints and scopes
pub mod entra {
    /// Token endpoints are tenant-scoped under this authority
    pub const AUTHORITY: &str = "https://login.microsoftonline.com";

    /// App-only scope covering all Graph application permissions
    pub const GRAPH_DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";
}
