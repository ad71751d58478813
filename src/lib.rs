//! OAuth 1.0a request signing with HMAC-SHA1.
//!
//! ```no_run
//! use oauthsign_hmac::{sign, Body, Credential};
//!
//! let credential = Credential::new("consumer_key", "consumer_secret", "token", "token_secret");
//! let header = sign(
//!     "https://api.example.com/1/statuses/update.json",
//!     "POST",
//!     &credential,
//!     "status=hello",
//! )?;
//! assert!(header.starts_with("OAuth "));
//! # Ok::<(), oauthsign_hmac::Error>(())
//! ```

pub mod error;
pub mod v1;

mod util;

pub use error::{Error, Result};
pub use v1::{
    current_providers, reset_providers, set_nonce_provider, set_timestamp_provider, Body,
    Credential, ParameterSet, Providers, Signer,
};

/// Sign a request with the process-wide nonce and timestamp providers.
///
/// Returns the full `Authorization` header value.
pub fn sign(
    url: &str,
    method: &str,
    credential: &Credential,
    body: impl Into<Body>,
) -> Result<String> {
    Signer::from_global().sign(url, method, credential, body)
}
