//! OAuth 1.0a signing with the HMAC-SHA1 signature method.
//!
//! The pipeline runs parameter collection, canonicalization, base string
//! construction, signing and header formatting in that order; every stage is
//! exposed so it can be checked on its own.

pub mod credential;
pub mod encoder;
pub mod header;
pub mod parameters;
pub mod provider;
pub mod signer;
pub mod values;

#[cfg(feature = "reqwest")]
pub mod client;

pub use credential::Credential;
pub use encoder::{canonical_parameter_string, percent_encode};
pub use header::{authorization_header, header_parameter_string};
pub use parameters::{collect_parameters, Body, ParameterSet};
pub use provider::{
    current_providers, reset_providers, set_nonce_provider, set_timestamp_provider, Providers,
};
pub use signer::{hmac_sha1, signature_base_string, signing_key, Signer};

#[cfg(feature = "reqwest")]
pub use client::SignRequest;
