use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::{debug, trace};
use url::Url;

use super::credential::Credential;
use super::encoder::{canonical_parameter_string, percent_encode};
use super::header::authorization_header;
use super::parameters::{collect_parameters, Body};
use super::provider::{current_providers, Providers};
use crate::error::Result;
use crate::util;

type HmacSha1 = Hmac<Sha1>;

/// `METHOD&encoded(base_url)&encoded(param_string)`.
///
/// The method is uppercased; query and fragment of `url` are dropped.
pub fn signature_base_string(url: &Url, method: &str, param_string: &str) -> Result<String> {
    let base_url = util::base_url(url)?;
    Ok(format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(&base_url),
        percent_encode(param_string)
    ))
}

/// `encoded(consumer_secret)&encoded(token_secret)`; either secret may be empty.
pub fn signing_key(credential: &Credential) -> String {
    format!(
        "{}&{}",
        percent_encode(&credential.consumer_secret),
        percent_encode(&credential.token_secret)
    )
}

/// Base64 (standard alphabet, padded) HMAC-SHA1 of `base_string`.
pub fn hmac_sha1(base_string: &str, signing_key: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .expect("HMAC accepts keys of any size");
    mac.update(base_string.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// OAuth 1.0a HMAC-SHA1 request signer.
#[derive(Clone, Debug, Default)]
pub struct Signer {
    providers: Providers,
}

impl Signer {
    pub fn new(providers: Providers) -> Self {
        Signer { providers }
    }

    /// Signer over a snapshot of the process-wide providers.
    pub fn from_global() -> Self {
        Signer::new(current_providers())
    }

    pub fn providers(&self) -> &Providers {
        &self.providers
    }

    /// Parse `url` and sign the request.
    pub fn sign(
        &self,
        url: &str,
        method: &str,
        credential: &Credential,
        body: impl Into<Body>,
    ) -> Result<String> {
        let url = Url::parse(url)?;
        self.sign_url(&url, method, credential, &body.into())
    }

    /// Sign the request and return the `Authorization` header value.
    pub fn sign_url(
        &self,
        url: &Url,
        method: &str,
        credential: &Credential,
        body: &Body,
    ) -> Result<String> {
        let params = collect_parameters(url, credential, body, &self.providers);
        let param_string = canonical_parameter_string(&params);
        let base_string = signature_base_string(url, method, &param_string)?;
        trace!(%base_string, "built signature base string");

        let signature = hmac_sha1(&base_string, &signing_key(credential));
        debug!(method, url = %url, "signed request");
        Ok(authorization_header(&params, &signature))
    }
}
