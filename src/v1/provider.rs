//! Sources of `oauth_nonce` and `oauth_timestamp`.
//!
//! A [`Providers`] value can be handed to a [`Signer`](super::Signer)
//! directly. The crate-level `sign` reads a process-wide pair instead, which
//! [`set_nonce_provider`] and [`set_timestamp_provider`] replace.

use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use chrono::Utc;
use rand::Rng;
use tracing::debug;

type ProviderFn = dyn Fn() -> String + Send + Sync;

static GLOBAL_PROVIDERS: LazyLock<RwLock<Providers>> =
    LazyLock::new(|| RwLock::new(Providers::system()));

/// Nonce and timestamp generators used while collecting protocol parameters.
#[derive(Clone)]
pub struct Providers {
    nonce: Arc<ProviderFn>,
    timestamp: Arc<ProviderFn>,
}

impl Providers {
    /// CSPRNG nonce and wall-clock timestamp.
    pub fn system() -> Self {
        Providers {
            nonce: Arc::new(generate_nonce),
            timestamp: Arc::new(generate_timestamp),
        }
    }

    /// Constant nonce and timestamp, for reproducible signatures.
    pub fn fixed(nonce: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let nonce = nonce.into();
        let timestamp = timestamp.into();
        Providers::system()
            .with_nonce(move || nonce.clone())
            .with_timestamp(move || timestamp.clone())
    }

    pub fn with_nonce<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.nonce = Arc::new(provider);
        self
    }

    pub fn with_timestamp<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.timestamp = Arc::new(provider);
        self
    }

    pub fn nonce(&self) -> String {
        (self.nonce)()
    }

    pub fn timestamp(&self) -> String {
        (self.timestamp)()
    }
}

impl Default for Providers {
    fn default() -> Self {
        Providers::system()
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Providers").finish_non_exhaustive()
    }
}

/// 16 random bytes, standard base64.
pub fn generate_nonce() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    BASE64_STANDARD.encode(bytes)
}

/// Current Unix time in whole seconds.
pub fn generate_timestamp() -> String {
    Utc::now().timestamp().to_string()
}

/// Replace the process-wide nonce provider.
///
/// The provider is stored as given and first called by the next signing call.
pub fn set_nonce_provider<F>(provider: F)
where
    F: Fn() -> String + Send + Sync + 'static,
{
    let mut providers = GLOBAL_PROVIDERS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    providers.nonce = Arc::new(provider);
    debug!("replaced global nonce provider");
}

/// Replace the process-wide timestamp provider.
pub fn set_timestamp_provider<F>(provider: F)
where
    F: Fn() -> String + Send + Sync + 'static,
{
    let mut providers = GLOBAL_PROVIDERS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    providers.timestamp = Arc::new(provider);
    debug!("replaced global timestamp provider");
}

/// Restore the process-wide providers to [`Providers::system`].
pub fn reset_providers() {
    *GLOBAL_PROVIDERS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Providers::system();
    debug!("reset global providers");
}

/// Snapshot of the process-wide providers.
///
/// Both providers are read under one lock, so a concurrent replacement is
/// either fully visible or not at all.
pub fn current_providers() -> Providers {
    GLOBAL_PROVIDERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
