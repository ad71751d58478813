//! Error types for OAuth signing.

/// Error raised while building a signed `Authorization` header.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed request URL, or a URL without a host.
    #[error("URL parse error")]
    Parse(#[from] url::ParseError),

    /// Request body that cannot be flattened into form parameters.
    #[error("body must be a string or flat object")]
    InvalidBody(#[from] serde_urlencoded::ser::Error),

    /// Generated header could not be stored as an HTTP header value.
    #[cfg(feature = "reqwest")]
    #[error("invalid header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
