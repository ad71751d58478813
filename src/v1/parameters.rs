use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use url::Url;

use super::credential::Credential;
use super::provider::Providers;
use super::values::*;
use crate::error::Result;
use crate::util;

/// Parameter name to value; keys are unique.
pub type ParameterSet = HashMap<String, String>;

/// Request body parameters that take part in the signature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Body {
    /// No body parameters.
    #[default]
    Empty,
    /// An `application/x-www-form-urlencoded` string.
    Form(String),
    /// Already decoded parameters.
    Params(ParameterSet),
}

impl Body {
    /// Flatten a serializable value into form parameters.
    ///
    /// Fails with `InvalidBody` when the value has no flat form
    /// representation (nested maps, sequences of structs, ...).
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Body::Form(serde_urlencoded::to_string(value)?))
    }

    fn to_parameters(&self) -> ParameterSet {
        match self {
            Body::Empty => ParameterSet::new(),
            Body::Form(form) => util::form_parameters(form),
            Body::Params(params) => params.clone(),
        }
    }
}

impl From<&str> for Body {
    fn from(form: &str) -> Self {
        Body::Form(form.to_string())
    }
}

impl From<String> for Body {
    fn from(form: String) -> Self {
        Body::Form(form)
    }
}

impl From<ParameterSet> for Body {
    fn from(params: ParameterSet) -> Self {
        Body::Params(params)
    }
}

impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for Body {
    fn from(params: BTreeMap<K, V>) -> Self {
        params.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Body {
    fn from(params: Vec<(K, V)>) -> Self {
        params.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Body {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Body::Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Merge query, body and protocol parameters, in that order of precedence.
///
/// Protocol parameters are inserted last, so a query or body parameter that
/// shares a name with one of them never survives.
pub fn collect_parameters(
    url: &Url,
    credential: &Credential,
    body: &Body,
    providers: &Providers,
) -> ParameterSet {
    let mut params = util::query_parameters(url);
    params.extend(body.to_parameters());

    let basic_params = [
        (OAUTH_PARAM_KEY_CONSUMER_KEY, credential.consumer_key.clone()),
        (OAUTH_PARAM_KEY_TOKEN, credential.token.clone()),
        (OAUTH_PARAM_KEY_NONCE, providers.nonce()),
        (OAUTH_PARAM_KEY_TIMESTAMP, providers.timestamp()),
        (
            OAUTH_PARAM_KEY_SIGNATURE_METHOD,
            OAUTH_VALUE_SIGMETHOD_HMACSHA1.to_string(),
        ),
        (OAUTH_PARAM_KEY_VERSION, OAUTH_VALUE_VERSION.to_string()),
    ];
    params.extend(basic_params.into_iter().map(|(k, v)| (k.to_string(), v)));
    params
}
