use super::encoder::join_sorted;
use super::parameters::ParameterSet;
use super::values::*;

/// Render the `Authorization` header value.
///
/// Only `oauth_*` parameters (and `signature` as `oauth_signature`) are
/// emitted; query and body parameters are signed but never sent here.
/// `params` itself is left untouched.
pub fn authorization_header(params: &ParameterSet, signature: &str) -> String {
    let mut oauth_params = params
        .iter()
        .filter(|(k, _)| k.starts_with(OAUTH_PARAM_PREFIX))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect::<ParameterSet>();
    oauth_params.insert(OAUTH_PARAM_KEY_SIGNATURE.to_string(), signature.to_string());

    format!("{} {}", OAUTH_HEADER, header_parameter_string(&oauth_params))
}

/// Sorted `key="value"` pairs joined with `, `.
pub fn header_parameter_string(params: &ParameterSet) -> String {
    join_sorted(params, ", ", |k, v| format!("{}=\"{}\"", k, v))
}
