use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::parameters::ParameterSet;

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded, '!', '*', '(', ')' and '\'' included.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `input` with the OAuth (RFC 5849) rules.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, TARGETS_FOR_PARAMS).to_string()
}

/// Sorted `key=value` pairs joined with `&`, keys and values percent-encoded.
pub fn canonical_parameter_string(params: &ParameterSet) -> String {
    join_sorted(params, "&", |k, v| format!("{}={}", k, v))
}

/// Sort by raw key bytes, encode each pair, render it with `format_pair`, then join.
pub(crate) fn join_sorted<F>(params: &ParameterSet, separator: &str, format_pair: F) -> String
where
    F: Fn(&str, &str) -> String,
{
    let mut pairs = params.iter().collect::<Vec<(&String, &String)>>();
    pairs.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
    pairs
        .into_iter()
        .map(|(k, v)| format_pair(&percent_encode(k), &percent_encode(v)))
        .collect::<Vec<String>>()
        .join(separator)
}
