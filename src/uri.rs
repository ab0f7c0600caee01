use crate::error::{HotpError, HotpResult};

/// Assemble a query string from ordered key-value pairs, percent-encoding
/// each value. Keys are written in the order given so output is
/// deterministic.
pub(crate) fn build_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Tokenize the query portion of a URI into decoded key-value pairs.
pub(crate) fn query_items(uri: &str) -> HotpResult<Vec<(String, String)>> {
    let query = uri.split_once('?').map(|(_, query)| query).unwrap_or("");
    serde_urlencoded::from_str(query).map_err(|err| HotpError::MalformedUri {
        uri: uri.to_string(),
        source: Box::new(HotpError::InvalidArgument(err.to_string())),
    })
}
