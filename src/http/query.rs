//! Query string and path parameter extraction.

use std::collections::HashMap;

/// Parse a raw query string into a key-value map.
///
/// Pairs are `&`-delimited and `=`-delimited. Pairs without a `=` are
/// skipped. For duplicate keys the last occurrence wins.
pub fn parse_query_string(query: &str) -> HashMap<&str, &str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect()
}

/// Look up a single query parameter by name.
pub fn extract_query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    parse_query_string(query).get(name).copied()
}

/// The final `/`-delimited segment of a request path.
pub fn extract_path_param(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}
