//! Misuse guard for untyped configuration input.
//!
//! The classic mistake with this kind of middleware is handing the
//! constructor a request where a configuration belongs (i.e. mounting the
//! unconfigured constructor directly as a handler). In the typed API that
//! cannot be expressed; on the untyped ingestion paths (TOML files, JSON
//! values) it shows up as a map full of request fields. The guard runs once
//! at ingestion, never per request.

use thiserror::Error;

use crate::pipeline::registry::HandlerName;

/// Keys that identify a request-shaped map.
const REQUEST_LIKE_KEYS: [&str; 5] = ["method", "uri", "url", "headers", "http_version"];

#[derive(Debug, Error)]
#[error(
    "a request was supplied where a configuration was expected; build the \
     pipeline from a configuration once, then pass each request to the \
     constructed handler (offending keys: {keys:?})"
)]
pub struct MisuseError {
    pub keys: Vec<String>,
}

/// Reject a key set that looks like a request rather than a configuration:
/// at least one request-like key and not a single known handler key.
fn reject_request_like<'a, I>(keys: I) -> Result<(), MisuseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut request_like = Vec::new();
    let mut any_handler_key = false;
    for key in keys {
        if REQUEST_LIKE_KEYS.contains(&key) {
            request_like.push(key.to_string());
        }
        if HandlerName::ALL.iter().any(|name| name.key() == key) {
            any_handler_key = true;
        }
    }
    if !request_like.is_empty() && !any_handler_key {
        return Err(MisuseError { keys: request_like });
    }
    Ok(())
}

pub fn reject_request_like_toml(value: &toml::Value) -> Result<(), MisuseError> {
    match value.as_table() {
        Some(table) => reject_request_like(table.keys().map(String::as_str)),
        None => Ok(()),
    }
}

pub fn reject_request_like_json(value: &serde_json::Value) -> Result<(), MisuseError> {
    match value.as_object() {
        Some(map) => reject_request_like(map.keys().map(String::as_str)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_shaped_map_is_rejected() {
        let value = serde_json::json!({
            "method": "GET",
            "url": "/",
            "headers": {}
        });
        let err = reject_request_like_json(&value).unwrap_err();
        assert!(err.to_string().contains("configuration was expected"));
    }

    #[test]
    fn configuration_with_handler_keys_passes() {
        // `headers` alone would look request-like; a known handler key
        // disambiguates.
        let value = serde_json::json!({
            "headers": {},
            "frameguard": true
        });
        assert!(reject_request_like_json(&value).is_ok());
    }

    #[test]
    fn empty_and_plain_configs_pass() {
        assert!(reject_request_like_json(&serde_json::json!({})).is_ok());
        assert!(
            reject_request_like_json(&serde_json::json!({ "no_sniff": false })).is_ok()
        );
    }
}
