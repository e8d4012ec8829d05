//! `Expect-CT` — Certificate Transparency enforcement signaling.

use http::HeaderName;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;
use crate::pipeline::registry::HandlerName;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExpectCtOptions {
    /// Fail connections that do not comply instead of only reporting.
    pub enforce: bool,

    /// Seconds the browser should cache the policy.
    pub max_age: u64,

    /// Violation report destination.
    pub report_uri: Option<String>,
}

pub fn handler(options: &ExpectCtOptions) -> Result<Handler, BuildError> {
    let mut parts = Vec::with_capacity(3);
    if options.enforce {
        parts.push("enforce".to_string());
    }
    parts.push(format!("max-age={}", options.max_age));
    if let Some(uri) = &options.report_uri {
        parts.push(format!("report-uri=\"{uri}\""));
    }
    let value = super::header_value(HandlerName::ExpectCt, &parts.join(", "))?;
    Ok(super::set_header(HeaderName::from_static("expect-ct"), value))
}
