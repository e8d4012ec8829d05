//! `X-Content-Type-Options: nosniff` — disables MIME type sniffing.

use http::header::X_CONTENT_TYPE_OPTIONS;
use http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NoSniffOptions {}

pub fn handler(_options: &NoSniffOptions) -> Result<Handler, BuildError> {
    Ok(super::set_header(
        X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    ))
}
