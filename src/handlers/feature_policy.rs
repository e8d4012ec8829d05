//! `Feature-Policy` — per-feature origin allowlists. Superseded by
//! Permissions-Policy; kept behind a deprecation notice.

use std::collections::BTreeMap;

use http::HeaderName;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;
use crate::pipeline::registry::HandlerName;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FeaturePolicyOptions {
    /// Feature name to allowlist (`'self'`, `'none'`, `*`, origins).
    /// Must contain at least one feature.
    pub features: BTreeMap<String, Vec<String>>,
}

pub fn handler(options: &FeaturePolicyOptions) -> Result<Handler, BuildError> {
    if options.features.is_empty() {
        return Err(BuildError::invalid(
            HandlerName::FeaturePolicy,
            "at least one feature is required",
        ));
    }
    let mut rendered = Vec::with_capacity(options.features.len());
    for (feature, allowlist) in &options.features {
        if feature.is_empty() || allowlist.is_empty() {
            return Err(BuildError::invalid(
                HandlerName::FeaturePolicy,
                format!("feature {feature:?} needs a non-empty allowlist"),
            ));
        }
        rendered.push(format!("{feature} {}", allowlist.join(" ")));
    }
    let value = super::header_value(HandlerName::FeaturePolicy, &rendered.join("; "))?;
    Ok(super::set_header(HeaderName::from_static("feature-policy"), value))
}
