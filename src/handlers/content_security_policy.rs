//! `Content-Security-Policy` — directive-based resource loading policy.
//!
//! Directives are kept in a `BTreeMap` so the serialized policy is
//! deterministic regardless of how the configuration was written.

use std::collections::BTreeMap;

use http::header::CONTENT_SECURITY_POLICY;
use http::HeaderName;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;
use crate::pipeline::registry::HandlerName;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentSecurityPolicyOptions {
    /// Directive name to source list. An empty source list emits a bare
    /// directive (e.g. `upgrade-insecure-requests`).
    pub directives: BTreeMap<String, Vec<String>>,

    /// Emit `Content-Security-Policy-Report-Only` instead of enforcing.
    pub report_only: bool,
}

impl Default for ContentSecurityPolicyOptions {
    fn default() -> Self {
        let mut directives = BTreeMap::new();
        directives.insert("default-src".to_string(), vec!["'self'".to_string()]);
        Self {
            directives,
            report_only: false,
        }
    }
}

fn validate_directive(name: &str, sources: &[String]) -> Result<(), BuildError> {
    let name_ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !name_ok {
        return Err(BuildError::invalid(
            HandlerName::ContentSecurityPolicy,
            format!("invalid directive name: {name:?}"),
        ));
    }
    for source in sources {
        if source.is_empty() || source.contains([';', ',']) || source.contains(char::is_control) {
            return Err(BuildError::invalid(
                HandlerName::ContentSecurityPolicy,
                format!("invalid source in {name}: {source:?}"),
            ));
        }
    }
    Ok(())
}

fn policy_text(directives: &BTreeMap<String, Vec<String>>) -> Result<String, BuildError> {
    if directives.is_empty() {
        return Err(BuildError::invalid(
            HandlerName::ContentSecurityPolicy,
            "at least one directive is required",
        ));
    }
    let mut rendered = Vec::with_capacity(directives.len());
    for (name, sources) in directives {
        validate_directive(name, sources)?;
        if sources.is_empty() {
            rendered.push(name.clone());
        } else {
            rendered.push(format!("{name} {}", sources.join(" ")));
        }
    }
    Ok(rendered.join("; "))
}

pub fn handler(options: &ContentSecurityPolicyOptions) -> Result<Handler, BuildError> {
    let header = if options.report_only {
        HeaderName::from_static("content-security-policy-report-only")
    } else {
        CONTENT_SECURITY_POLICY
    };
    let value = super::header_value(
        HandlerName::ContentSecurityPolicy,
        &policy_text(&options.directives)?,
    )?;
    Ok(super::set_header(header, value))
}
