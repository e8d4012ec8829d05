//! `Strict-Transport-Security` — pins the browser to HTTPS.

use http::header::STRICT_TRANSPORT_SECURITY;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;
use crate::pipeline::registry::HandlerName;

/// 180 days.
const DEFAULT_MAX_AGE: u64 = 15_552_000;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HstsOptions {
    /// Seconds the browser should remember to use HTTPS.
    pub max_age: u64,

    /// Apply to subdomains as well.
    pub include_sub_domains: bool,

    /// Opt in to browser preload lists.
    pub preload: bool,
}

impl Default for HstsOptions {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            include_sub_domains: true,
            preload: false,
        }
    }
}

pub fn handler(options: &HstsOptions) -> Result<Handler, BuildError> {
    let mut text = format!("max-age={}", options.max_age);
    if options.include_sub_domains {
        text.push_str("; includeSubDomains");
    }
    if options.preload {
        text.push_str("; preload");
    }
    let value = super::header_value(HandlerName::Hsts, &text)?;
    Ok(super::set_header(STRICT_TRANSPORT_SECURITY, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing;

    #[test]
    fn default_is_180_days_with_subdomains() {
        let res = testing::run(handler(&HstsOptions::default()).unwrap());
        assert_eq!(
            testing::header(&res, "strict-transport-security"),
            "max-age=15552000; includeSubDomains"
        );
    }

    #[test]
    fn custom_max_age_is_forwarded_unchanged() {
        let options = HstsOptions {
            max_age: 123,
            include_sub_domains: false,
            preload: true,
        };
        let res = testing::run(handler(&options).unwrap());
        assert_eq!(
            testing::header(&res, "strict-transport-security"),
            "max-age=123; preload"
        );
    }
}
