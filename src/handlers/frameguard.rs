//! `X-Frame-Options` — clickjacking protection.

use http::header::X_FRAME_OPTIONS;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;
use crate::pipeline::registry::HandlerName;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameguardAction {
    Deny,
    #[default]
    Sameorigin,
    /// Requires [`FrameguardOptions::domain`].
    AllowFrom,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FrameguardOptions {
    pub action: FrameguardAction,

    /// Origin permitted to frame the page when `action` is `allow_from`.
    pub domain: Option<String>,
}

pub fn handler(options: &FrameguardOptions) -> Result<Handler, BuildError> {
    let text = match options.action {
        FrameguardAction::Deny => "DENY".to_string(),
        FrameguardAction::Sameorigin => "SAMEORIGIN".to_string(),
        FrameguardAction::AllowFrom => {
            let domain = options
                .domain
                .as_deref()
                .filter(|d| !d.is_empty())
                .ok_or_else(|| {
                    BuildError::invalid(
                        HandlerName::Frameguard,
                        "allow_from requires a non-empty domain",
                    )
                })?;
            format!("ALLOW-FROM {domain}")
        }
    };
    let value = super::header_value(HandlerName::Frameguard, &text)?;
    Ok(super::set_header(X_FRAME_OPTIONS, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing;

    #[test]
    fn default_is_sameorigin() {
        let res = testing::run(handler(&FrameguardOptions::default()).unwrap());
        assert_eq!(testing::header(&res, "x-frame-options"), "SAMEORIGIN");
    }

    #[test]
    fn allow_from_includes_domain() {
        let options = FrameguardOptions {
            action: FrameguardAction::AllowFrom,
            domain: Some("https://example.com".into()),
        };
        let res = testing::run(handler(&options).unwrap());
        assert_eq!(
            testing::header(&res, "x-frame-options"),
            "ALLOW-FROM https://example.com"
        );
    }

    #[test]
    fn allow_from_without_domain_fails_construction() {
        let options = FrameguardOptions {
            action: FrameguardAction::AllowFrom,
            domain: None,
        };
        let err = handler(&options).err().unwrap();
        assert!(err.to_string().contains("frameguard"));
    }
}
