//! `Referrer-Policy` — controls what lands in the Referer header.

use http::header::REFERRER_POLICY;
use http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferrerPolicyToken {
    #[default]
    NoReferrer,
    NoReferrerWhenDowngrade,
    Origin,
    OriginWhenCrossOrigin,
    SameOrigin,
    StrictOrigin,
    StrictOriginWhenCrossOrigin,
    UnsafeUrl,
}

impl ReferrerPolicyToken {
    fn as_str(self) -> &'static str {
        match self {
            ReferrerPolicyToken::NoReferrer => "no-referrer",
            ReferrerPolicyToken::NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
            ReferrerPolicyToken::Origin => "origin",
            ReferrerPolicyToken::OriginWhenCrossOrigin => "origin-when-cross-origin",
            ReferrerPolicyToken::SameOrigin => "same-origin",
            ReferrerPolicyToken::StrictOrigin => "strict-origin",
            ReferrerPolicyToken::StrictOriginWhenCrossOrigin => {
                "strict-origin-when-cross-origin"
            }
            ReferrerPolicyToken::UnsafeUrl => "unsafe-url",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ReferrerPolicyOptions {
    pub policy: ReferrerPolicyToken,
}

pub fn handler(options: &ReferrerPolicyOptions) -> Result<Handler, BuildError> {
    Ok(super::set_header(
        REFERRER_POLICY,
        HeaderValue::from_static(options.policy.as_str()),
    ))
}
