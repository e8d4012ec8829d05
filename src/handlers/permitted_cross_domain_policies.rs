//! `X-Permitted-Cross-Domain-Policies` — Flash/PDF cross-domain policy
//! file gating.

use http::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossDomainPolicy {
    #[default]
    None,
    MasterOnly,
    ByContentType,
    All,
}

impl CrossDomainPolicy {
    fn as_str(self) -> &'static str {
        match self {
            CrossDomainPolicy::None => "none",
            CrossDomainPolicy::MasterOnly => "master-only",
            CrossDomainPolicy::ByContentType => "by-content-type",
            CrossDomainPolicy::All => "all",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PermittedCrossDomainPoliciesOptions {
    pub permitted_policies: CrossDomainPolicy,
}

pub fn handler(options: &PermittedCrossDomainPoliciesOptions) -> Result<Handler, BuildError> {
    Ok(super::set_header(
        HeaderName::from_static("x-permitted-cross-domain-policies"),
        HeaderValue::from_static(options.permitted_policies.as_str()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing;

    #[test]
    fn default_permits_none() {
        let res = testing::run(
            handler(&PermittedCrossDomainPoliciesOptions::default()).unwrap(),
        );
        assert_eq!(
            testing::header(&res, "x-permitted-cross-domain-policies"),
            "none"
        );
    }

    #[test]
    fn master_only() {
        let options = PermittedCrossDomainPoliciesOptions {
            permitted_policies: CrossDomainPolicy::MasterOnly,
        };
        let res = testing::run(handler(&options).unwrap());
        assert_eq!(
            testing::header(&res, "x-permitted-cross-domain-policies"),
            "master-only"
        );
    }
}
