//! Configuration schema definitions.
//!
//! One field per registered handler, each an `Option<Toggle<T>>`: absent
//! means "use the default set decision", `false`/`true` toggle the handler,
//! and a table/object configures it. Any other value shape fails
//! deserialization; there is no runtime type sniffing.

use serde::{Deserialize, Serialize};

use crate::config::validation;
use crate::config::ConfigError;
use crate::handlers::content_security_policy::ContentSecurityPolicyOptions;
use crate::handlers::dns_prefetch_control::DnsPrefetchControlOptions;
use crate::handlers::expect_ct::ExpectCtOptions;
use crate::handlers::feature_policy::FeaturePolicyOptions;
use crate::handlers::frameguard::FrameguardOptions;
use crate::handlers::hide_powered_by::HidePoweredByOptions;
use crate::handlers::hpkp::HpkpOptions;
use crate::handlers::hsts::HstsOptions;
use crate::handlers::ie_no_open::IeNoOpenOptions;
use crate::handlers::no_cache::NoCacheOptions;
use crate::handlers::no_sniff::NoSniffOptions;
use crate::handlers::permitted_cross_domain_policies::PermittedCrossDomainPoliciesOptions;
use crate::handlers::referrer_policy::ReferrerPolicyOptions;
use crate::handlers::xss_filter::XssFilterOptions;

/// A handler toggle: a bare boolean or that handler's options object.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Flag(bool),
    Options(T),
}

/// Root configuration for the pipeline.
///
/// Unknown keys are ignored; the keys below are the complete set the
/// resolver consults. Key order in a config file never affects handler
/// order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub content_security_policy: Option<Toggle<ContentSecurityPolicyOptions>>,
    pub dns_prefetch_control: Option<Toggle<DnsPrefetchControlOptions>>,
    pub expect_ct: Option<Toggle<ExpectCtOptions>>,
    pub feature_policy: Option<Toggle<FeaturePolicyOptions>>,
    pub frameguard: Option<Toggle<FrameguardOptions>>,
    pub hide_powered_by: Option<Toggle<HidePoweredByOptions>>,
    pub hpkp: Option<Toggle<HpkpOptions>>,
    pub hsts: Option<Toggle<HstsOptions>>,
    pub ie_no_open: Option<Toggle<IeNoOpenOptions>>,
    pub no_cache: Option<Toggle<NoCacheOptions>>,
    pub no_sniff: Option<Toggle<NoSniffOptions>>,
    pub permitted_cross_domain_policies: Option<Toggle<PermittedCrossDomainPoliciesOptions>>,
    pub referrer_policy: Option<Toggle<ReferrerPolicyOptions>>,
    pub xss_filter: Option<Toggle<XssFilterOptions>>,
}

impl SecurityConfig {
    /// Build a configuration from untyped JSON, e.g. config handed over an
    /// admin API. Runs the misuse guard before deserializing.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigError> {
        validation::reject_request_like_json(&value)?;
        Ok(serde_json::from_value(value)?)
    }
}
