//! Option resolution.
//!
//! Decides, for every registered handler in registration order, whether it
//! is included and with which effective options. The resolver never merges
//! or rewrites an options object a caller supplied; defaulting lives in
//! each handler's options type.

use crate::config::schema::{SecurityConfig, Toggle};
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
use crate::pipeline::registry::HandlerName;

/// Effective options for one included handler.
#[derive(Debug, Clone)]
pub enum HandlerOptions {
    ContentSecurityPolicy(ContentSecurityPolicyOptions),
    DnsPrefetchControl(DnsPrefetchControlOptions),
    ExpectCt(ExpectCtOptions),
    FeaturePolicy(FeaturePolicyOptions),
    Frameguard(FrameguardOptions),
    HidePoweredBy(HidePoweredByOptions),
    Hpkp(HpkpOptions),
    Hsts(HstsOptions),
    IeNoOpen(IeNoOpenOptions),
    NoCache(NoCacheOptions),
    NoSniff(NoSniffOptions),
    PermittedCrossDomainPolicies(PermittedCrossDomainPoliciesOptions),
    ReferrerPolicy(ReferrerPolicyOptions),
    XssFilter(XssFilterOptions),
}

/// One entry of the resolved, ordered inclusion list.
#[derive(Debug, Clone)]
pub struct Directive {
    pub name: HandlerName,
    pub options: HandlerOptions,
}

/// `omitted | false | true | object` semantics for one handler.
fn toggle<T: Clone + Default>(value: &Option<Toggle<T>>, default_enabled: bool) -> Option<T> {
    match value {
        Some(Toggle::Flag(false)) => None,
        Some(Toggle::Flag(true)) => Some(T::default()),
        Some(Toggle::Options(options)) => Some(options.clone()),
        None if default_enabled => Some(T::default()),
        None => None,
    }
}

fn resolve_one(config: &SecurityConfig, name: HandlerName) -> Option<HandlerOptions> {
    let on = name.default_enabled();
    match name {
        HandlerName::ContentSecurityPolicy => {
            toggle(&config.content_security_policy, on).map(HandlerOptions::ContentSecurityPolicy)
        }
        HandlerName::DnsPrefetchControl => {
            toggle(&config.dns_prefetch_control, on).map(HandlerOptions::DnsPrefetchControl)
        }
        HandlerName::ExpectCt => toggle(&config.expect_ct, on).map(HandlerOptions::ExpectCt),
        HandlerName::FeaturePolicy => {
            toggle(&config.feature_policy, on).map(HandlerOptions::FeaturePolicy)
        }
        HandlerName::Frameguard => toggle(&config.frameguard, on).map(HandlerOptions::Frameguard),
        HandlerName::HidePoweredBy => {
            toggle(&config.hide_powered_by, on).map(HandlerOptions::HidePoweredBy)
        }
        HandlerName::Hpkp => toggle(&config.hpkp, on).map(HandlerOptions::Hpkp),
        HandlerName::Hsts => toggle(&config.hsts, on).map(HandlerOptions::Hsts),
        HandlerName::IeNoOpen => toggle(&config.ie_no_open, on).map(HandlerOptions::IeNoOpen),
        HandlerName::NoCache => toggle(&config.no_cache, on).map(HandlerOptions::NoCache),
        HandlerName::NoSniff => toggle(&config.no_sniff, on).map(HandlerOptions::NoSniff),
        HandlerName::PermittedCrossDomainPolicies => {
            toggle(&config.permitted_cross_domain_policies, on)
                .map(HandlerOptions::PermittedCrossDomainPolicies)
        }
        HandlerName::ReferrerPolicy => {
            toggle(&config.referrer_policy, on).map(HandlerOptions::ReferrerPolicy)
        }
        HandlerName::XssFilter => toggle(&config.xss_filter, on).map(HandlerOptions::XssFilter),
    }
}

/// Fold the static registration order into the ordered inclusion list.
pub fn resolve(config: &SecurityConfig) -> Vec<Directive> {
    HandlerName::ALL
        .into_iter()
        .filter_map(|name| resolve_one(config, name).map(|options| Directive { name, options }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(config: &SecurityConfig) -> Vec<HandlerName> {
        resolve(config).into_iter().map(|d| d.name).collect()
    }

    #[test]
    fn empty_config_resolves_to_the_default_set_in_order() {
        assert_eq!(
            names(&SecurityConfig::default()),
            vec![
                HandlerName::DnsPrefetchControl,
                HandlerName::Frameguard,
                HandlerName::HidePoweredBy,
                HandlerName::Hsts,
                HandlerName::IeNoOpen,
                HandlerName::NoSniff,
                HandlerName::XssFilter,
            ]
        );
    }

    #[test]
    fn false_excludes_a_default_handler() {
        let config = SecurityConfig {
            frameguard: Some(Toggle::Flag(false)),
            ..Default::default()
        };
        assert!(!names(&config).contains(&HandlerName::Frameguard));
        assert_eq!(names(&config).len(), 6);
    }

    #[test]
    fn true_includes_a_non_default_handler_with_default_options() {
        let config = SecurityConfig {
            no_cache: Some(Toggle::Flag(true)),
            ..Default::default()
        };
        let resolved = resolve(&config);
        let entry = resolved
            .iter()
            .find(|d| d.name == HandlerName::NoCache)
            .expect("no_cache included");
        assert!(matches!(entry.options, HandlerOptions::NoCache(_)));
        // still slotted at registration order, between ie_no_open and no_sniff
        assert_eq!(
            names(&config),
            vec![
                HandlerName::DnsPrefetchControl,
                HandlerName::Frameguard,
                HandlerName::HidePoweredBy,
                HandlerName::Hsts,
                HandlerName::IeNoOpen,
                HandlerName::NoCache,
                HandlerName::NoSniff,
                HandlerName::XssFilter,
            ]
        );
    }

    #[test]
    fn supplied_options_are_forwarded_unchanged() {
        let config = SecurityConfig {
            hsts: Some(Toggle::Options(crate::handlers::hsts::HstsOptions {
                max_age: 42,
                include_sub_domains: false,
                preload: false,
            })),
            ..Default::default()
        };
        let resolved = resolve(&config);
        let entry = resolved.iter().find(|d| d.name == HandlerName::Hsts).unwrap();
        match &entry.options {
            HandlerOptions::Hsts(hsts) => {
                assert_eq!(hsts.max_age, 42);
                assert!(!hsts.include_sub_domains);
            }
            other => panic!("expected hsts options, got {other:?}"),
        }
    }
}
