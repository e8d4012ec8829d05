//! Static handler registry.
//!
//! # Responsibilities
//! - Name every known handler as a closed enum variant
//! - Fix the registration order (the only order the stack ever has)
//! - Record which handlers are on by default
//!
//! # Design Decisions
//! - Closed enum instead of a name-keyed map, so dispatch is exhaustive
//!   and a missing handler is a compile error, not a runtime lookup miss
//! - Registration order is a const array; configuration key order never
//!   influences it

use std::fmt;

/// Identifier for one registered handler capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerName {
    ContentSecurityPolicy,
    DnsPrefetchControl,
    ExpectCt,
    FeaturePolicy,
    Frameguard,
    HidePoweredBy,
    Hpkp,
    Hsts,
    IeNoOpen,
    NoCache,
    NoSniff,
    PermittedCrossDomainPolicies,
    ReferrerPolicy,
    XssFilter,
}

impl HandlerName {
    /// Registration order. Stack order is always a filtered view of this
    /// array, never of configuration key order.
    pub const ALL: [HandlerName; 14] = [
        HandlerName::ContentSecurityPolicy,
        HandlerName::DnsPrefetchControl,
        HandlerName::ExpectCt,
        HandlerName::FeaturePolicy,
        HandlerName::Frameguard,
        HandlerName::HidePoweredBy,
        HandlerName::Hpkp,
        HandlerName::Hsts,
        HandlerName::IeNoOpen,
        HandlerName::NoCache,
        HandlerName::NoSniff,
        HandlerName::PermittedCrossDomainPolicies,
        HandlerName::ReferrerPolicy,
        HandlerName::XssFilter,
    ];

    /// Whether this handler runs when the caller supplies no configuration
    /// for it.
    pub fn default_enabled(self) -> bool {
        matches!(
            self,
            HandlerName::DnsPrefetchControl
                | HandlerName::Frameguard
                | HandlerName::HidePoweredBy
                | HandlerName::Hsts
                | HandlerName::IeNoOpen
                | HandlerName::NoSniff
                | HandlerName::XssFilter
        )
    }

    /// Configuration key for this handler, as it appears in config files.
    pub fn key(self) -> &'static str {
        match self {
            HandlerName::ContentSecurityPolicy => "content_security_policy",
            HandlerName::DnsPrefetchControl => "dns_prefetch_control",
            HandlerName::ExpectCt => "expect_ct",
            HandlerName::FeaturePolicy => "feature_policy",
            HandlerName::Frameguard => "frameguard",
            HandlerName::HidePoweredBy => "hide_powered_by",
            HandlerName::Hpkp => "hpkp",
            HandlerName::Hsts => "hsts",
            HandlerName::IeNoOpen => "ie_no_open",
            HandlerName::NoCache => "no_cache",
            HandlerName::NoSniff => "no_sniff",
            HandlerName::PermittedCrossDomainPolicies => "permitted_cross_domain_policies",
            HandlerName::ReferrerPolicy => "referrer_policy",
            HandlerName::XssFilter => "xss_filter",
        }
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_order_covers_every_handler_once() {
        let mut seen = std::collections::HashSet::new();
        for name in HandlerName::ALL {
            assert!(seen.insert(name.key()), "{name} registered twice");
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn default_set_has_seven_members() {
        let defaults: Vec<_> = HandlerName::ALL
            .into_iter()
            .filter(|n| n.default_enabled())
            .collect();
        assert_eq!(
            defaults,
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
}
