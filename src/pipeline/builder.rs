//! Pipeline construction.
//!
//! # Responsibilities
//! - Resolve configuration into the ordered inclusion list
//! - Invoke each included factory exactly once, in resolver order
//! - Fail atomically on the first factory error
//!
//! # Design Decisions
//! - Exhaustive match from directive to factory (the static registry);
//!   adding a handler without wiring it here is a compile error
//! - Deprecated factories are wrapped, not removed; the notice goes to the
//!   sink injected by the caller

use thiserror::Error;

use crate::handlers;
use crate::handlers::feature_policy::FeaturePolicyOptions;
use crate::handlers::hpkp::HpkpOptions;
use crate::pipeline::deprecation::{Deprecated, DiagnosticSink};
use crate::pipeline::executor::{Handler, Pipeline};
use crate::pipeline::registry::HandlerName;
use crate::pipeline::resolver::{resolve, Directive, HandlerOptions};

/// Construction-time failure, attributed to the offending handler.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{handler}: {reason}")]
    InvalidOptions { handler: HandlerName, reason: String },
}

impl BuildError {
    pub fn invalid(handler: HandlerName, reason: impl Into<String>) -> Self {
        BuildError::InvalidOptions {
            handler,
            reason: reason.into(),
        }
    }
}

const FEATURE_POLICY: Deprecated<
    fn(&FeaturePolicyOptions) -> Result<Handler, BuildError>,
> = Deprecated::new(
    handlers::feature_policy::handler,
    "feature_policy is superseded by Permissions-Policy and will be removed in a future release",
);

const HPKP: Deprecated<fn(&HpkpOptions) -> Result<Handler, BuildError>> = Deprecated::new(
    handlers::hpkp::handler,
    "hpkp: browsers have withdrawn support for HTTP public key pinning",
);

fn instantiate(directive: &Directive, sink: &dyn DiagnosticSink) -> Result<Handler, BuildError> {
    match &directive.options {
        HandlerOptions::ContentSecurityPolicy(o) => handlers::content_security_policy::handler(o),
        HandlerOptions::DnsPrefetchControl(o) => handlers::dns_prefetch_control::handler(o),
        HandlerOptions::ExpectCt(o) => handlers::expect_ct::handler(o),
        HandlerOptions::FeaturePolicy(o) => FEATURE_POLICY.build(o, sink),
        HandlerOptions::Frameguard(o) => handlers::frameguard::handler(o),
        HandlerOptions::HidePoweredBy(o) => handlers::hide_powered_by::handler(o),
        HandlerOptions::Hpkp(o) => HPKP.build(o, sink),
        HandlerOptions::Hsts(o) => handlers::hsts::handler(o),
        HandlerOptions::IeNoOpen(o) => handlers::ie_no_open::handler(o),
        HandlerOptions::NoCache(o) => handlers::no_cache::handler(o),
        HandlerOptions::NoSniff(o) => handlers::no_sniff::handler(o),
        HandlerOptions::PermittedCrossDomainPolicies(o) => {
            handlers::permitted_cross_domain_policies::handler(o)
        }
        HandlerOptions::ReferrerPolicy(o) => handlers::referrer_policy::handler(o),
        HandlerOptions::XssFilter(o) => handlers::xss_filter::handler(o),
    }
}

/// Build the pipeline for `config`, emitting deprecation notices to `sink`.
pub fn build(
    config: &crate::config::SecurityConfig,
    sink: &dyn DiagnosticSink,
) -> Result<Pipeline, BuildError> {
    let directives = resolve(config);
    let mut stack = Vec::with_capacity(directives.len());
    for directive in &directives {
        stack.push(instantiate(directive, sink)?);
    }
    tracing::debug!(handlers = stack.len(), "security header pipeline constructed");
    Ok(Pipeline::from_stack(stack))
}
