//! The header-setting handlers.
//!
//! One module per handler. Each owns its options struct, validates options
//! at construction time, precomputes its header value once, and returns a
//! stack handler that only inserts precomputed values per request.

pub mod content_security_policy;
pub mod dns_prefetch_control;
pub mod expect_ct;
pub mod feature_policy;
pub mod frameguard;
pub mod hide_powered_by;
pub mod hpkp;
pub mod hsts;
pub mod ie_no_open;
pub mod no_cache;
pub mod no_sniff;
pub mod permitted_cross_domain_policies;
pub mod referrer_policy;
pub mod xss_filter;

use std::sync::Arc;

use http::{HeaderName, HeaderValue};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::{Handler, Next};
use crate::pipeline::registry::HandlerName;

/// Parse `text` into a header value, surfacing bad characters as a
/// construction-time error attributed to `handler`.
fn header_value(handler: HandlerName, text: &str) -> Result<HeaderValue, BuildError> {
    HeaderValue::from_str(text).map_err(|_| {
        BuildError::invalid(
            handler,
            format!("produced text not permitted in a header value: {text:?}"),
        )
    })
}

/// Handler that inserts one precomputed response header and proceeds.
fn set_header(name: HeaderName, value: HeaderValue) -> Handler {
    Arc::new(move |req, mut res, next: Next| {
        res.headers.insert(name.clone(), value.clone());
        next.proceed(req, res);
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::pipeline::executor::{Pipeline, Request, Response};

    /// Run a single handler over blank parts and hand back the response.
    pub fn run(handler: crate::pipeline::executor::Handler) -> Response {
        let (req, _) = http::Request::new(()).into_parts();
        let (res, _) = http::Response::new(()).into_parts();
        let pipeline = Pipeline::from_handlers(vec![handler]);
        let (_, res): (Request, Response) = pipeline.apply(req, res).unwrap();
        res
    }

    pub fn header(res: &Response, name: &str) -> String {
        res.headers
            .get(name)
            .expect("header missing")
            .to_str()
            .unwrap()
            .to_string()
    }
}
