//! `X-DNS-Prefetch-Control` — controls browser DNS prefetching.

use http::header::X_DNS_PREFETCH_CONTROL;
use http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DnsPrefetchControlOptions {
    /// Allow prefetching (`on`). Off by default.
    pub allow: bool,
}

pub fn handler(options: &DnsPrefetchControlOptions) -> Result<Handler, BuildError> {
    let value = if options.allow {
        HeaderValue::from_static("on")
    } else {
        HeaderValue::from_static("off")
    };
    Ok(super::set_header(X_DNS_PREFETCH_CONTROL, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing;

    #[test]
    fn off_by_default() {
        let res = testing::run(handler(&DnsPrefetchControlOptions::default()).unwrap());
        assert_eq!(testing::header(&res, "x-dns-prefetch-control"), "off");
    }

    #[test]
    fn allow_turns_it_on() {
        let res = testing::run(handler(&DnsPrefetchControlOptions { allow: true }).unwrap());
        assert_eq!(testing::header(&res, "x-dns-prefetch-control"), "on");
    }
}
