//! Cache suppression — `Cache-Control`, `Surrogate-Control`, `Pragma`,
//! `Expires` all set to their most aggressive no-caching values.

use std::sync::Arc;

use http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use http::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::{Handler, Next};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NoCacheOptions {}

pub fn handler(_options: &NoCacheOptions) -> Result<Handler, BuildError> {
    let surrogate_control = HeaderName::from_static("surrogate-control");
    Ok(Arc::new(move |req, mut res, next: Next| {
        res.headers
            .insert(surrogate_control.clone(), HeaderValue::from_static("no-store"));
        res.headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        res.headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        res.headers.insert(EXPIRES, HeaderValue::from_static("0"));
        next.proceed(req, res);
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing;

    #[test]
    fn sets_all_four_headers() {
        let res = testing::run(handler(&NoCacheOptions::default()).unwrap());
        assert_eq!(testing::header(&res, "surrogate-control"), "no-store");
        assert_eq!(
            testing::header(&res, "cache-control"),
            "no-store, no-cache, must-revalidate, proxy-revalidate"
        );
        assert_eq!(testing::header(&res, "pragma"), "no-cache");
        assert_eq!(testing::header(&res, "expires"), "0");
    }
}
