//! `X-Powered-By` removal — strips (or spoofs) the framework banner.

use std::sync::Arc;

use http::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::{Handler, Next};
use crate::pipeline::registry::HandlerName;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HidePoweredByOptions {
    /// Replace the header with a decoy value instead of removing it.
    pub set_to: Option<String>,
}

pub fn handler(options: &HidePoweredByOptions) -> Result<Handler, BuildError> {
    let name = HeaderName::from_static("x-powered-by");
    match &options.set_to {
        Some(decoy) => {
            let value = HeaderValue::from_str(decoy).map_err(|_| {
                BuildError::invalid(
                    HandlerName::HidePoweredBy,
                    format!("set_to is not a valid header value: {decoy:?}"),
                )
            })?;
            Ok(super::set_header(name, value))
        }
        None => Ok(Arc::new(move |req, mut res, next: Next| {
            res.headers.remove(&name);
            next.proceed(req, res);
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::executor::Pipeline;

    #[test]
    fn removes_existing_banner() {
        let (req, _) = http::Request::new(()).into_parts();
        let mut response = http::Response::new(());
        response
            .headers_mut()
            .insert("x-powered-by", HeaderValue::from_static("Express"));
        let (res, _) = response.into_parts();

        let pipeline =
            Pipeline::from_handlers(vec![handler(&HidePoweredByOptions::default()).unwrap()]);
        let (_, res) = pipeline.apply(req, res).unwrap();
        assert!(res.headers.get("x-powered-by").is_none());
    }

    #[test]
    fn decoy_value_is_set() {
        let options = HidePoweredByOptions {
            set_to: Some("PHP 4.2.0".into()),
        };
        let res = crate::handlers::testing::run(handler(&options).unwrap());
        assert_eq!(
            crate::handlers::testing::header(&res, "x-powered-by"),
            "PHP 4.2.0"
        );
    }
}
