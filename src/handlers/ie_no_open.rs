//! `X-Download-Options: noopen` — keeps old IE from opening downloads in
//! the site's security context.

use http::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IeNoOpenOptions {}

pub fn handler(_options: &IeNoOpenOptions) -> Result<Handler, BuildError> {
    Ok(super::set_header(
        HeaderName::from_static("x-download-options"),
        HeaderValue::from_static("noopen"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing;

    #[test]
    fn sets_noopen() {
        let res = testing::run(handler(&IeNoOpenOptions::default()).unwrap());
        assert_eq!(testing::header(&res, "x-download-options"), "noopen");
    }
}
