//! `X-XSS-Protection` — legacy reflected-XSS auditor, pinned to block mode.

use http::header::X_XSS_PROTECTION;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;
use crate::pipeline::registry::HandlerName;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct XssFilterOptions {
    /// Report violations to this URI instead of only blocking.
    pub report_uri: Option<String>,
}

pub fn handler(options: &XssFilterOptions) -> Result<Handler, BuildError> {
    let text = match &options.report_uri {
        Some(uri) => format!("1; mode=block; report={uri}"),
        None => "1; mode=block".to_string(),
    };
    let value = super::header_value(HandlerName::XssFilter, &text)?;
    Ok(super::set_header(X_XSS_PROTECTION, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing;

    #[test]
    fn default_blocks() {
        let res = testing::run(handler(&XssFilterOptions::default()).unwrap());
        assert_eq!(testing::header(&res, "x-xss-protection"), "1; mode=block");
    }

    #[test]
    fn report_uri_is_appended() {
        let options = XssFilterOptions {
            report_uri: Some("/report".into()),
        };
        let res = testing::run(handler(&options).unwrap());
        assert_eq!(
            testing::header(&res, "x-xss-protection"),
            "1; mode=block; report=/report"
        );
    }
}
