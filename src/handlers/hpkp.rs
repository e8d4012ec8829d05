//! `Public-Key-Pins` — HTTP public key pinning. Withdrawn from browsers;
//! kept behind a deprecation notice.

use http::HeaderName;
use serde::{Deserialize, Serialize};

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;
use crate::pipeline::registry::HandlerName;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HpkpOptions {
    /// Base64 SHA-256 pins. A backup pin is mandatory, so at least two.
    pub sha256s: Vec<String>,

    /// Seconds the browser should remember the pins.
    pub max_age: u64,

    pub include_sub_domains: bool,

    pub report_uri: Option<String>,

    /// Emit `Public-Key-Pins-Report-Only` instead of enforcing.
    pub report_only: bool,
}

pub fn handler(options: &HpkpOptions) -> Result<Handler, BuildError> {
    if options.sha256s.len() < 2 {
        return Err(BuildError::invalid(
            HandlerName::Hpkp,
            "requires at least 2 pins (current and backup)",
        ));
    }
    let mut parts = Vec::with_capacity(options.sha256s.len() + 3);
    for pin in &options.sha256s {
        parts.push(format!("pin-sha256=\"{pin}\""));
    }
    parts.push(format!("max-age={}", options.max_age));
    if options.include_sub_domains {
        parts.push("includeSubDomains".to_string());
    }
    if let Some(uri) = &options.report_uri {
        parts.push(format!("report-uri=\"{uri}\""));
    }
    let header = if options.report_only {
        HeaderName::from_static("public-key-pins-report-only")
    } else {
        HeaderName::from_static("public-key-pins")
    };
    let value = super::header_value(HandlerName::Hpkp, &parts.join("; "))?;
    Ok(super::set_header(header, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing;

    fn two_pins() -> Vec<String> {
        vec!["abc123=".into(), "def456=".into()]
    }

    #[test]
    fn renders_pins_and_max_age() {
        let options = HpkpOptions {
            sha256s: two_pins(),
            max_age: 5184000,
            ..Default::default()
        };
        let res = testing::run(handler(&options).unwrap());
        assert_eq!(
            testing::header(&res, "public-key-pins"),
            "pin-sha256=\"abc123=\"; pin-sha256=\"def456=\"; max-age=5184000"
        );
    }

    #[test]
    fn fewer_than_two_pins_fails_construction() {
        let options = HpkpOptions {
            sha256s: vec!["only-one=".into()],
            ..Default::default()
        };
        let err = handler(&options).err().unwrap();
        assert!(err.to_string().contains("2 pins"));
    }

    #[test]
    fn report_only_switches_header_name() {
        let options = HpkpOptions {
            sha256s: two_pins(),
            report_only: true,
            ..Default::default()
        };
        let res = testing::run(handler(&options).unwrap());
        assert!(res.headers.get("public-key-pins-report-only").is_some());
        assert!(res.headers.get("public-key-pins").is_none());
    }
}
