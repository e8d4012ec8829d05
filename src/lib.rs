//! Configurable HTTP security header pipeline.
//!
//! Resolves a [`SecurityConfig`] into an ordered stack of header-setting
//! handlers and runs the stack per request via continuation passing.
//!
//! ```
//! use secure_headers::{Pipeline, SecurityConfig};
//!
//! let pipeline = Pipeline::new(&SecurityConfig::default()).unwrap();
//! let (req, _) = http::Request::new(()).into_parts();
//! let (res, _) = http::Response::new(()).into_parts();
//! let (_, res) = pipeline.apply(req, res).unwrap();
//! assert_eq!(res.headers["x-frame-options"], "SAMEORIGIN");
//! ```

pub mod config;
pub mod handlers;
pub mod layer;
pub mod pipeline;

pub use config::{load_config, ConfigError, MisuseError, SecurityConfig, Toggle};
pub use layer::{SecureHeaders, SecureHeadersLayer};
pub use pipeline::{
    BoxError, BuildError, Continuation, DiagnosticSink, Handler, HandlerName, Next, Pipeline,
    TracingSink,
};
