//! Pipeline composition and execution engine.
//!
//! # Data Flow
//! ```text
//! SecurityConfig
//!     → resolver.rs  (inclusion + effective options, registration order)
//!     → builder.rs   (factories invoked once, ordered stack)
//!     → executor.rs  (per-request continuation-passing driver)
//! ```

pub mod builder;
pub mod deprecation;
pub mod executor;
pub mod registry;
pub mod resolver;

pub use builder::{build, BuildError};
pub use deprecation::{Deprecated, DiagnosticSink, TracingSink};
pub use executor::{BoxError, Continuation, Handler, Next, Pipeline, Request, Response};
pub use registry::HandlerName;
pub use resolver::{resolve, Directive, HandlerOptions};

use crate::config::SecurityConfig;

impl Pipeline {
    /// Build a pipeline, routing deprecation notices through `tracing`.
    pub fn new(config: &SecurityConfig) -> Result<Self, BuildError> {
        builder::build(config, &TracingSink)
    }

    /// Build a pipeline with an explicit diagnostic sink.
    pub fn with_sink(
        config: &SecurityConfig,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, BuildError> {
        builder::build(config, sink)
    }
}
