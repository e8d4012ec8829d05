//! Deprecation notices for superseded handlers.
//!
//! The sink is injected at pipeline construction rather than held in
//! process-global state, so notice delivery is under the caller's control
//! and scoped to one construction.

use crate::pipeline::builder::BuildError;
use crate::pipeline::executor::Handler;

/// Destination for one-time deprecation notices.
pub trait DiagnosticSink: Send + Sync {
    fn deprecated(&self, message: &str);
}

/// Default sink; routes notices through `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn deprecated(&self, message: &str) {
        tracing::warn!(target: "secure_headers::deprecation", "{message}");
    }
}

/// Factory decorator that emits a notice each time the wrapped factory is
/// invoked, i.e. once per pipeline construction that includes the handler.
/// Return value and errors pass through unchanged.
pub struct Deprecated<F> {
    factory: F,
    message: &'static str,
}

impl<F> Deprecated<F> {
    pub const fn new(factory: F, message: &'static str) -> Self {
        Self { factory, message }
    }

    pub fn build<O>(&self, options: &O, sink: &dyn DiagnosticSink) -> Result<Handler, BuildError>
    where
        F: Fn(&O) -> Result<Handler, BuildError>,
    {
        sink.deprecated(self.message);
        (self.factory)(options)
    }
}
