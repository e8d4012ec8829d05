//! Continuation-passing pipeline execution.
//!
//! # Responsibilities
//! - Run a constructed handler stack to completion for one request
//! - Short-circuit when a handler aborts, forwarding its error verbatim
//! - Keep per-request execution state out of the shared stack
//!
//! # Design Decisions
//! - Ownership-passing continuations: a handler owns the request/response
//!   parts until it hands them to `Next`, so no per-request state is
//!   shared and no locking is needed
//! - The stack is an `Arc<[Handler]>`, shared read-only across all
//!   in-flight requests; the cursor lives inside each request's `Next`
//! - No timeout or retry here: a handler that never invokes its
//!   continuation hangs that request, which the caller bounds externally

use std::sync::mpsc;
use std::sync::Arc;

/// Request-side view handed through the stack.
pub type Request = http::request::Parts;

/// Response-side view handed through the stack.
pub type Response = http::response::Parts;

/// Opaque error value carried by the short-circuit path.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One entry in the stack. Must eventually invoke the `Next` it is given,
/// exactly once, either to proceed or to abort.
pub type Handler = Arc<dyn Fn(Request, Response, Next) + Send + Sync>;

/// Outer continuation supplied by the caller of [`Pipeline::handle`].
/// Receives the parts back along with `Ok(())` on normal completion or the
/// aborting handler's error, unchanged.
pub type Continuation = Box<dyn FnOnce(Request, Response, Result<(), BoxError>) + Send>;

/// Continuation object owned by exactly one in-flight request.
///
/// Created fresh with a zeroed cursor for every [`Pipeline::handle`] call
/// and consumed when the request completes or aborts. A handler may move it
/// into deferred work; execution resumes whenever `proceed` or `abort` is
/// finally called.
pub struct Next {
    stack: Arc<[Handler]>,
    cursor: usize,
    outer: Continuation,
}

impl Next {
    fn new(stack: Arc<[Handler]>, outer: Continuation) -> Self {
        Self {
            stack,
            cursor: 0,
            outer,
        }
    }

    /// Run the next handler in stack order, or complete the request if the
    /// cursor has reached the end.
    pub fn proceed(mut self, request: Request, response: Response) {
        match self.stack.get(self.cursor).cloned() {
            Some(handler) => {
                self.cursor += 1;
                handler(request, response, self);
            }
            None => (self.outer)(request, response, Ok(())),
        }
    }

    /// Short-circuit: remaining handlers never run and `error` reaches the
    /// outer continuation verbatim.
    pub fn abort(self, request: Request, response: Response, error: BoxError) {
        (self.outer)(request, response, Err(error));
    }
}

/// A constructed, immutable handler stack plus its per-request driver.
///
/// Built once, then invoked once per incoming request via [`handle`] or
/// [`apply`]. Cloning is cheap and shares the stack.
///
/// [`handle`]: Pipeline::handle
/// [`apply`]: Pipeline::apply
#[derive(Clone)]
pub struct Pipeline {
    stack: Arc<[Handler]>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("handlers", &self.stack.len())
            .finish()
    }
}

impl Pipeline {
    pub(crate) fn from_stack(stack: Vec<Handler>) -> Self {
        Self {
            stack: stack.into(),
        }
    }

    /// Build a pipeline from an explicit handler stack, bypassing
    /// configuration resolution. The executor semantics are identical.
    pub fn from_handlers(handlers: Vec<Handler>) -> Self {
        Self::from_stack(handlers)
    }

    /// Number of handlers in the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Run the stack for one request. `outer` is invoked exactly once if
    /// every handler honors its contract: with `Ok(())` after the last
    /// handler proceeds, or with the forwarded error on abort.
    pub fn handle(&self, request: Request, response: Response, outer: Continuation) {
        Next::new(self.stack.clone(), outer).proceed(request, response);
    }

    /// Synchronous convenience around [`handle`]: blocks until the pipeline
    /// completes or aborts and returns the mutated parts.
    ///
    /// Intended for stacks of synchronous handlers (all built-in handlers
    /// are). A handler that defers indefinitely blocks the calling thread
    /// for as long; a handler that drops its continuation without invoking
    /// it yields an error instead of hanging.
    ///
    /// [`handle`]: Pipeline::handle
    pub fn apply(&self, request: Request, response: Response) -> Result<(Request, Response), BoxError> {
        let (tx, rx) = mpsc::channel();
        self.handle(
            request,
            response,
            Box::new(move |req, res, outcome| {
                let _ = tx.send((req, res, outcome));
            }),
        );
        match rx.recv() {
            Ok((req, res, Ok(()))) => Ok((req, res)),
            Ok((_, _, Err(error))) => Err(error),
            Err(_) => Err("pipeline dropped its continuation without invoking it".into()),
        }
    }
}
