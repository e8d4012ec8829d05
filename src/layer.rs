//! Tower integration.
//!
//! Wraps any inner service so the pipeline runs over each response's parts
//! before it leaves the stack. The pipeline sees a metadata snapshot of the
//! request (method, URI, version, headers) and the real response parts; the
//! body is never touched.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::StatusCode;
use tower::{Layer, Service};

use crate::config::SecurityConfig;
use crate::pipeline::{BuildError, Pipeline};

/// `tower::Layer` applying a constructed [`Pipeline`] to responses.
#[derive(Clone)]
pub struct SecureHeadersLayer {
    pipeline: Pipeline,
}

impl SecureHeadersLayer {
    /// Build the pipeline from `config` and wrap it in a layer.
    pub fn try_new(config: &SecurityConfig) -> Result<Self, BuildError> {
        Ok(Self::from_pipeline(Pipeline::new(config)?))
    }

    /// Reuse an already-constructed pipeline.
    pub fn from_pipeline(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}

impl<S> Layer<S> for SecureHeadersLayer {
    type Service = SecureHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecureHeaders {
            inner,
            pipeline: self.pipeline.clone(),
        }
    }
}

/// Service produced by [`SecureHeadersLayer`].
#[derive(Clone)]
pub struct SecureHeaders<S> {
    inner: S,
    pipeline: Pipeline,
}

fn request_snapshot<B>(req: &http::Request<B>) -> http::request::Parts {
    let mut snapshot = http::Request::new(());
    *snapshot.method_mut() = req.method().clone();
    *snapshot.uri_mut() = req.uri().clone();
    *snapshot.version_mut() = req.version();
    *snapshot.headers_mut() = req.headers().clone();
    let (parts, _) = snapshot.into_parts();
    parts
}

impl<S, ReqBody, ResBody> Service<http::Request<ReqBody>> for SecureHeaders<S>
where
    S: Service<http::Request<ReqBody>, Response = http::Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = http::Response<ResBody>;
    type Error = S::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: http::Request<ReqBody>) -> Self::Future {
        let pipeline = self.pipeline.clone();
        let snapshot = request_snapshot(&req);
        let inner = self.inner.call(req);
        Box::pin(async move {
            let response = inner.await?;
            let (parts, body) = response.into_parts();

            let (tx, rx) = tokio::sync::oneshot::channel();
            pipeline.handle(
                snapshot,
                parts,
                Box::new(move |_req, res, outcome| {
                    let _ = tx.send((res, outcome));
                }),
            );
            match rx.await {
                Ok((parts, Ok(()))) => Ok(http::Response::from_parts(parts, body)),
                Ok((_, Err(error))) => {
                    tracing::error!(%error, "security header pipeline aborted");
                    let mut response = http::Response::new(ResBody::default());
                    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                    Ok(response)
                }
                // A handler dropped its continuation; same failure mode as
                // an abort from the caller's point of view.
                Err(_) => {
                    tracing::error!("security header pipeline dropped its continuation");
                    let mut response = http::Response::new(ResBody::default());
                    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                    Ok(response)
                }
            }
        })
    }
}
