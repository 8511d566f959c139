//! Request tracing middleware.
//!
//! - [`RequestId`]: newtype for the correlation id
//! - [`extract_or_generate_request_id`]: take `X-Request-ID` or mint a UUID v7
//! - [`RequestTraceLayer`]: tower layer that opens a span per request, logs
//!   start and completion, stores the [`RequestId`] in request extensions,
//!   and echoes it in the `x-request-id` response header

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::http::{HeaderMap, HeaderValue, Request, Response};
use pin_project_lite::pin_project;
use tower::{Layer, Service};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header carrying the correlation id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Newtype wrapper for request correlation IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new time-sortable UUID v7 request ID.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Extract the request ID from headers or generate a new UUID v7.
///
/// Empty or non-UTF-8 header values are ignored.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

/// Tower layer adding per-request spans and correlation ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTraceLayer;

impl<S> Layer<S> for RequestTraceLayer {
    type Service = RequestTraceMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestTraceMiddleware { inner }
    }
}

/// Middleware service produced by [`RequestTraceLayer`].
#[derive(Debug, Clone)]
pub struct RequestTraceMiddleware<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for RequestTraceMiddleware<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = RequestTraceFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let request_id = extract_or_generate_request_id(req.headers());
        let span = info_span!(
            "request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.uri().path(),
        );

        span.in_scope(|| tracing::info!("handling request"));

        req.extensions_mut().insert(request_id.clone());
        let future = span.in_scope(|| self.inner.call(req));

        RequestTraceFuture {
            inner: future,
            start: Instant::now(),
            request_id,
            span,
        }
    }
}

pin_project! {
    /// Future that logs completion and stamps the response with the request id.
    pub struct RequestTraceFuture<F> {
        #[pin]
        inner: F,
        start: Instant,
        request_id: RequestId,
        span: Span,
    }
}

impl<F, ResBody, E> Future for RequestTraceFuture<F>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _enter = this.span.enter();

        let mut result = match this.inner.poll(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(result) => result,
        };
        let latency_ms = this.start.elapsed().as_secs_f64() * 1000.0;

        match &mut result {
            Ok(response) => {
                if let Ok(value) = HeaderValue::from_str(this.request_id.as_str()) {
                    response.headers_mut().insert(REQUEST_ID_HEADER, value);
                }
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency_ms,
                    "request completed"
                );
            }
            Err(_) => tracing::error!(latency_ms = latency_ms, "request failed"),
        }

        Poll::Ready(result)
    }
}
