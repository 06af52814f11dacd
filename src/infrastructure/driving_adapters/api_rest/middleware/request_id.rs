//! Request ID Middleware
//!
//! Tags every request with an id taken from `x-request-id` or freshly
//! generated. The id names the request's log span and is echoed back on the
//! response.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

fn incoming_or_new(request: &Request<Body>) -> HeaderValue {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .filter(|v| !v.is_empty() && v.to_str().is_ok())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = incoming_or_new(&request);

    let span = tracing::info_span!(
        "request",
        request_id = request_id.to_str().unwrap_or_default(),
        method = %request.method(),
        uri = %request.uri().path(),
    );

    let mut response = async move {
        tracing::debug!("Processing request");
        next.run(request).await
    }
    .instrument(span)
    .await;

    response.headers_mut().insert(REQUEST_ID_HEADER.clone(), request_id);
    response
}
