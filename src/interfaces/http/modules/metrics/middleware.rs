//! HTTP request metrics middleware
//!
//! Records `http_requests_total` (counter) and `http_request_duration_seconds`
//! (histogram) per route template, so `/api/products/{term}` is one series no
//! matter which product was requested.

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

/// Label used for requests that matched no route.
const UNMATCHED: &str = "unmatched";

pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = route_label(request.extensions().get::<MatchedPath>());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    metrics::histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(duration);

    response
}

fn route_label(matched: Option<&MatchedPath>) -> String {
    matched
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED.to_string())
}
