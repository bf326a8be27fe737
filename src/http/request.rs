//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Make the ID available to tracing and response headers
//!
//! # Design Decisions
//! - Request ID added as early as possible for correlation
//! - Propagated back on the response so clients can quote it

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request-ID maker producing UUID v4 values, for the tower-http
/// `SetRequestIdLayer`/`PropagateRequestIdLayer` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeDirectoryRequestId;

impl MakeRequestId for MakeDirectoryRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_header_safe() {
        let mut maker = MakeDirectoryRequestId;
        let request = Request::builder().body(()).unwrap();

        let a = maker.make_request_id(&request).unwrap();
        let b = maker.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
