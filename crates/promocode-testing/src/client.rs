//! In-process HTTP client.
//!
//! Each request is dispatched with `tower::ServiceExt::oneshot` against a clone
//! of the router, so state shared through `Arc` survives across calls.

use axum::Router;
use axum::body::{Body, to_bytes};
use bytes::Bytes;
use http::{Method, Request, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt as _;

/// Drives a router without binding a socket.
#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

/// Buffered response returned by [`TestClient`].
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// Panics if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "invalid JSON body ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, Body::empty(), false).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, Body::empty(), false).await
    }

    pub async fn post_json<T: Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        self.send(Method::POST, uri, json_body(body), true).await
    }

    pub async fn put_json<T: Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        self.send(Method::PUT, uri, json_body(body), true).await
    }

    /// Send a raw request, for cases the typed helpers don't cover.
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|e| match e {});
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Body, is_json: bool) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if is_json {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder.body(body).expect("failed to build request");
        self.request(request).await
    }
}

fn json_body<T: Serialize>(body: &T) -> Body {
    Body::from(serde_json::to_vec(body).expect("failed to serialize request body"))
}
