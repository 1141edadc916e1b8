use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use fc_api::{ApiConfig, ApiState, config::Environment};
use http_body_util::BodyExt;
use serde::Deserialize;
use tower::ServiceExt;

/// Frontend origin the service allows by default
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Build the full application the same way the server binary does
pub fn test_app() -> Router {
    test_app_with(ApiConfig::default())
}

pub fn test_app_in(environment: Environment) -> Router {
    test_app_with(ApiConfig {
        env: environment,
        ..ApiConfig::default()
    })
}

pub fn test_app_with(config: ApiConfig) -> Router {
    let state = ApiState::new();
    fc_api::router::app(&config, state)
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a GET request from a browser page hosted on `origin`
    pub async fn get_from_origin(&self, uri: &str, origin: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header("origin", origin)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a CORS preflight request
    pub async fn preflight(
        &self,
        uri: &str,
        origin: &str,
        method: &str,
        headers: &str,
    ) -> TestResponse {
        let request = Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .header("origin", origin)
            .header("access-control-request-method", method)
            .header("access-control-request-headers", headers)
            .body(Body::empty())
            .expect("Failed to build preflight request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}
