use serde::de::DeserializeOwned;
use serde::Deserialize;

use kubedeck_types::{Cluster, Deployment, Namespace, Node, Pod, Service};

use crate::error::ApiError;

/// Default API address, matching the dashboard server's default bind.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable consulted by [`ApiClient::from_env`].
const BASE_URL_ENV: &str = "KUBEDECK_API_URL";

/// Payload of `/health`
#[derive(Clone, Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// Server time as a Unix timestamp
    pub time: i64,
}

/// Payload of `/ws/status`
#[derive(Clone, Debug, Deserialize)]
pub struct WebSocketStatus {
    pub connected_clients: u32,
    pub status: String,
}

/// Client for the inventory API's GET-only surface.
///
/// Each call issues exactly one request and resolves to a value or an
/// [`ApiError`]; there is no retry, timeout, or cancellation at this layer.
/// Concurrent calls are independent and may complete in any order.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from `KUBEDECK_API_URL`, falling back to the default
    /// local address.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single GET request against `base_url + path`, parsing the body as
    /// JSON into `T`.
    ///
    /// Response shapes are a contract with the server, not a checked
    /// invariant: a well-formed body of the wrong shape fails deserialization
    /// and surfaces as a transport-kind error. A non-success status is
    /// reported from the status line alone; the body is left unread.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        self.fetch("/api/clusters").await
    }

    pub async fn cluster(&self, id: &str) -> Result<Cluster, ApiError> {
        self.fetch(&format!("/api/clusters/{id}")).await
    }

    pub async fn cluster_nodes(&self, id: &str) -> Result<Vec<Node>, ApiError> {
        self.fetch(&format!("/api/clusters/{id}/nodes")).await
    }

    pub async fn cluster_pods(&self, id: &str) -> Result<Vec<Pod>, ApiError> {
        self.fetch(&format!("/api/clusters/{id}/pods")).await
    }

    pub async fn cluster_services(&self, id: &str) -> Result<Vec<Service>, ApiError> {
        self.fetch(&format!("/api/clusters/{id}/services")).await
    }

    pub async fn cluster_deployments(&self, id: &str) -> Result<Vec<Deployment>, ApiError> {
        self.fetch(&format!("/api/clusters/{id}/deployments")).await
    }

    pub async fn cluster_namespaces(&self, id: &str) -> Result<Vec<Namespace>, ApiError> {
        self.fetch(&format!("/api/clusters/{id}/namespaces")).await
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.fetch("/health").await
    }

    pub async fn websocket_status(&self) -> Result<WebSocketStatus, ApiError> {
        self.fetch("/ws/status").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_kept_verbatim() {
        let client = ApiClient::new("http://dash.internal:9000");
        assert_eq!(client.base_url(), "http://dash.internal:9000");
    }

    #[test]
    fn test_health_status_wire_format() {
        // Matches the server's liveness payload
        let payload = r#"{"status": "ok", "time": 1717243200}"#;
        let health: HealthStatus = serde_json::from_str(payload).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.time, 1_717_243_200);
    }

    #[test]
    fn test_websocket_status_wire_format() {
        // This endpoint uses snake_case, unlike the resource endpoints
        let payload = r#"{"connected_clients": 3, "status": "running"}"#;
        let ws: WebSocketStatus = serde_json::from_str(payload).unwrap();
        assert_eq!(ws.connected_clients, 3);
    }

    /// Serve one canned HTTP response on an ephemeral port and return the
    /// base URL to reach it.
    async fn serve_once(body: &str, status_line: &str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // Drain the request before answering
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_fetch_parses_success_body() {
        let base = serve_once(r#"{"status": "ok", "time": 1717243200}"#, "HTTP/1.1 200 OK").await;
        let client = ApiClient::new(base);

        let health: HealthStatus = client.fetch("/health").await.unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.time, 1_717_243_200);
    }

    #[tokio::test]
    async fn test_fetch_maps_status_from_status_line() {
        // The error body must not leak into the error; only the status
        // line matters.
        let base = serve_once(r#"{"error": "no such cluster"}"#, "HTTP/1.1 404 Not Found").await;
        let client = ApiClient::new(base);

        let error = client.fetch::<HealthStatus>("/health").await.unwrap_err();
        assert_eq!(
            error,
            ApiError::Status {
                status: 404,
                status_text: "Not Found".to_string(),
            }
        );
        assert_eq!(error.status(), Some(404));
    }

    #[tokio::test]
    async fn test_fetch_maps_connection_failure_to_transport() {
        // Bind then drop the listener so the port is known to refuse
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}"));
        let error = client.fetch::<HealthStatus>("/health").await.unwrap_err();

        assert_eq!(error.status(), None);
        match error {
            ApiError::Transport { message } => assert!(!message.is_empty()),
            other => panic!("expected a transport error, got {other:?}"),
        }
    }
}
