//! HTTP implementation of [`BedService`] using reqwest.
//!
//! Works natively and on wasm32 (reqwest delegates to `fetch` there).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::BedService;
use crate::config::ApiConfig;
use crate::domain::{ApiErrorResponse, AssignPatientRequest, Bed, Transition};
use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct HttpBedService {
    client: Client,
    config: ApiConfig,
}

impl HttpBedService {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use a preconfigured client (timeouts, proxy settings)
    pub fn with_client(config: ApiConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn transition_url(&self, bed_id: u32, transition: Transition) -> String {
        self.config
            .url(&format!("/beds/{}/{}", bed_id, transition.path_segment()))
    }

    async fn post_transition(&self, bed_id: u32, transition: Transition) -> Result<Bed, ServiceError> {
        let url = self.transition_url(bed_id, transition);
        log::debug!("POST {}", url);
        send_json(self.client.post(url)).await
    }
}

#[async_trait(?Send)]
impl BedService for HttpBedService {
    async fn list_beds(&self) -> Result<Vec<Bed>, ServiceError> {
        let url = self.config.url("/beds");
        log::debug!("GET {}", url);
        send_json(self.client.get(url)).await
    }

    async fn assign(&self, bed_id: u32, request: &AssignPatientRequest) -> Result<Bed, ServiceError> {
        let url = self.transition_url(bed_id, Transition::Assign);
        log::debug!("POST {}", url);
        send_json(self.client.post(url).json(request)).await
    }

    async fn discharge(&self, bed_id: u32) -> Result<Bed, ServiceError> {
        self.post_transition(bed_id, Transition::Discharge).await
    }

    async fn clean(&self, bed_id: u32) -> Result<Bed, ServiceError> {
        self.post_transition(bed_id, Transition::Clean).await
    }

    fn export_url(&self) -> String {
        self.config.url("/beds/export")
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ServiceError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    Err(error_from_body(status.as_u16(), &body))
}

/// Map a non-2xx response to an error, keeping the server's `{error}` text.
fn error_from_body(status: u16, body: &str) -> ServiceError {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(ApiErrorResponse { error }) => ServiceError::Rejected { status, message: error },
        Err(_) => ServiceError::Status { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BED_JSON: &str = r#"[{"id":1,"bed_number":"ICU-01","state":"available","created_at":"2024-05-01T00:00:00.000Z","updated_at":"2024-05-01T00:00:00.000Z"}]"#;

    /// Serve exactly one canned HTTP response on a local port.
    async fn serve_once(status: &'static str, body: &'static str) -> HttpBedService {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        local_service(&format!("http://{}", addr))
    }

    fn local_service(base_url: &str) -> HttpBedService {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpBedService::with_client(ApiConfig::new(base_url), client)
    }

    #[tokio::test]
    async fn test_list_beds_decodes_success() {
        let service = serve_once("200 OK", BED_JSON).await;
        let beds = service.list_beds().await.unwrap();
        assert_eq!(beds.len(), 1);
        assert_eq!(beds[0].bed_number, "ICU-01");
    }

    #[tokio::test]
    async fn test_server_error_keeps_message() {
        let service = serve_once("500 Internal Server Error", r#"{"error":"Database unavailable"}"#).await;
        let err = service.discharge(16).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Rejected { status: 500, message: "Database unavailable".to_string() }
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let service = serve_once("200 OK", "[{\"id\": oops").await;
        let err = service.list_beds().await.unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_bad_timestamp_is_decode_error() {
        let service = serve_once(
            "200 OK",
            r#"[{"id":1,"bed_number":"ICU-01","state":"available","created_at":"2024-05-01 00:00:00","updated_at":"2024-05-01T00:00:00Z"}]"#,
        )
        .await;
        let err = service.list_beds().await.unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let service = local_service(&format!("http://{}", addr));
        let err = service.list_beds().await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)), "got {:?}", err);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_urls() {
        let service = HttpBedService::new(ApiConfig::new("http://ward:3000/"));
        assert_eq!(service.transition_url(7, Transition::Assign), "http://ward:3000/beds/7/assign");
        assert_eq!(service.transition_url(7, Transition::Clean), "http://ward:3000/beds/7/clean");
        assert_eq!(service.export_url(), "http://ward:3000/beds/export");
    }

    #[test]
    fn test_error_body_with_message() {
        let err = error_from_body(409, r#"{"error":"Bed ICU-03 is not available"}"#);
        assert_eq!(
            err,
            ServiceError::Rejected { status: 409, message: "Bed ICU-03 is not available".to_string() }
        );
    }

    #[test]
    fn test_error_body_without_message() {
        assert_eq!(error_from_body(500, "Internal Server Error"), ServiceError::Status { status: 500 });
        assert_eq!(error_from_body(502, ""), ServiceError::Status { status: 502 });
    }
}
