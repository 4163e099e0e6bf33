//! HTTP implementation of the guestbook API

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{ClientError, ClientResult, Entry, EntryId, EntryPayload, GuestbookApi};
use crate::config::ApiConfig;

/// `reqwest`-backed guestbook client
#[derive(Debug, Clone)]
pub struct GuestbookClient {
    client: Client,
    base_url: String,
}

impl GuestbookClient {
    /// Create a client for the collection at `base_url`
    ///
    /// `timeout` of `None` lets requests wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// Create a client from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Self::new(
            &config.url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Collection URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single entry; the id is encoded as one path segment
    pub fn entry_url(&self, id: &EntryId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl GuestbookApi for GuestbookClient {
    async fn list_entries(&self) -> ClientResult<Vec<Entry>> {
        tracing::debug!(url = %self.base_url, "GET entries");

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let body = Self::check(response)
            .await?
            .bytes()
            .await
            .map_err(ClientError::from_transport)?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn create_entry(&self, payload: &EntryPayload) -> ClientResult<()> {
        tracing::debug!(url = %self.base_url, "POST entry");

        let response = self
            .client
            .post(&self.base_url)
            .json(payload)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        Self::check(response).await.map(|_| ())
    }

    async fn update_entry(&self, id: &EntryId, payload: &EntryPayload) -> ClientResult<()> {
        let url = self.entry_url(id);
        tracing::debug!(%url, "PUT entry");

        let response = self
            .client
            .put(&url)
            .json(payload)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        Self::check(response).await.map(|_| ())
    }

    async fn delete_entry(&self, id: &EntryId) -> ClientResult<()> {
        let url = self.entry_url(id);
        tracing::debug!(%url, "DELETE entry");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        Self::check(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{get, put},
        Json, Router,
    };
    use std::sync::{Arc, Mutex};

    /// Minimal in-memory guestbook server
    #[derive(Clone, Default)]
    struct FakeServer {
        entries: Arc<Mutex<Vec<serde_json::Value>>>,
        next_id: Arc<Mutex<u64>>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    async fn list(State(s): State<FakeServer>) -> Json<Vec<serde_json::Value>> {
        s.seen.lock().unwrap().push("GET".to_string());
        Json(s.entries.lock().unwrap().clone())
    }

    async fn create(
        State(s): State<FakeServer>,
        Json(body): Json<EntryPayload>,
    ) -> StatusCode {
        s.seen.lock().unwrap().push("POST".to_string());
        let mut next = s.next_id.lock().unwrap();
        *next += 1;
        s.entries.lock().unwrap().push(serde_json::json!({
            "id": *next,
            "name": body.name,
            "message": body.message,
        }));
        StatusCode::CREATED
    }

    async fn update(
        State(s): State<FakeServer>,
        Path(id): Path<String>,
        Json(body): Json<EntryPayload>,
    ) -> StatusCode {
        s.seen.lock().unwrap().push(format!("PUT {}", id));
        let mut entries = s.entries.lock().unwrap();
        match entries.iter_mut().find(|e| id_of(e) == id) {
            Some(entry) => {
                entry["name"] = body.name.into();
                entry["message"] = body.message.into();
                StatusCode::OK
            }
            None => StatusCode::NOT_FOUND,
        }
    }

    async fn remove(State(s): State<FakeServer>, Path(id): Path<String>) -> StatusCode {
        s.seen.lock().unwrap().push(format!("DELETE {}", id));
        let mut entries = s.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| id_of(e) != id);
        if entries.len() < before {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::NOT_FOUND
        }
    }

    fn id_of(entry: &serde_json::Value) -> String {
        match &entry["id"] {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    async fn spawn(server: FakeServer) -> String {
        let app = Router::new()
            .route("/guestbook", get(list).post(create))
            .route("/guestbook/:id", put(update).delete(remove))
            .with_state(server);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/guestbook", addr)
    }

    #[test]
    fn test_entry_url_encodes_id() {
        let client = GuestbookClient::new("http://localhost:5000/guestbook/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/guestbook");
        assert_eq!(
            client.entry_url(&EntryId::new("1")),
            "http://localhost:5000/guestbook/1"
        );
        assert_eq!(
            client.entry_url(&EntryId::new("a/b c?#")),
            "http://localhost:5000/guestbook/a%2Fb%20c%3F%23"
        );
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(matches!(
            GuestbookClient::new("localhost:5000", None),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let server = FakeServer::default();
        let base = spawn(server.clone()).await;
        let client = GuestbookClient::new(&base, None).unwrap();

        assert!(client.list_entries().await.unwrap().is_empty());

        client
            .create_entry(&EntryPayload::new("Ann", "hi"))
            .await
            .unwrap();
        client
            .create_entry(&EntryPayload::new("Bo", "hey"))
            .await
            .unwrap();

        let entries = client.list_entries().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Ann");
        assert_eq!(entries[1].name, "Bo");

        client
            .update_entry(&entries[0].id, &EntryPayload::new("Ann", "hello"))
            .await
            .unwrap();
        client.delete_entry(&entries[1].id).await.unwrap();

        let entries = client.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "hello");

        let seen = server.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec!["GET", "POST", "POST", "GET", "PUT 1", "DELETE 2", "GET"]
        );
    }

    #[tokio::test]
    async fn test_special_characters_in_id_address_one_entry() {
        let server = FakeServer::default();
        server.entries.lock().unwrap().push(serde_json::json!({
            "id": "a/b c",
            "name": "Ann",
            "message": "hi",
        }));
        let base = spawn(server.clone()).await;
        let client = GuestbookClient::new(&base, None).unwrap();

        client
            .update_entry(&EntryId::new("a/b c"), &EntryPayload::new("Ann", "hello"))
            .await
            .unwrap();

        let entries = client.list_entries().await.unwrap();
        assert_eq!(entries[0].message, "hello");
        assert!(server.seen.lock().unwrap().contains(&"PUT a/b c".to_string()));
    }

    #[tokio::test]
    async fn test_missing_entry_is_api_error() {
        let base = spawn(FakeServer::default()).await;
        let client = GuestbookClient::new(&base, None).unwrap();

        let err = client.delete_entry(&EntryId::new("42")).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let app = Router::new().route(
            "/guestbook",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "waking up") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = GuestbookClient::new(&format!("http://{}/guestbook", addr), None).unwrap();
        match client.list_entries().await {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "waking up");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_list_is_decode_error() {
        let app = Router::new().route("/guestbook", get(|| async { "not json" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = GuestbookClient::new(&format!("http://{}/guestbook", addr), None).unwrap();
        assert!(matches!(
            client.list_entries().await,
            Err(ClientError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_closed_port_is_unavailable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GuestbookClient::new(&format!("http://{}/guestbook", addr), None).unwrap();
        assert!(matches!(
            client.list_entries().await,
            Err(ClientError::Unavailable(_))
        ));
    }
}
