//! HTTP client wrapper - builds item requests and maps responses to domain types

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::api::response::{decode_item, decode_item_list, decode_message};
use crate::api::InventoryApi;
use crate::constants::{DEFAULT_TIMEOUT_SECS, ITEMS_PATH};
use crate::error::ApiError;
use crate::models::{HttpMethod, Item};

/// Connection settings for [`InventoryClient`]
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// reqwest-backed implementation of [`InventoryApi`]
#[derive(Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for InventoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl InventoryClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(InventoryClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the items endpoint
    pub fn items_url(&self) -> String {
        format!("{}{}", self.base_url, ITEMS_PATH)
    }

    fn build_request(
        &self,
        method: HttpMethod,
        id: Option<i64>,
        item: Option<&Item>,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let url = self.items_url();
        let mut req_builder = match method {
            HttpMethod::GET => self.http.get(&url),
            HttpMethod::POST => self.http.post(&url),
            HttpMethod::PUT => self.http.put(&url),
            HttpMethod::DELETE => self.http.delete(&url),
        };

        if let Some(id) = id {
            req_builder = req_builder.query(&[("id", id)]);
        }

        req_builder = req_builder.header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            req_builder = req_builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(item) = item.filter(|_| method.has_body()) {
            req_builder = req_builder.body(serde_json::to_string(item)?);
        }

        Ok(req_builder)
    }

    /// Perform one request and return the body of a successful response
    async fn send(
        &self,
        method: HttpMethod,
        id: Option<i64>,
        item: Option<&Item>,
    ) -> Result<String, ApiError> {
        let req_builder = self.build_request(method, id, item)?;
        tracing::debug!(method = method.as_str(), url = %self.items_url(), ?id, "Sending request");

        let resp = req_builder.send().await.map_err(|e| {
            tracing::warn!(method = method.as_str(), error = %e, "Request failed");
            ApiError::from(e)
        })?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;

        if status >= 400 {
            tracing::warn!(method = method.as_str(), status, "Server returned an error");
            return Err(ApiError::Status { status, body });
        }

        tracing::debug!(method = method.as_str(), status, bytes = body.len(), "Request completed");
        Ok(body)
    }
}

#[async_trait]
impl InventoryApi for InventoryClient {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let body = self.send(HttpMethod::GET, None, None).await?;
        decode_item_list(&body)
    }

    async fn get_item(&self, id: i64) -> Result<Item, ApiError> {
        let body = self.send(HttpMethod::GET, Some(id), None).await?;
        decode_item(&body)
    }

    async fn create_item(&self, item: &Item) -> Result<String, ApiError> {
        let body = self.send(HttpMethod::POST, None, Some(item)).await?;
        decode_message(&body)
    }

    async fn update_item(&self, id: i64, item: &Item) -> Result<String, ApiError> {
        let body = self.send(HttpMethod::PUT, Some(id), Some(item)).await?;
        decode_message(&body)
    }

    async fn delete_item(&self, id: i64) -> Result<String, ApiError> {
        let body = self.send(HttpMethod::DELETE, Some(id), None).await?;
        decode_message(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> InventoryClient {
        let mut config = ClientConfig::new(format!("{}/", server.uri()));
        if let Some(token) = token {
            config = config.with_token(token);
        }
        InventoryClient::new(config).unwrap()
    }

    fn mouse() -> Item {
        Item {
            item_id: 12,
            name: "Mouse".into(),
            category_id: 2,
            quantity: 100,
            min_quantity: 10,
            cost: 5.25,
            price: 8.5,
            location: "Shelf C".into(),
            vendor: "Logitech".into(),
            category_name: Some("Peripherals".into()),
        }
    }

    async fn only_request_body(server: &MockServer) -> Value {
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        serde_json::from_slice(&requests[0].body).unwrap()
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = InventoryClient::new(ClientConfig::new("http://host/api/")).unwrap();
        assert_eq!(client.items_url(), "http://host/api/items.php");
    }

    #[tokio::test]
    async fn test_list_items_sends_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items.php"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", "Bearer token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"item_id": "1", "name": "Laptop", "quantity": "50"},
                {"item_id": "2", "name": "Mouse", "quantity": "10"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let items = client_for(&server, Some("token")).list_items().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Mouse");
    }

    #[tokio::test]
    async fn test_no_token_no_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        client_for(&server, Some("")).list_items().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_get_item_message_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items.php"))
            .and(query_param("id", "99"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Item not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, None).get_item(99).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Item not found");
    }

    #[tokio::test]
    async fn test_error_status_carries_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items.php"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"Unauthorized"}"#))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("wrong")).list_items().await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains(r#"{"message":"Unauthorized"}"#));
    }

    #[tokio::test]
    async fn test_create_body_omits_server_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/items.php"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"message": "Item created successfully"})),
            )
            .mount(&server)
            .await;

        let message = client_for(&server, None).create_item(&mouse()).await.unwrap();
        assert_eq!(message, "Item created successfully");

        let body = only_request_body(&server).await;
        assert!(body.get("item_id").is_none());
        assert!(body.get("category_name").is_none());
        assert_eq!(body["minQuantity"], json!(10));
        assert_eq!(body["vendor"], json!("Logitech"));
    }

    #[tokio::test]
    async fn test_update_uses_query_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/items.php"))
            .and(query_param("id", "12"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Item updated successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let message = client_for(&server, None)
            .update_item(12, &mouse())
            .await
            .unwrap();
        assert_eq!(message, "Item updated successfully");

        let body = only_request_body(&server).await;
        assert!(body.get("item_id").is_none());
        assert_eq!(body["quantity"], json!(100));
    }

    #[tokio::test]
    async fn test_delete_returns_raw_body_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/items.php"))
            .and(query_param("id", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"deleted":4}"#))
            .mount(&server)
            .await;

        let message = client_for(&server, None).delete_item(4).await.unwrap();
        assert_eq!(message, r#"{"deleted":4}"#);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = InventoryClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
        let err = client.list_items().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
