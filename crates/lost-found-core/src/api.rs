//! Items REST Client
//!
//! `ItemsApi` is the seam between the controller and the backend. The HTTP
//! implementation uses reqwest, which compiles to `fetch` on wasm32.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::form::{ImageUpload, NewItem};
use crate::models::{decode_listing, ItemId, ItemRecord};

/// Backend operations over item records.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait ItemsApi {
    /// GET the full collection, in backend order
    async fn list_items(&self) -> ClientResult<Vec<ItemRecord>>;

    /// POST a new item as multipart form data
    async fn create_item(&self, item: &NewItem) -> ClientResult<()>;

    /// DELETE one item by id
    async fn delete_item(&self, id: &ItemId) -> ClientResult<()>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Turn a non-2xx response body into a `Backend` error, preferring the
/// server's own `{"error": "..."}` text
pub fn backend_error(status: StatusCode, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ClientError::Backend(parsed.error),
        Err(_) => ClientError::Backend(format!("Server responded with {}", status)),
    }
}

fn network_error(e: reqwest::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

fn image_part(image: &ImageUpload) -> Part {
    let part = || Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
    part().mime_str(&image.mime_type).unwrap_or_else(|_| part())
}

/// reqwest-backed client for the items endpoints
#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    config: ClientConfig,
}

impl HttpItemsApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> ClientResult<Vec<ItemRecord>> {
        let url = self.config.items_url();
        log::debug!("[API] GET {}", url);
        let response = self.client().get(&url).send().await.map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Load(format!("GET {} returned {}", url, status)));
        }
        let values = response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| ClientError::Load(format!("could not decode items: {}", e)))?;
        Ok(decode_listing(values))
    }

    async fn create_item(&self, item: &NewItem) -> ClientResult<()> {
        let url = self.config.items_url();
        let mut form = Form::new()
            .text("description", item.description.clone())
            .text("location", item.location.clone())
            .text("itemDescription", item.item_description.clone());
        if let Some(image) = &item.image {
            form = form.part("image", image_part(image));
        }
        log::debug!("[API] POST {} (image: {})", url, item.image.is_some());

        let response = self.client().post(&url).multipart(form).send().await.map_err(network_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(backend_error(status, &body))
    }

    async fn delete_item(&self, id: &ItemId) -> ClientResult<()> {
        let url = self.config.item_url(id);
        log::debug!("[API] DELETE {}", url);
        let response = self.client().delete(&url).send().await.map_err(network_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(backend_error(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_uses_server_text() {
        let err = backend_error(StatusCode::BAD_REQUEST, r#"{"error": "Description too long"}"#);
        assert_eq!(err, ClientError::Backend("Description too long".to_string()));
    }

    #[test]
    fn test_backend_error_fallback() {
        let err = backend_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(
            err,
            ClientError::Backend("Server responded with 500 Internal Server Error".to_string())
        );
    }

    #[test]
    fn test_http_api_uses_config() {
        let api = HttpItemsApi::new(ClientConfig::default().with_api_base("http://lf.test"));
        assert_eq!(api.config().items_url(), "http://lf.test/api/items");
    }
}
