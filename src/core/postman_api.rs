use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;
use crate::core::build_item::build_item;
use crate::models::collection::{AppendItemsPayload, CreateCollectionPayload, ItemList};
use crate::models::endpoint_descriptor::EndpointDescriptor;
use crate::models::error::BuildError;

const API_KEY_HEADER: &str = "x-api-key";

/// The two Collections API calls the builder makes.
#[async_trait]
pub trait CollectionsApi: Send + Sync {
    /// Creates an empty collection and returns its id.
    async fn create_collection(&self, name: &str) -> Result<String, BuildError>;

    /// Appends one item built from `endpoint` to the collection.
    async fn add_item(&self, collection_id: &str, endpoint: &EndpointDescriptor) -> Result<(), BuildError>;
}

pub struct PostmanClient {
    client: Client,
    base_url: String,
    workspace_id: Option<String>,
}

impl PostmanClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        workspace_id: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, BuildError> {
        let mut api_key_value = HeaderValue::from_str(api_key)
            .map_err(|_| BuildError::Config("api key is not a valid header value".to_string()))?;
        api_key_value.set_sensitive(true);
        let user_agent_value = HeaderValue::from_str(&user_agent())
            .map_err(|_| BuildError::Config("user agent is not a valid header value".to_string()))?;
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key_value);
        headers.insert(USER_AGENT, user_agent_value);
        // 0 means no timeout
        let client_builder = Client::builder().default_headers(headers);
        let client_builder = if timeout_secs > 0 {
            client_builder.timeout(Duration::from_secs(timeout_secs))
        } else {
            client_builder
        };
        let client = client_builder.build().map_err(BuildError::Client)?;
        Ok(PostmanClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            workspace_id,
        })
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<Response, BuildError> {
        let response = request.send().await.map_err(|source| BuildError::Network {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BuildError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CollectionsApi for PostmanClient {
    async fn create_collection(&self, name: &str) -> Result<String, BuildError> {
        let url = format!("{}/collections", self.base_url);
        let mut request = self.client.post(&url).json(&CreateCollectionPayload::named(name));
        if let Some(workspace_id) = &self.workspace_id {
            request = request.query(&[("workspace", workspace_id)]);
        }
        let response = self.send(&url, request).await?;
        let text = response.text().await.map_err(|source| BuildError::Network {
            url: url.clone(),
            source,
        })?;
        let body: Value = serde_json::from_str(&text).map_err(|source| BuildError::Decode {
            url: url.clone(),
            source,
        })?;
        body.pointer("/collection/id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(BuildError::MissingCollectionId)
    }

    async fn add_item(&self, collection_id: &str, endpoint: &EndpointDescriptor) -> Result<(), BuildError> {
        let url = format!("{}/collections/{}", self.base_url, collection_id);
        let payload = AppendItemsPayload {
            collection: ItemList {
                item: vec![build_item(endpoint)?],
            },
        };
        let request = self.client.post(&url).json(&payload);
        self.send(&url, request).await?;
        debug!(name = %endpoint.name, "item accepted");
        Ok(())
    }
}

/// `<crate> <version> (<os>; <os version>)`
pub fn user_agent() -> String {
    let info = os_info::get();
    format!(
        "{} {} ({}; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        info.os_type(),
        info.version()
    )
}
