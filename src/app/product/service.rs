//! 商品 REST 客户端

use super::model::{Product, ProductPayload};
use crate::config::ApiConfig;
use crate::core::error::ClientError;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

/// 商品集合端点的三个操作
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// `GET /shop`
    async fn list(&self) -> Result<Vec<Product>, ClientError>;

    /// `POST /shop`
    async fn create(&self, payload: ProductPayload) -> Result<Product, ClientError>;

    /// `PUT /shop/{id}`
    async fn update(&self, id: i64, payload: ProductPayload) -> Result<Product, ClientError>;
}

/// 基于 reqwest 的实现
///
/// 不设置超时也不重试，请求失败直接返回错误。
#[derive(Clone)]
pub struct HttpProductApi {
    client: Client,
    collection_url: String,
}

impl HttpProductApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_url(config.collection_url())
    }

    pub fn with_url(collection_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            collection_url: collection_url.into(),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        let request_id = Uuid::new_v4();
        debug!("GET {} request_id={}", self.collection_url, request_id);

        let response = self
            .client
            .get(&self.collection_url)
            .header("x-request-id", request_id.to_string())
            .send()
            .await?;
        decode(response).await
    }

    async fn create(&self, payload: ProductPayload) -> Result<Product, ClientError> {
        let request_id = Uuid::new_v4();
        debug!("POST {} request_id={}", self.collection_url, request_id);

        let response = self
            .client
            .post(&self.collection_url)
            .header("x-request-id", request_id.to_string())
            .json(&payload)
            .send()
            .await?;
        decode(response).await
    }

    async fn update(&self, id: i64, payload: ProductPayload) -> Result<Product, ClientError> {
        let request_id = Uuid::new_v4();
        let url = self.item_url(id);
        debug!("PUT {} request_id={}", url, request_id);

        let response = self
            .client
            .put(&url)
            .header("x-request-id", request_id.to_string())
            .json(&payload)
            .send()
            .await?;
        decode(response).await
    }
}

/// 非 2xx 状态和无法解析的响应体都视为失败
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_config() {
        let api = HttpProductApi::new(&ApiConfig::default());
        assert_eq!(api.collection_url(), "http://localhost:8081/shop");
        assert_eq!(api.item_url(7), "http://localhost:8081/shop/7");
    }
}
