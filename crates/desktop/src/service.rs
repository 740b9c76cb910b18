//! Product Service client.
//!
//! `ProductService` is the seam between the view-model and the remote API;
//! `HttpProductService` is the real implementation over `reqwest`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use catalog_core::ProductId;
use catalog_products::{Draft, Product};

use crate::config::{ClientConfig, QueryEncoding};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// The four operations the catalog needs from the Product Service.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// `GET /api/products`
    async fn list(&self) -> Result<Vec<Product>, ServiceError>;

    /// `GET /api/search?query=<text>`
    async fn search(&self, query: &str) -> Result<Vec<Product>, ServiceError>;

    /// `POST /api/products`; the response must carry the assigned id.
    async fn create(&self, draft: &Draft) -> Result<Product, ServiceError>;

    /// `DELETE /api/products/<id>`; the response body is ignored.
    async fn delete(&self, id: &ProductId) -> Result<(), ServiceError>;
}

/// HTTP implementation of [`ProductService`].
#[derive(Debug, Clone)]
pub struct HttpProductService {
    client: reqwest::Client,
    api_url: String,
    query_encoding: QueryEncoding,
}

impl HttpProductService {
    pub fn new(config: &ClientConfig) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            query_encoding: config.query_encoding,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.api_url)
    }

    pub fn product_url(&self, id: &ProductId) -> String {
        format!("{}/api/products/{}", self.api_url, id)
    }

    pub fn search_url(&self, query: &str) -> Result<String, ServiceError> {
        match self.query_encoding {
            QueryEncoding::Raw => Ok(format!("{}/api/search?query={}", self.api_url, query)),
            QueryEncoding::Percent => {
                let mut url = reqwest::Url::parse(&format!("{}/api/search", self.api_url))
                    .map_err(|e| ServiceError::InvalidUrl(e.to_string()))?;
                url.query_pairs_mut().append_pair("query", query);
                Ok(url.to_string())
            }
        }
    }

    /// Send a request and require a 2xx status.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ServiceError> {
        let resp = req.send().await.map_err(|e| {
            if e.is_builder() {
                ServiceError::InvalidUrl(e.to_string())
            } else {
                ServiceError::Network(e.to_string())
            }
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            return Err(ServiceError::Api(status, resp.text().await.unwrap_or_default()));
        }

        Ok(resp)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ServiceError> {
        let resp = self.send(req).await?;
        resp.json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ProductService for HttpProductService {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        tracing::debug!(url = %self.products_url(), "listing products");
        self.send_json(self.client.get(self.products_url())).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ServiceError> {
        let url = self.search_url(query)?;
        tracing::debug!(%url, "searching products");
        self.send_json(self.client.get(url)).await
    }

    async fn create(&self, draft: &Draft) -> Result<Product, ServiceError> {
        tracing::debug!(name = %draft.name, "creating product");
        self.send_json(self.client.post(self.products_url()).json(draft))
            .await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ServiceError> {
        tracing::debug!(%id, "deleting product");
        self.send(self.client.delete(self.product_url(id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(encoding: QueryEncoding) -> HttpProductService {
        let config = ClientConfig::new("http://catalog.test/")
            .with_query_encoding(encoding);
        HttpProductService::new(&config).unwrap()
    }

    #[test]
    fn builds_endpoint_urls() {
        let svc = service(QueryEncoding::Raw);
        assert_eq!(svc.api_url(), "http://catalog.test");
        assert_eq!(svc.products_url(), "http://catalog.test/api/products");
        assert_eq!(
            svc.product_url(&ProductId::Numeric(1)),
            "http://catalog.test/api/products/1"
        );
        assert_eq!(
            svc.product_url(&ProductId::text("65f0c2")),
            "http://catalog.test/api/products/65f0c2"
        );
    }

    #[test]
    fn raw_search_interpolates_text_as_typed() {
        let svc = service(QueryEncoding::Raw);
        assert_eq!(
            svc.search_url("mug&sort=price").unwrap(),
            "http://catalog.test/api/search?query=mug&sort=price"
        );
    }

    #[test]
    fn percent_search_encodes_text() {
        let svc = service(QueryEncoding::Percent);
        assert_eq!(
            svc.search_url("mug&sort=price").unwrap(),
            "http://catalog.test/api/search?query=mug%26sort%3Dprice"
        );
        assert_eq!(
            svc.search_url("red mug").unwrap(),
            "http://catalog.test/api/search?query=red+mug"
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_a_network_error() {
        // Bind and release a port so nothing is listening on it.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = ClientConfig::new(format!("http://127.0.0.1:{port}"));
        let svc = HttpProductService::new(&config).unwrap();

        match svc.list().await.unwrap_err() {
            ServiceError::Network(_) => {}
            other => panic!("Expected Network error, got {other:?}"),
        }
    }
}
