use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A product as returned by the API: `{"<id>": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u64, String>", into = "BTreeMap<u64, String>")]
pub struct Product {
    pub id: u64,
    pub name: String,
}

impl TryFrom<BTreeMap<u64, String>> for Product {
    type Error = String;

    fn try_from(map: BTreeMap<u64, String>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!("expected exactly one entry, got {}", map.len()));
        }
        let (id, name) = map.into_iter().next().ok_or("empty product")?;
        Ok(Self { id, name })
    }
}

impl From<Product> for BTreeMap<u64, String> {
    fn from(product: Product) -> Self {
        BTreeMap::from([(product.id, product.name)])
    }
}

#[derive(Debug, Serialize)]
struct ProductRequest<'a> {
    product_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

pub struct ProductClient {
    client: Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ClientError> {
        let resp = self.client.get(self.url("/products")).send().await?;
        decode(resp).await
    }

    pub async fn get(&self, id: u64) -> Result<Product, ClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create(&self, name: &str) -> Result<Product, ClientError> {
        let resp = self
            .client
            .post(self.url("/products"))
            .json(&ProductRequest { product_name: name })
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn update(&self, id: u64, name: &str) -> Result<Product, ClientError> {
        let resp = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(&ProductRequest { product_name: name })
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete(&self, id: u64) -> Result<Product, ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        decode(resp).await
    }

    /// Liveness probe.
    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;
        decode(resp).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json().await?)
}
