//! Transport contract
//!
//! The rest of the crate talks to the API only through [`Transport::get`].
//! Anything below that line (TLS, pooling, auth, retries) belongs to the
//! implementation.

use crate::error::Result;
use crate::types::StringMap;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Outcome of a single GET request
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// The server answered with a JSON document
    Found(Value),
    /// The server answered 404
    NotFound,
}

impl Fetched {
    /// Check if this is a not-found result
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The document, if there was one
    pub fn into_found(self) -> Option<Value> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    /// The document for a single-entity lookup.
    ///
    /// The API also reports missing entities in-band as `{"status": 404, ...}`
    /// with a 200 response; both forms map to `None`.
    pub fn into_entity(self) -> Option<Value> {
        self.into_found().filter(|value| !is_not_found_envelope(value))
    }
}

/// Check for the in-band `{"status": 404}` error envelope
pub fn is_not_found_envelope(value: &Value) -> bool {
    value.get("status").and_then(Value::as_u64) == Some(404)
}

/// A GET-only JSON transport
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `path` (relative to the API root) with the given query parameters
    async fn get(&self, path: &str, params: &StringMap) -> Result<Fetched>;
}

/// Shared transport handle passed to every entity-fetching operation
pub type Connection = Arc<dyn Transport>;

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, path: &str, params: &StringMap) -> Result<Fetched> {
        (**self).get(path, params).await
    }
}
