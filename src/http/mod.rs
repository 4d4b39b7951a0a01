//! HTTP transport module
//!
//! Provides the [`Transport`] contract the core is written against and a
//! default reqwest implementation.
//!
//! # Features
//!
//! - **Narrow contract**: `get(path, params)` returning a JSON document or a
//!   not-found signal
//! - **Shared handles**: [`Connection`] is an `Arc<dyn Transport>` so entities
//!   can hold on to the transport they were fetched with
//! - **Error classification**: 404 is data, other failures are errors

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, API_BASE_URL, V2_MEDIA_TYPE};
pub use transport::{is_not_found_envelope, Connection, Fetched, Transport};

#[cfg(test)]
mod tests;
