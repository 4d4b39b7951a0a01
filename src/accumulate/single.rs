//! Single-entity lookups
//!
//! One request, two outcomes: the entity, or `None` if the API says it does
//! not exist.

use super::types::EntityFactory;
use crate::error::{Error, Result};
use crate::http::{Connection, Transport};
use crate::types::StringMap;
use tracing::debug;
use url::form_urlencoded;

/// Fetch the entity at `path`.
///
/// Both an HTTP 404 and the API's in-band `{"status": 404}` envelope yield
/// `Ok(None)`.
pub async fn fetch_one<T, F>(conn: &Connection, path: &str, factory: &F) -> Result<Option<T>>
where
    F: EntityFactory<T> + ?Sized,
{
    match conn.get(path, &StringMap::new()).await?.into_entity() {
        Some(record) => factory.build(&record, conn).map(Some),
        None => {
            debug!("{path}: not found");
            Ok(None)
        }
    }
}

/// Reject identifiers that cannot name a single path segment before any
/// request is made: blank values, and `.` / `..`, which URL resolution
/// treats as dot-segments even when percent-encoded.
pub fn validate_identifier(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(name, "must not be blank"));
    }
    if matches!(value, "." | "..") {
        return Err(Error::invalid_argument(
            name,
            format!("'{value}' is not a valid identifier"),
        ));
    }
    Ok(())
}

/// Percent-encode `value` for use as a single path segment
pub fn encode_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Validate `value` and encode it as a path segment
pub fn identifier_segment(name: &str, value: &str) -> Result<String> {
    validate_identifier(name, value)?;
    Ok(encode_segment(value))
}
