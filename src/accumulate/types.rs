//! Accumulation types
//!
//! Collection requests, de-duplication policy and the traits that turn raw
//! records into entities.

use crate::error::Result;
use crate::http::Connection;
use crate::types::StringMap;
use serde_json::Value;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

// ============================================================================
// Entity traits
// ============================================================================

/// Something with a stable identity
pub trait Entity {
    /// Identifier type
    type Id: Eq + Hash + Clone + fmt::Debug;

    /// The entity's identifier
    fn id(&self) -> &Self::Id;
}

/// Types that can be built from one raw API record
pub trait FromRecord: Sized {
    /// Build from `record`, keeping `conn` for any later lookups
    fn from_record(record: &Value, conn: &Connection) -> Result<Self>;
}

/// Maps one raw record to one typed entity
///
/// Implemented for closures `Fn(&Value, &Connection) -> Result<T>` and, via
/// [`RecordFactory`], for every [`FromRecord`] type.
pub trait EntityFactory<T> {
    /// Build an entity from `record`
    fn build(&self, record: &Value, conn: &Connection) -> Result<T>;
}

impl<T, F> EntityFactory<T> for F
where
    F: Fn(&Value, &Connection) -> Result<T>,
{
    fn build(&self, record: &Value, conn: &Connection) -> Result<T> {
        self(record, conn)
    }
}

/// [`EntityFactory`] for any [`FromRecord`] type
pub struct RecordFactory<T>(PhantomData<fn() -> T>);

impl<T> RecordFactory<T> {
    /// Create a factory
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for RecordFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RecordFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RecordFactory")
    }
}

impl<T: FromRecord> EntityFactory<T> for RecordFactory<T> {
    fn build(&self, record: &Value, conn: &Connection) -> Result<T> {
        T::from_record(record, conn)
    }
}

// ============================================================================
// Collection request
// ============================================================================

/// De-duplication policy for a collection endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dedup {
    /// Keep every record
    #[default]
    None,
    /// Keep only the first entity with a given id
    ById,
}

/// A paginated collection to accumulate
#[derive(Debug, Clone)]
pub struct CollectionRequest {
    /// Collection endpoint path
    pub path: String,
    /// Query parameters sent with every page (filters)
    pub params: StringMap,
    /// Field of each page holding the record array
    pub records_key: String,
    /// Dot path of the entity inside each record, if it is nested
    pub record_path: Option<String>,
    /// Maximum number of entities to return (0 = all)
    pub limit: usize,
    /// De-duplication policy
    pub dedup: Dedup,
}

impl CollectionRequest {
    /// Request every record under `records_key` from `path`
    pub fn new(path: impl Into<String>, records_key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: StringMap::new(),
            records_key: records_key.into(),
            record_path: None,
            limit: 0,
            dedup: Dedup::None,
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the result limit (0 = all)
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Unwrap each record at `path` before building the entity
    #[must_use]
    pub fn record_path(mut self, path: impl Into<String>) -> Self {
        self.record_path = Some(path.into());
        self
    }

    /// Set the de-duplication policy
    #[must_use]
    pub fn dedup(mut self, dedup: Dedup) -> Self {
        self.dedup = dedup;
        self
    }
}
