//! Collection accumulation
//!
//! Builds a bounded, ordered list of entities from a paginated endpoint.

use super::types::{CollectionRequest, Dedup, Entity, EntityFactory};
use crate::error::{Error, Result};
use crate::http::Connection;
use crate::pagination::{lookup, PageRequest, PaginationConfig, Paginator};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Accumulates paginated collections into entity lists
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    pagination: PaginationConfig,
}

impl Accumulator {
    /// Create an accumulator using the API's default pagination
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` as the pagination template.
    ///
    /// The page size and records path are always derived from each
    /// [`CollectionRequest`]; everything else is taken from `config`.
    #[must_use]
    pub fn with_pagination(mut self, config: PaginationConfig) -> Self {
        self.pagination = config;
        self
    }

    /// Fetch `request` and build each record with `factory`.
    ///
    /// Returns at most `request.limit` entities (all of them for `0`) in
    /// server order. Paging stops as soon as the limit is reached, even in the
    /// middle of a page. A collection whose first page is a 404 yields an
    /// empty list. A page without an array at `records_key`, or a record the
    /// factory rejects, fails the whole call.
    pub async fn accumulate<T, F>(
        &self,
        conn: &Connection,
        request: &CollectionRequest,
        factory: &F,
    ) -> Result<Vec<T>>
    where
        T: Entity,
        F: EntityFactory<T> + ?Sized,
    {
        let policy = PageRequest::for_limit(request.limit);
        let paginator = Paginator::new(
            self.pagination
                .clone()
                .with_page_size(policy.page_size)
                .with_records_path(request.records_key.as_str()),
        );

        let mut entities: Vec<T> = Vec::new();
        let mut seen = HashSet::new();

        let summary = paginator
            .paginate(conn.as_ref(), &request.path, &request.params, |page| {
                let records = records_of(page, request)?;

                for record in records {
                    let record = match &request.record_path {
                        Some(path) => lookup(record, path).ok_or_else(|| {
                            Error::record_extraction(
                                &request.path,
                                format!("{}[].{path}", request.records_key),
                            )
                        })?,
                        None => record,
                    };

                    let entity = factory.build(record, conn)?;
                    if request.dedup == Dedup::ById && !seen.insert(entity.id().clone()) {
                        trace!("{}: skipping duplicate {:?}", request.path, entity.id());
                        continue;
                    }

                    entities.push(entity);
                    if policy.is_satisfied_by(entities.len()) {
                        return Ok(false);
                    }
                }

                Ok(!records.is_empty())
            })
            .await?;

        debug!(
            "{}: accumulated {} entities from {} page(s) ({:?})",
            request.path,
            entities.len(),
            summary.pages,
            summary.stop
        );
        Ok(entities)
    }
}

/// Accumulate with the default pagination settings
pub async fn accumulate<T, F>(
    conn: &Connection,
    request: &CollectionRequest,
    factory: &F,
) -> Result<Vec<T>>
where
    T: Entity,
    F: EntityFactory<T> + ?Sized,
{
    Accumulator::new().accumulate(conn, request, factory).await
}

fn records_of<'a>(page: &'a Value, request: &CollectionRequest) -> Result<&'a Vec<Value>> {
    lookup(page, &request.records_key)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::record_extraction(&request.path, &request.records_key))
}
