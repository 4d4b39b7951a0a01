//! The page loop
//!
//! Requests are strictly sequential: page N+1 is only requested after the
//! continuation has seen page N and asked for more.

use super::types::{
    lookup, PageCursor, PageStrategy, PaginationConfig, PaginationSummary, StopReason,
};
use crate::error::{Error, Result};
use crate::http::{Fetched, Transport};
use crate::types::StringMap;
use serde_json::Value;
use tracing::{debug, warn};

/// Walks a paginated collection endpoint
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    /// Create a paginator with the given configuration
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Fetch pages of `path` until something says stop.
    ///
    /// `params` are sent with every request. A starting offset (or cursor)
    /// may be supplied in `params` under the strategy's parameter name; the
    /// page size parameter is always set from the configuration.
    ///
    /// `continuation` sees each page and returns `true` to ask for the next
    /// one. Pagination also ends on an empty or short page (when
    /// `records_path` is configured), when the reported total is reached,
    /// when the server stops handing out cursors, or at `max_pages`. A
    /// continuation that always returns `true` against a source that never
    /// runs dry is a caller bug. The short-page check assumes the server
    /// honours the requested page size.
    ///
    /// A 404 on the first page ends the walk with [`StopReason::NotFound`]
    /// and no error; a 404 on any later page is an error.
    pub async fn paginate<F>(
        &self,
        transport: &dyn Transport,
        path: &str,
        params: &StringMap,
        mut continuation: F,
    ) -> Result<PaginationSummary>
    where
        F: FnMut(&Value) -> Result<bool>,
    {
        let page_size = self.config.page_size;
        let mut cursor = self.starting_cursor(params);
        let mut pages = 0;

        loop {
            let query = self.page_params(params, &cursor);
            let fetched = transport.get(path, &query).await?;
            pages += 1;

            let page = match fetched {
                Fetched::Found(page) => page,
                Fetched::NotFound if pages == 1 => {
                    debug!("{path}: first page not found");
                    return Ok(PaginationSummary {
                        pages,
                        stop: StopReason::NotFound,
                        cursor,
                    });
                }
                Fetched::NotFound => {
                    return Err(Error::UnexpectedNotFound {
                        path: path.to_string(),
                        page: pages,
                    })
                }
            };

            let stop = |reason: StopReason, cursor: PageCursor| {
                debug!("{path}: stopped after {pages} page(s) at {cursor}: {reason:?}");
                Ok(PaginationSummary {
                    pages,
                    stop: reason,
                    cursor,
                })
            };

            if !continuation(&page)? {
                return stop(StopReason::ContinuationDeclined, cursor);
            }

            if let Some(count) = self.record_count(&page) {
                if count == 0 {
                    return stop(StopReason::Exhausted, cursor);
                }
                if count < page_size as usize {
                    return stop(StopReason::ShortPage, cursor);
                }
            }

            let next = match self.advance(&page, &cursor) {
                Ok(next) => next,
                Err(reason) => return stop(reason, cursor),
            };

            if self.config.max_pages.is_some_and(|max| pages >= max) {
                return stop(StopReason::MaxPages, cursor);
            }

            debug!("{path}: page {pages} consumed, continuing at {next}");
            cursor = next;
        }
    }

    /// Position of the page after `page`, or why there is none
    fn advance(
        &self,
        page: &Value,
        cursor: &PageCursor,
    ) -> std::result::Result<PageCursor, StopReason> {
        match &self.config.strategy {
            PageStrategy::Offset { .. } => {
                let offset = match cursor {
                    PageCursor::Offset(offset) => *offset,
                    _ => 0,
                };
                let next = offset
                    .checked_add(u64::from(self.config.page_size))
                    .ok_or(StopReason::OffsetOverflow)?;
                if self.total(page).is_some_and(|total| next >= total) {
                    return Err(StopReason::TotalReached);
                }
                Ok(PageCursor::Offset(next))
            }
            PageStrategy::Cursor { cursor_path, .. } => {
                let token = lookup(page, cursor_path)
                    .and_then(Value::as_str)
                    .filter(|token| !token.is_empty())
                    .ok_or(StopReason::CursorExhausted)?;

                if matches!(cursor, PageCursor::Token(current) if current == token) {
                    warn!("server repeated cursor {token}, stopping");
                    return Err(StopReason::CursorExhausted);
                }
                Ok(PageCursor::Token(token.to_string()))
            }
        }
    }

    fn starting_cursor(&self, params: &StringMap) -> PageCursor {
        match &self.config.strategy {
            PageStrategy::Offset { offset_param } => PageCursor::Offset(
                params
                    .get(offset_param)
                    .and_then(|offset| offset.parse().ok())
                    .unwrap_or(0),
            ),
            PageStrategy::Cursor { cursor_param, .. } => params
                .get(cursor_param)
                .filter(|token| !token.is_empty())
                .map_or(PageCursor::Start, |token| PageCursor::Token(token.clone())),
        }
    }

    fn page_params(&self, params: &StringMap, cursor: &PageCursor) -> StringMap {
        let mut query = params.clone();
        query.insert(
            self.config.limit_param.clone(),
            self.config.page_size.to_string(),
        );

        match (&self.config.strategy, cursor) {
            (PageStrategy::Offset { offset_param }, PageCursor::Offset(offset)) => {
                query.insert(offset_param.clone(), offset.to_string());
            }
            (PageStrategy::Cursor { cursor_param, .. }, PageCursor::Token(token)) => {
                query.insert(cursor_param.clone(), token.clone());
            }
            _ => {}
        }
        query
    }

    fn record_count(&self, page: &Value) -> Option<usize> {
        let path = self.config.records_path.as_deref()?;
        lookup(page, path).and_then(Value::as_array).map(Vec::len)
    }

    fn total(&self, page: &Value) -> Option<u64> {
        let path = self.config.total_path.as_deref()?;
        lookup(page, path).and_then(Value::as_u64)
    }
}
