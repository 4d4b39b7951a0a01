//! Pagination types
//!
//! Page-size policy, paginator configuration, cursor state and the summary
//! returned when a walk finishes.

use serde_json::Value;
use std::fmt;

/// Largest page the API will serve
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Page-size policy
// ============================================================================

/// Page size and result limit derived from a caller's limit
///
/// A limit below [`MAX_PAGE_SIZE`] is fetched in a single page of exactly
/// that size. Anything else is fetched in full pages; a non-zero limit still
/// caps the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Records to request per page
    pub page_size: u32,
    /// Result limit (0 = unbounded)
    pub limit: usize,
}

impl PageRequest {
    /// Apply the page-size policy to a caller limit
    pub fn for_limit(limit: usize) -> Self {
        let page_size = if limit > 0 && limit < MAX_PAGE_SIZE as usize {
            limit as u32
        } else {
            MAX_PAGE_SIZE
        };
        Self { page_size, limit }
    }

    /// Is the result count capped?
    pub fn is_bounded(&self) -> bool {
        self.limit > 0
    }

    /// Has `count` reached the cap?
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        self.is_bounded() && count >= self.limit
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// How the position of the next page is expressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStrategy {
    /// `?offset=N`, advanced by the page size
    Offset {
        /// Query parameter name for the offset
        offset_param: String,
    },
    /// `?cursor=TOKEN`, where the token comes from the previous page
    Cursor {
        /// Query parameter name for the cursor
        cursor_param: String,
        /// Dot path of the next cursor inside a page
        cursor_path: String,
    },
}

impl Default for PageStrategy {
    fn default() -> Self {
        Self::offset("offset")
    }
}

impl PageStrategy {
    /// Offset pagination using `offset_param`
    pub fn offset(offset_param: impl Into<String>) -> Self {
        Self::Offset {
            offset_param: offset_param.into(),
        }
    }

    /// Cursor pagination using `cursor_param` and the token at `cursor_path`
    pub fn cursor(cursor_param: impl Into<String>, cursor_path: impl Into<String>) -> Self {
        Self::Cursor {
            cursor_param: cursor_param.into(),
            cursor_path: cursor_path.into(),
        }
    }
}

/// Configuration for a [`Paginator`](super::Paginator)
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Offset or cursor positioning
    pub strategy: PageStrategy,
    /// Query parameter name for the page size
    pub limit_param: String,
    /// Records per page (1..=[`MAX_PAGE_SIZE`])
    pub page_size: u32,
    /// Dot path of the record array, used to detect empty and short pages
    pub records_path: Option<String>,
    /// Dot path of the total record count reported by the server
    pub total_path: Option<String>,
    /// Stop after this many requests
    pub max_pages: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            strategy: PageStrategy::default(),
            limit_param: "limit".to_string(),
            page_size: MAX_PAGE_SIZE,
            records_path: None,
            total_path: Some("_total".to_string()),
            max_pages: None,
        }
    }
}

impl PaginationConfig {
    /// Create a new config with the API's defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the positioning strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: PageStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the page size, clamped to 1..=[`MAX_PAGE_SIZE`]
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Set the page size query parameter name
    #[must_use]
    pub fn with_limit_param(mut self, param: impl Into<String>) -> Self {
        self.limit_param = param.into();
        self
    }

    /// Count records at `path` to detect the end of the collection
    #[must_use]
    pub fn with_records_path(mut self, path: impl Into<String>) -> Self {
        self.records_path = Some(path.into());
        self
    }

    /// Read the total record count from `path`, or ignore totals with `None`
    #[must_use]
    pub fn with_total_path(mut self, path: Option<String>) -> Self {
        self.total_path = path;
        self
    }

    /// Cap the number of page requests. The first page is always fetched,
    /// so a ceiling of 0 is treated as 1.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages.max(1));
        self
    }
}

// ============================================================================
// State
// ============================================================================

/// Where the next page begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// Cursor pagination before the first token is known
    Start,
    /// Record offset
    Offset(u64),
    /// Opaque token handed out by the server
    Token(String),
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCursor::Start => f.write_str("start"),
            PageCursor::Offset(offset) => write!(f, "offset {offset}"),
            PageCursor::Token(token) => write!(f, "cursor {token}"),
        }
    }
}

/// Why pagination ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The first page was a 404
    NotFound,
    /// The continuation asked to stop
    ContinuationDeclined,
    /// A page held no records
    Exhausted,
    /// A page held fewer records than requested
    ShortPage,
    /// The next offset would pass the reported total
    TotalReached,
    /// The configured page ceiling was hit
    MaxPages,
    /// The server stopped handing out new cursors
    CursorExhausted,
    /// The next offset does not fit in a `u64`
    OffsetOverflow,
}

/// Result of a completed pagination walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSummary {
    /// Number of requests issued
    pub pages: usize,
    /// Why the walk ended
    pub stop: StopReason,
    /// Position the walk ended at
    pub cursor: PageCursor,
}

// ============================================================================
// Helpers
// ============================================================================

/// Look up a dot-separated path (`"a.b.c"`, optional `$.` prefix) in a JSON value
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() {
        return Some(value);
    }

    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(part)?,
            _ => return None,
        }
    }
    Some(current)
}
