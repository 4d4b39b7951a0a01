//! Pagination module
//!
//! Supports: Offset, Cursor
//!
//! # Overview
//!
//! The [`Paginator`] walks a collection endpoint one page at a time and hands
//! each page to a caller-supplied continuation, which decides whether the
//! next page is wanted. [`PageRequest`] holds the page-size policy shared by
//! every collection endpoint.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{
    lookup, PageCursor, PageRequest, PageStrategy, PaginationConfig, PaginationSummary,
    StopReason, MAX_PAGE_SIZE,
};
