//! Accumulation module
//!
//! Turns paginated collection endpoints into bounded entity lists.
//!
//! # Overview
//!
//! - [`Accumulator`] drives a [`Paginator`](crate::pagination::Paginator),
//!   extracts each page's records and builds entities through an
//!   [`EntityFactory`], honouring the result limit and de-duplication policy
//! - [`fetch_one`] covers the "get by identifier" shape: one request, entity
//!   or `None`
//! - [`identifier_segment`] rejects blank identifiers before any request is
//!   made

mod accumulator;
mod single;
mod types;

pub use accumulator::{accumulate, Accumulator};
pub use single::{encode_segment, fetch_one, identifier_segment, validate_identifier};
pub use types::{CollectionRequest, Dedup, Entity, EntityFactory, FromRecord, RecordFactory};
