//! Pagination seams
//!
//! Defines the page-token value type and the two traits a list-style API
//! surface implements to become pageable: [`PageableRequest`] for the
//! request side and [`Page`] for the response side.
//!
//! # Overview
//!
//! Token pagination is a two-field contract. A request carries an opaque
//! token naming the position to resume from (empty means "first page"); a
//! response carries the token for the page after it (empty means
//! "end of results"). Everything else on either value is opaque to the
//! pager.

mod types;

pub use types::{Page, PageToken, PageableRequest};

#[cfg(test)]
mod tests;
