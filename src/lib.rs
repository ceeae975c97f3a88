//! # Pagekit
//!
//! A minimal, Rust-native toolkit for consuming token-paginated list APIs.
//!
//! ## Features
//!
//! - **Token pagination**: the opaque page-token contract used by most
//!   cloud list endpoints (empty token means "first page" / "no more pages")
//! - **Lazy iteration**: pages are fetched one at a time, only when the
//!   consumer asks for the next element
//! - **Two surfaces**: a blocking [`pager::ListPager`] iterator and an
//!   [`pager::AsyncListPager`] stream with identical semantics
//! - **Bring your own transport**: the remote call is a caller-supplied
//!   function; pagekit never opens a connection itself
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{ListPage, ListPager, ListRequest, Result};
//!
//! fn main() -> Result<()> {
//!     let request = ListRequest::new("projects/demo/locations/us/instances");
//!
//!     // The first page is fetched by the caller, not by the pager.
//!     let first: ListPage<Instance> = client.list(&request)?;
//!
//!     let mut pager = ListPager::new(|req| client.list(req), request, first);
//!     for item in pager.items() {
//!         println!("{:?}", item?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Pager Interface                          │
//! │  next_page() → Result<Option<Page>>    response() → &Page       │
//! │  pages() → Iterator/Stream      items() → flattened items       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴───────────┬─────────────────────┐
//! │     Page      │          Model           │        Error        │
//! ├───────────────┼──────────────────────────┼─────────────────────┤
//! │ PageToken     │ ListRequest              │ Transport           │
//! │ Pageable-     │ ListPage<T>              │ HttpStatus/Timeout  │
//! │   Request     │ response metadata        │ FieldNotFound       │
//! │ Page trait    │ query rendering          │ is_retryable()      │
//! └───────────────┴──────────────────────────┴─────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for pagekit
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination seams: page tokens and the request/response traits
pub mod page;

/// Generic request/response envelopes for list endpoints
pub mod model;

/// Paged iterators and streams
pub mod pager;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use model::{ListPage, ListRequest};
pub use page::{Page, PageToken, PageableRequest};
pub use pager::{AsyncListPager, ListMethod, ListPager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
