//! Paged iterators and streams
//!
//! Wraps a list-style remote call, its request, and an already-fetched
//! first page, and presents the possibly-multi-page result set as a lazy
//! sequence of pages or a flattened lazy sequence of items.
//!
//! # Overview
//!
//! A pager is constructed *after* the caller has fetched the first page, so
//! construction never touches the network. Advancing copies the previous
//! response's next-page token into the held request, invokes the remote
//! call once, and replaces the held response wholesale; only the most
//! recent response is retained. Traversal is a single forward pass with a
//! single consumer; a drained pager stays drained, and a fresh traversal
//! needs a fresh pager.
//!
//! Remote-call failures propagate unchanged at the pull that triggered the
//! fetch, after which the pager produces nothing further. There is no
//! built-in page limit: a server that keeps issuing non-empty tokens keeps
//! the traversal alive, so bound it at the consumer (`take`) if the source
//! is untrusted.

mod iter;
mod stream;

pub use iter::{IntoItems, Items, ListPager, Pages};
pub use stream::{AsyncListPager, ListMethod};
