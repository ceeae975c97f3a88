//! Page token and the request/response pagination traits.

use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Page Token
// ============================================================================

/// Opaque, server-issued resume position for a paged listing.
///
/// An empty token means "start" on the request side and "no more pages" on
/// the response side. Pagekit never looks inside a token; it only travels
/// from a response into the next request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    /// Create a token from a server-issued value
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The empty token ("first page" / "no more pages")
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Create a token from an optional value, normalizing `Some("")` to empty
    pub fn from_option(token: Option<String>) -> Self {
        Self(token.none_if_empty().unwrap_or_default())
    }

    /// Check if this is the empty token
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for PageToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for PageToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl AsRef<str> for PageToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Request Seam
// ============================================================================

/// Request side of the pagination contract.
///
/// A pageable request is immutable by convention apart from its page-token
/// field, which the pager overwrites in place to advance.
pub trait PageableRequest {
    /// The resume token currently set on this request
    fn page_token(&self) -> &PageToken;

    /// Overwrite the resume token
    fn set_page_token(&mut self, token: PageToken);
}

// ============================================================================
// Response Seam
// ============================================================================

/// Response side of the pagination contract.
///
/// A page carries an ordered run of result items plus the token for the
/// page after it. An absent or null item list on the wire decodes as an
/// empty page, never an error.
pub trait Page {
    /// The domain item type listed by the endpoint
    type Item;

    /// Token for the following page; empty means end of results
    fn next_page_token(&self) -> &PageToken;

    /// The result items of this page, in server order
    fn items(&self) -> &[Self::Item];

    /// Consume the page, returning its items
    fn into_items(self) -> Vec<Self::Item>;

    /// Check whether another page follows this one
    fn has_next_page(&self) -> bool {
        !self.next_page_token().is_empty()
    }
}
