//! List request/response envelope implementations.

use crate::error::{Error, Result};
use crate::page::{Page, PageToken, PageableRequest};
use crate::types::{JsonObject, JsonValue, OptionStringExt, StringMap};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// List Request
// ============================================================================

/// Generic request for a token-paginated list endpoint.
///
/// Immutable by convention apart from `page_token`, which the pager
/// overwrites in place to advance. All other fields are carried unchanged
/// across every page of a traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Resource collection being listed,
    /// e.g. `projects/p1/locations/us-central1/instances`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Maximum number of items the server should return per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Server-side filter expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Sort order for the listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Additional query parameters passed through to the endpoint
    #[serde(default, skip_serializing_if = "StringMap::is_empty")]
    pub params: StringMap,

    /// Resume token; empty requests the first page
    #[serde(default, skip_serializing_if = "PageToken::is_empty")]
    pub page_token: PageToken,
}

impl ListRequest {
    /// Create a request for the first page of a collection
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }

    /// Set the maximum number of items per page
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set a server-side filter expression
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Add an extra query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Render the request as query parameters, skipping empty fields.
    ///
    /// The parent is path material, not a query parameter, so it is not
    /// included here.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(size) = self.page_size {
            pairs.push(("page_size".to_string(), size.to_string()));
        }
        if let Some(filter) = self.filter.clone().none_if_empty() {
            pairs.push(("filter".to_string(), filter));
        }
        if let Some(order_by) = self.order_by.clone().none_if_empty() {
            pairs.push(("order_by".to_string(), order_by));
        }
        for (key, value) in &self.params {
            pairs.push((key.clone(), value.clone()));
        }
        if !self.page_token.is_empty() {
            pairs.push(("page_token".to_string(), self.page_token.as_str().to_string()));
        }
        pairs
    }
}

impl PageableRequest for ListRequest {
    fn page_token(&self) -> &PageToken {
        &self.page_token
    }

    fn set_page_token(&mut self, token: PageToken) {
        self.page_token = token;
    }
}

// ============================================================================
// List Page
// ============================================================================

/// Generic response envelope for one page of a list endpoint.
///
/// Decodes the common wire shape: an item array (named `items`,
/// `resources`, or `data` depending on the API), a `next_page_token`, and
/// arbitrary other metadata fields, which are retained verbatim and
/// readable through [`ListPage::field`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListPage<T> {
    /// Result items in server order. Absent or null on the wire decodes as
    /// an empty page.
    #[serde(
        default,
        alias = "resources",
        alias = "data",
        deserialize_with = "items_or_empty"
    )]
    pub items: Vec<T>,

    /// Token for the following page; empty or absent means end of results
    #[serde(default, alias = "nextPageToken")]
    pub next_page_token: PageToken,

    /// All other response fields, e.g. total counts or unreachable
    /// locations
    #[serde(flatten)]
    pub metadata: JsonObject,
}

impl<T> ListPage<T> {
    /// Create a page from items and the token that follows it
    pub fn new(items: Vec<T>, next_page_token: PageToken) -> Self {
        Self {
            items,
            next_page_token,
            metadata: JsonObject::new(),
        }
    }

    /// Attach a metadata field
    #[must_use]
    pub fn with_metadata(mut self, name: impl Into<String>, value: JsonValue) -> Self {
        self.metadata.insert(name.into(), value);
        self
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read a metadata field by name.
    ///
    /// Fails with [`Error::FieldNotFound`] when the current page does not
    /// carry the field.
    pub fn field(&self, name: &str) -> Result<&JsonValue> {
        self.metadata
            .get(name)
            .ok_or_else(|| Error::field_not_found(name))
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page_token: PageToken::empty(),
            metadata: JsonObject::new(),
        }
    }
}

impl<T> Page for ListPage<T> {
    type Item = T;

    fn next_page_token(&self) -> &PageToken {
        &self.next_page_token
    }

    fn items(&self) -> &[T] {
        &self.items
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Decode an item array, treating JSON null as an empty page
fn items_or_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}
