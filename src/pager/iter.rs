//! Blocking paged iterator.

use crate::error::Result;
use crate::page::{Page, PageableRequest};
use std::fmt;
use tracing::debug;

// ============================================================================
// List Pager
// ============================================================================

/// Blocking pager over a token-paginated list method.
///
/// Owns the remote call function, one request value (whose token field it
/// mutates in place to advance), and the most recently fetched response.
/// Prior pages are not cached.
///
/// `method` is invoked once per page beyond the first; the first page is
/// the one the caller already fetched and passed to [`ListPager::new`].
pub struct ListPager<R, P, F> {
    method: F,
    request: R,
    response: P,
    started: bool,
    finished: bool,
}

impl<R, P, F> ListPager<R, P, F>
where
    R: PageableRequest,
    P: Page + Clone,
    F: FnMut(&R) -> Result<P>,
{
    /// Create a pager from a remote call, its request, and the
    /// already-fetched first response.
    ///
    /// Takes ownership of the request, so later caller-side mutations of
    /// the original value cannot affect the traversal. No validation is
    /// performed and no fetch happens here: a response that does not
    /// correspond to the request yields undefined page ordering, not a
    /// crash.
    pub fn new(method: F, request: R, response: P) -> Self {
        Self {
            method,
            request,
            response,
            started: false,
            finished: false,
        }
    }

    /// The most recently fetched response.
    ///
    /// Response-level metadata is read through here. The value changes as
    /// pagination advances, so don't hold on to reads across an iteration
    /// step expecting first-page values.
    pub fn response(&self) -> &P {
        &self.response
    }

    /// The held request, with the token of the page currently in flight
    pub fn request(&self) -> &R {
        &self.request
    }

    /// Advance by one page.
    ///
    /// The first call yields the response the pager was constructed with;
    /// each later call fetches the page named by the previous response's
    /// next-page token. `Ok(None)` means the traversal is complete and
    /// stays complete. A remote-call error is returned unchanged and ends
    /// further production.
    pub fn next_page(&mut self) -> Result<Option<P>> {
        if self.finished {
            return Ok(None);
        }
        if !self.started {
            self.started = true;
            return Ok(Some(self.response.clone()));
        }
        if self.response.next_page_token().is_empty() {
            self.finished = true;
            return Ok(None);
        }

        let token = self.response.next_page_token().clone();
        debug!(token = %token, "fetching next page");
        self.request.set_page_token(token);

        match (self.method)(&self.request) {
            Ok(page) => {
                self.response = page;
                Ok(Some(self.response.clone()))
            }
            Err(e) => {
                self.finished = true;
                Err(e)
            }
        }
    }

    /// Iterate over whole pages
    pub fn pages(&mut self) -> Pages<'_, R, P, F> {
        Pages { pager: self }
    }

    /// Iterate over individual items, flattened across pages
    pub fn items(&mut self) -> Items<'_, R, P, F> {
        Items {
            pager: self,
            buffer: Vec::new().into_iter(),
        }
    }

    /// Consume the pager, iterating over individual items
    pub fn into_items(self) -> IntoItems<R, P, F> {
        IntoItems {
            pager: self,
            buffer: Vec::new().into_iter(),
        }
    }
}

impl<R, P, F> fmt::Debug for ListPager<R, P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListPager<{:?}>", self.response)
    }
}

impl<R, P, F> IntoIterator for ListPager<R, P, F>
where
    R: PageableRequest,
    P: Page + Clone,
    F: FnMut(&R) -> Result<P>,
{
    type Item = Result<P::Item>;
    type IntoIter = IntoItems<R, P, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_items()
    }
}

// ============================================================================
// Page Iteration
// ============================================================================

/// Iterator over whole pages, borrowed from a [`ListPager`].
///
/// Each yielded page is a copy of the pager's current response, so the
/// pager keeps answering [`ListPager::response`] for the latest page.
pub struct Pages<'a, R, P, F> {
    pager: &'a mut ListPager<R, P, F>,
}

impl<R, P, F> Iterator for Pages<'_, R, P, F>
where
    R: PageableRequest,
    P: Page + Clone,
    F: FnMut(&R) -> Result<P>,
{
    type Item = Result<P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pager.next_page().transpose()
    }
}

// ============================================================================
// Item Iteration
// ============================================================================

/// Iterator over individual items, borrowed from a [`ListPager`].
///
/// Yields page order then within-page order; pages without items are
/// skipped while still advancing pagination.
pub struct Items<'a, R, P, F>
where
    P: Page,
{
    pager: &'a mut ListPager<R, P, F>,
    buffer: std::vec::IntoIter<P::Item>,
}

impl<R, P, F> Iterator for Items<'_, R, P, F>
where
    R: PageableRequest,
    P: Page + Clone,
    F: FnMut(&R) -> Result<P>,
{
    type Item = Result<P::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            match self.pager.next_page() {
                Ok(Some(page)) => self.buffer = page.into_items().into_iter(),
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Owning variant of [`Items`], produced by [`ListPager::into_items`]
pub struct IntoItems<R, P, F>
where
    P: Page,
{
    pager: ListPager<R, P, F>,
    buffer: std::vec::IntoIter<P::Item>,
}

impl<R, P, F> Iterator for IntoItems<R, P, F>
where
    R: PageableRequest,
    P: Page + Clone,
    F: FnMut(&R) -> Result<P>,
{
    type Item = Result<P::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            match self.pager.next_page() {
                Ok(Some(page)) => self.buffer = page.into_items().into_iter(),
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
