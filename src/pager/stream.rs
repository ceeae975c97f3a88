//! Asynchronous paged stream.

use crate::error::Result;
use crate::page::{Page, PageableRequest};
use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};
use std::fmt;
use tracing::debug;

// ============================================================================
// List Method Seam
// ============================================================================

/// Asynchronous remote call for a list endpoint.
///
/// One implementation call is one network round trip. Pagekit treats the
/// method as safely callable repeatedly and never retries it; whatever
/// error it returns reaches the stream consumer unchanged.
#[async_trait]
pub trait ListMethod<R, P> {
    /// Fetch the page named by the request's current page token
    async fn call(&mut self, request: &R) -> Result<P>;
}

// ============================================================================
// Async List Pager
// ============================================================================

/// Asynchronous pager over a token-paginated list method.
///
/// Same contract as [`crate::pager::ListPager`], with the fetch suspended
/// on the task that polls: no background prefetching, no page cache, one
/// consumer, single forward pass.
pub struct AsyncListPager<M, R, P> {
    method: M,
    request: R,
    response: P,
    started: bool,
    finished: bool,
}

impl<M, R, P> AsyncListPager<M, R, P>
where
    M: ListMethod<R, P> + Send,
    R: PageableRequest + Send + Sync,
    P: Page + Clone + Send,
{
    /// Create a pager from a remote call, its request, and the
    /// already-fetched first response. Performs no fetch and no validation.
    pub fn new(method: M, request: R, response: P) -> Self {
        Self {
            method,
            request,
            response,
            started: false,
            finished: false,
        }
    }

    /// The most recently fetched response; changes as pagination advances
    pub fn response(&self) -> &P {
        &self.response
    }

    /// The held request, with the token of the page currently in flight
    pub fn request(&self) -> &R {
        &self.request
    }

    /// Advance by one page.
    ///
    /// Semantics match [`crate::pager::ListPager::next_page`]: the first
    /// call yields the construction response, `Ok(None)` is terminal, and
    /// a method error is propagated unchanged and ends further production.
    pub async fn next_page(&mut self) -> Result<Option<P>> {
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

        match self.method.call(&self.request).await {
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

    /// Stream whole pages.
    ///
    /// Consumes the pager; each page is fetched when the consumer polls
    /// for it.
    pub fn pages(self) -> impl Stream<Item = Result<P>> + Send
    where
        M: 'static,
        R: 'static,
        P: 'static,
    {
        stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?;
            Ok(page.map(|page| (page, pager)))
        })
    }

    /// Stream individual items, flattened across pages.
    ///
    /// Page order then within-page order; pages without items are skipped
    /// while still advancing pagination.
    pub fn items(self) -> impl Stream<Item = Result<P::Item>> + Send
    where
        M: 'static,
        R: 'static,
        P: 'static,
        P::Item: Send,
    {
        self.pages()
            .map_ok(|page| stream::iter(page.into_items().into_iter().map(Ok)))
            .try_flatten()
    }
}

impl<M, R, P> fmt::Debug for AsyncListPager<M, R, P>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsyncListPager<{:?}>", self.response)
    }
}
