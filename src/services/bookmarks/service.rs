//! Bookmarks service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::context::RequestContext;
use crate::errors::SlackResult;
use crate::transport::{FormRequest, HttpTransport};
use crate::types::SlackResponse;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Trait for bookmarks service operations
#[async_trait]
pub trait BookmarksServiceTrait: Send + Sync {
    /// Add a bookmark to a channel
    async fn add(&self, options: BookmarkOptions) -> SlackResult<Bookmark> {
        self.add_with_context(options, &RequestContext::background())
            .await
    }

    /// Add a bookmark to a channel within a cancellable context
    async fn add_with_context(
        &self,
        options: BookmarkOptions,
        ctx: &RequestContext,
    ) -> SlackResult<Bookmark>;

    /// Edit a bookmark
    async fn edit(&self, request: EditBookmarkRequest) -> SlackResult<Bookmark> {
        self.edit_with_context(request, &RequestContext::background())
            .await
    }

    /// Edit a bookmark within a cancellable context
    async fn edit_with_context(
        &self,
        request: EditBookmarkRequest,
        ctx: &RequestContext,
    ) -> SlackResult<Bookmark>;

    /// List bookmarks in a channel
    async fn list(&self, request: ListBookmarksRequest) -> SlackResult<Vec<Bookmark>> {
        self.list_with_context(request, &RequestContext::background())
            .await
    }

    /// List bookmarks in a channel within a cancellable context
    async fn list_with_context(
        &self,
        request: ListBookmarksRequest,
        ctx: &RequestContext,
    ) -> SlackResult<Vec<Bookmark>>;

    /// Remove a bookmark
    async fn remove(&self, request: RemoveBookmarkRequest) -> SlackResult<()> {
        self.remove_with_context(request, &RequestContext::background())
            .await
    }

    /// Remove a bookmark within a cancellable context
    async fn remove_with_context(
        &self,
        request: RemoveBookmarkRequest,
        ctx: &RequestContext,
    ) -> SlackResult<()>;
}

/// Bookmarks service implementation
#[derive(Clone)]
pub struct BookmarksService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
}

impl BookmarksService {
    /// Create a new bookmarks service
    pub fn new(transport: Arc<dyn HttpTransport>, auth: AuthManager, base_url: String) -> Self {
        Self {
            transport,
            auth,
            base_url,
        }
    }

    fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), method)
    }

    /// POST `fields` to `method` and unwrap the envelope into `T`
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        fields: Vec<(&'static str, String)>,
        ctx: &RequestContext,
    ) -> SlackResult<T> {
        let headers = self.auth.get_primary_headers()?;
        let request = FormRequest::post(self.build_url(method), headers).fields(fields);

        let body = self.transport.send_form(request, ctx).await?;
        SlackResponse::decode::<T>(&body)
    }
}

#[async_trait]
impl BookmarksServiceTrait for BookmarksService {
    #[instrument(
        skip(self, options, ctx),
        fields(channel = %options.channel_id, title = %options.title, bookmark_type = %options.bookmark_type)
    )]
    async fn add_with_context(
        &self,
        options: BookmarkOptions,
        ctx: &RequestContext,
    ) -> SlackResult<Bookmark> {
        options.validate()?;

        let response: AddBookmarkResponse = self
            .call("bookmarks.add", options.to_form_fields(), ctx)
            .await?;

        debug!(bookmark_id = %response.bookmark.id, "Bookmark created");
        Ok(response.bookmark)
    }

    #[instrument(skip(self, request, ctx), fields(bookmark_id = %request.bookmark_id, channel = %request.channel_id))]
    async fn edit_with_context(
        &self,
        request: EditBookmarkRequest,
        ctx: &RequestContext,
    ) -> SlackResult<Bookmark> {
        request.validate()?;

        let response: EditBookmarkResponse = self
            .call("bookmarks.edit", request.to_form_fields(), ctx)
            .await?;
        Ok(response.bookmark)
    }

    #[instrument(skip(self, request, ctx), fields(channel = %request.channel_id))]
    async fn list_with_context(
        &self,
        request: ListBookmarksRequest,
        ctx: &RequestContext,
    ) -> SlackResult<Vec<Bookmark>> {
        let response: ListBookmarksResponse = self
            .call("bookmarks.list", request.to_form_fields(), ctx)
            .await?;

        debug!(count = response.bookmarks.len(), "Listed bookmarks");
        Ok(response.bookmarks)
    }

    #[instrument(skip(self, request, ctx), fields(bookmark_id = %request.bookmark_id, channel = %request.channel_id))]
    async fn remove_with_context(
        &self,
        request: RemoveBookmarkRequest,
        ctx: &RequestContext,
    ) -> SlackResult<()> {
        request.validate()?;

        let _: RemoveBookmarkResponse = self
            .call("bookmarks.remove", request.to_form_fields(), ctx)
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for BookmarksService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarksService")
            .field("base_url", &self.base_url)
            .finish()
    }
}
