//! Shared collection browsing, search and interaction.

use crate::api::{paths, CollectionKind, SortMode};
use crate::dispatcher::Dispatcher;
use crate::models::{
    CommentRequest, RemoveCommentRequest, RowWindow, Session, SharedActionRequest, SharedComment,
    SharedDetails, SharedFileRequest, SharedIdRequest, SharedItem, SharedTag,
};
use crate::outcome::Outcome;

/// Operations on shared views, blocks and moreblocks.
///
/// Every method takes the [`CollectionKind`] it addresses; the three kinds
/// share request and response shapes.
#[derive(Debug, Clone)]
pub struct SharedCollectionsApi {
    dispatcher: Dispatcher,
}

impl SharedCollectionsApi {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// List shared items of `kind` in `sort` order.
    pub async fn list(
        &self,
        kind: CollectionKind,
        sort: SortMode,
        window: &RowWindow,
    ) -> Outcome<Vec<SharedItem>> {
        self.dispatcher
            .post_json(&paths::listing(kind, sort), window)
            .await
    }

    /// Most recently shared items.
    pub async fn recent(
        &self,
        kind: CollectionKind,
        items_to_load: u32,
        index: u32,
    ) -> Outcome<Vec<SharedItem>> {
        self.list(kind, SortMode::Recent, &RowWindow::new(items_to_load, index))
            .await
    }

    /// Items with the most likes.
    pub async fn most_liked(
        &self,
        kind: CollectionKind,
        items_to_load: u32,
        index: u32,
    ) -> Outcome<Vec<SharedItem>> {
        self.list(kind, SortMode::MostLiked, &RowWindow::new(items_to_load, index))
            .await
    }

    /// Items with the most downloads.
    pub async fn most_downloaded(
        &self,
        kind: CollectionKind,
        items_to_load: u32,
        index: u32,
    ) -> Outcome<Vec<SharedItem>> {
        self.list(
            kind,
            SortMode::MostDownloaded,
            &RowWindow::new(items_to_load, index),
        )
        .await
    }

    /// Items carrying `tag`.
    pub async fn search_by_tag(
        &self,
        kind: CollectionKind,
        items_to_load: u32,
        index: u32,
        tag: &str,
    ) -> Outcome<Vec<SharedItem>> {
        let window = RowWindow::new(items_to_load, index).with_tag(tag);
        self.dispatcher
            .post_json(&paths::tag_search(kind), &window)
            .await
    }

    /// Detail record of one item.
    pub async fn details(&self, kind: CollectionKind, shared_id: i64) -> Outcome<SharedDetails> {
        self.dispatcher
            .post_json(&paths::details(kind), &SharedIdRequest { shared_id })
            .await
    }

    /// Comments posted on one item.
    pub async fn comments(
        &self,
        kind: CollectionKind,
        shared_id: i64,
    ) -> Outcome<Vec<SharedComment>> {
        self.dispatcher
            .post_json(&paths::comments(kind), &SharedIdRequest { shared_id })
            .await
    }

    /// Tags attached to one item.
    pub async fn tags(&self, kind: CollectionKind, shared_id: i64) -> Outcome<Vec<SharedTag>> {
        self.dispatcher
            .post_json(&paths::tags(kind), &SharedIdRequest { shared_id })
            .await
    }

    /// Every tag known to the service.
    pub async fn all_tags(&self) -> Outcome<Vec<SharedTag>> {
        self.dispatcher
            .post_json(paths::ALL_TAGS, &serde_json::Map::new())
            .await
    }

    /// Raw content of an item's file.
    pub async fn file(
        &self,
        kind: CollectionKind,
        shared_id: i64,
        file_name: &str,
    ) -> Outcome<Vec<u8>> {
        let request = SharedFileRequest {
            shared_id,
            file_name: file_name.to_string(),
        };
        self.dispatcher.post_bytes(&paths::file(kind), &request).await
    }

    /// Post a comment; resolves to the service's acknowledgement.
    pub async fn add_comment(
        &self,
        kind: CollectionKind,
        session: &Session,
        shared_id: i64,
        comment: &str,
    ) -> Outcome<String> {
        let request = CommentRequest {
            session: session.clone(),
            shared_id,
            comment: comment.to_string(),
        };
        self.dispatcher
            .post_text(&paths::add_comment(kind), &request)
            .await
    }

    /// Remove a comment.
    pub async fn remove_comment(
        &self,
        kind: CollectionKind,
        session: &Session,
        shared_id: i64,
        comment_id: i64,
    ) -> Outcome<String> {
        let request = RemoveCommentRequest {
            session: session.clone(),
            shared_id,
            comment_id,
        };
        self.dispatcher
            .post_text(&paths::remove_comment(kind), &request)
            .await
    }

    /// Like an item.
    pub async fn like(
        &self,
        kind: CollectionKind,
        session: &Session,
        shared_id: i64,
    ) -> Outcome<String> {
        let request = SharedActionRequest {
            session: session.clone(),
            shared_id,
        };
        self.dispatcher.post_text(&paths::like(kind), &request).await
    }

    /// Increment an item's download counter.
    pub async fn add_download(&self, kind: CollectionKind, shared_id: i64) -> Outcome<String> {
        self.dispatcher
            .post_text(&paths::add_download(kind), &SharedIdRequest { shared_id })
            .await
    }

    /// Upload a file to share. The bytes are sent as-is; the session and
    /// file name travel as query parameters.
    pub async fn upload_file(
        &self,
        kind: CollectionKind,
        session: &Session,
        file_name: &str,
        content: Vec<u8>,
    ) -> Outcome<String> {
        let query = [
            ("session_id", session.session_id.as_str()),
            ("login_id", session.login_id.as_str()),
            ("file_name", file_name),
        ];
        self.dispatcher
            .post_raw(&paths::upload(kind), &query, content)
            .await
    }

    /// Remove one of the signed-in user's shared items.
    pub async fn remove(
        &self,
        kind: CollectionKind,
        session: &Session,
        shared_id: i64,
    ) -> Outcome<String> {
        let request = SharedActionRequest {
            session: session.clone(),
            shared_id,
        };
        self.dispatcher.post_text(&paths::remove(kind), &request).await
    }
}
