//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Sketchware server.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{
    AuthorizeRequest, ExportedArtifact, RowWindow, SharedComment, SharedDetails, SharedTag,
};
use crate::{AuthorizedUser, CollectionKind, ExportedProject, SharedItem, SortMode};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Shared items per collection kind.
    pub items: HashMap<CollectionKind, Vec<SharedItem>>,

    /// Comments indexed by (kind, shared id).
    pub comments: HashMap<(CollectionKind, i64), Vec<SharedComment>>,

    /// Tags indexed by (kind, shared id).
    pub tags: HashMap<(CollectionKind, i64), Vec<SharedTag>>,

    /// Shared file contents indexed by (kind, shared id, file name).
    pub files: HashMap<(CollectionKind, i64, String), Vec<u8>>,

    /// Likes as (kind, shared id, login id).
    pub likes: HashSet<(CollectionKind, i64, String)>,

    /// Signed-in users indexed by session id.
    pub sessions: HashMap<String, AuthorizedUser>,

    /// Exported projects indexed by URL id.
    pub exports: HashMap<i64, ExportedProject>,

    /// Exported project files indexed by (URL id, file name).
    pub export_files: HashMap<(i64, String), Vec<u8>>,

    /// APK exports, owned by user id.
    pub exported_apks: Vec<ExportedArtifact>,

    /// Project exports, owned by user id.
    pub exported_projects: Vec<ExportedArtifact>,

    /// Value served by the version endpoint.
    pub min_version: u32,

    next_id: i64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            next_id: 1000,
            ..Self::default()
        }
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a shared item of `kind`.
    pub fn with_item(mut self, kind: CollectionKind, item: SharedItem) -> Self {
        self.items.entry(kind).or_default().push(item);
        self
    }

    /// Attach tags to a shared item.
    pub fn with_tags(mut self, kind: CollectionKind, shared_id: i64, tags: Vec<SharedTag>) -> Self {
        self.tags.insert((kind, shared_id), tags);
        self
    }

    /// Attach a file to a shared item.
    pub fn with_file(
        mut self,
        kind: CollectionKind,
        shared_id: i64,
        file_name: &str,
        content: Vec<u8>,
    ) -> Self {
        self.files
            .insert((kind, shared_id, file_name.to_string()), content);
        self
    }

    /// Add an exported project.
    pub fn with_export(mut self, project: ExportedProject) -> Self {
        self.exports.insert(project.url_id, project);
        self
    }

    pub fn with_min_version(mut self, version: u32) -> Self {
        self.min_version = version;
        self
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Look up a shared item.
    pub fn get_item(&self, kind: CollectionKind, shared_id: i64) -> Option<&SharedItem> {
        self.items
            .get(&kind)?
            .iter()
            .find(|i| i.shared_id == shared_id)
    }

    fn get_item_mut(&mut self, kind: CollectionKind, shared_id: i64) -> Option<&mut SharedItem> {
        self.items
            .get_mut(&kind)?
            .iter_mut()
            .find(|i| i.shared_id == shared_id)
    }

    /// Detail record for a shared item.
    pub fn details(&self, kind: CollectionKind, shared_id: i64) -> Option<SharedDetails> {
        self.get_item(kind, shared_id).map(|item| SharedDetails {
            shared_id: item.shared_id,
            view_name: item.view_name.clone(),
            block_name: item.block_name.clone(),
            user_alias: item.user_alias.clone(),
            uploader_id: item.uploader_id,
            short_description: item.short_description.clone(),
            long_description: item.long_description.clone(),
            recommend: item.recommend,
            download_count: item.download_count,
            like_count: item.like_count,
            comment_count: item.comment_count,
            file_sequence: item.file_sequence.clone(),
            images_sequence: item.images_sequence.clone(),
            register_date: item.register_date.clone(),
            update_date: item.update_date.clone(),
        })
    }

    /// List items of `kind` in `sort` order, restricted to `window`.
    pub fn list(&self, kind: CollectionKind, sort: SortMode, window: &RowWindow) -> Vec<SharedItem> {
        let mut items: Vec<&SharedItem> = self
            .items
            .get(&kind)
            .map(|items| items.iter().collect())
            .unwrap_or_default();

        if let Some(tag) = &window.tag {
            items.retain(|item| {
                self.tags
                    .get(&(kind, item.shared_id))
                    .is_some_and(|tags| tags.iter().any(|t| t.text.eq_ignore_ascii_case(tag)))
            });
        }

        match sort {
            SortMode::Recent => items.sort_by(|a, b| {
                b.register_date
                    .cmp(&a.register_date)
                    .then(b.shared_id.cmp(&a.shared_id))
            }),
            SortMode::MostLiked => items.sort_by(|a, b| b.like_count.cmp(&a.like_count)),
            SortMode::MostDownloaded => {
                items.sort_by(|a, b| b.download_count.cmp(&a.download_count))
            }
        }

        items
            .into_iter()
            .skip(window.row_start as usize)
            .take(window.row_unit as usize)
            .cloned()
            .collect()
    }

    /// Every distinct tag, ordered by id.
    pub fn all_tags(&self) -> Vec<SharedTag> {
        let mut tags: Vec<SharedTag> = self
            .tags
            .values()
            .flatten()
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        tags.sort_by_key(|t| t.id);
        tags
    }

    /// Register (or refresh) a user and open a session.
    pub fn authorize(&mut self, request: &AuthorizeRequest) -> AuthorizedUser {
        let existing = self
            .sessions
            .values()
            .find(|u| u.login_id == request.login_id)
            .cloned();

        let user = match existing {
            Some(user) => user,
            None => {
                let user_id = self.next_id();
                AuthorizedUser {
                    user_id,
                    login_id: request.login_id.clone(),
                    session_id: format!("session-{user_id}"),
                    alias: request
                        .login_id
                        .split('@')
                        .next()
                        .unwrap_or_default()
                        .to_string(),
                    sns_kind: request.sns_kind.clone(),
                    gcm_id: request.gcm_id.clone(),
                    device_id: request.device_id.clone(),
                    level: 1,
                    grade_level: 1,
                    grade_point: 0,
                    register_date: 1_600_000_000_000,
                    is_sns_user: request.is_sns_user,
                }
            }
        };

        self.sessions.insert(user.session_id.clone(), user.clone());
        user
    }

    /// Resolve a session to its user if the login matches.
    pub fn user_for(&self, session_id: &str, login_id: &str) -> Option<&AuthorizedUser> {
        self.sessions
            .get(session_id)
            .filter(|u| u.login_id == login_id)
    }

    /// Append a comment and bump the item's counter.
    pub fn add_comment(
        &mut self,
        kind: CollectionKind,
        shared_id: i64,
        user: &AuthorizedUser,
        comment: &str,
    ) -> Option<i64> {
        self.get_item(kind, shared_id)?;
        let comment_id = self.next_id();
        self.comments
            .entry((kind, shared_id))
            .or_default()
            .push(SharedComment {
                comment_id,
                shared_id,
                user_id: user.user_id,
                user_alias: user.alias.clone(),
                level: user.level,
                comment: comment.to_string(),
                register_date: "2020-01-01 00:00:00".to_string(),
            });
        if let Some(item) = self.get_item_mut(kind, shared_id) {
            item.comment_count += 1;
        }
        Some(comment_id)
    }

    /// Remove a comment written by `user`. Returns whether it existed.
    pub fn remove_comment(
        &mut self,
        kind: CollectionKind,
        shared_id: i64,
        comment_id: i64,
        user: &AuthorizedUser,
    ) -> bool {
        let Some(comments) = self.comments.get_mut(&(kind, shared_id)) else {
            return false;
        };
        let before = comments.len();
        comments.retain(|c| !(c.comment_id == comment_id && c.user_id == user.user_id));
        let removed = comments.len() < before;
        if removed {
            if let Some(item) = self.get_item_mut(kind, shared_id) {
                item.comment_count -= 1;
            }
        }
        removed
    }

    /// Record a like. Liking twice has no further effect.
    pub fn like(&mut self, kind: CollectionKind, shared_id: i64, login_id: &str) -> bool {
        if self.get_item(kind, shared_id).is_none() {
            return false;
        }
        if self
            .likes
            .insert((kind, shared_id, login_id.to_string()))
        {
            if let Some(item) = self.get_item_mut(kind, shared_id) {
                item.like_count += 1;
            }
        }
        true
    }

    pub fn add_download(&mut self, kind: CollectionKind, shared_id: i64) -> bool {
        match self.get_item_mut(kind, shared_id) {
            Some(item) => {
                item.download_count += 1;
                true
            }
            None => false,
        }
    }

    /// Publish an uploaded file as a new shared item. Returns its id.
    pub fn upload(
        &mut self,
        kind: CollectionKind,
        user: &AuthorizedUser,
        file_name: &str,
        content: Vec<u8>,
    ) -> i64 {
        let shared_id = self.next_id();
        let name = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);
        let mut item = SharedItem {
            shared_id,
            user_alias: user.alias.clone(),
            uploader_id: user.user_id,
            file_sequence: file_name.to_string(),
            register_date: "2099-01-01 00:00:00".to_string(),
            update_date: "2099-01-01 00:00:00".to_string(),
            ..SharedItem::default()
        };
        match kind {
            CollectionKind::View => item.view_name = Some(name.to_string()),
            CollectionKind::Block | CollectionKind::MoreBlock => {
                item.block_name = Some(name.to_string())
            }
        }
        self.items.entry(kind).or_default().push(item);
        self.files
            .insert((kind, shared_id, file_name.to_string()), content);
        shared_id
    }

    /// Remove a shared item uploaded by `user`. Returns whether it existed.
    pub fn remove_item(&mut self, kind: CollectionKind, shared_id: i64, user: &AuthorizedUser) -> bool {
        let Some(items) = self.items.get_mut(&kind) else {
            return false;
        };
        let before = items.len();
        items.retain(|i| !(i.shared_id == shared_id && i.uploader_id == user.user_id));
        let removed = items.len() < before;
        if removed {
            self.comments.remove(&(kind, shared_id));
            self.tags.remove(&(kind, shared_id));
            self.files.retain(|(k, id, _), _| !(*k == kind && *id == shared_id));
        }
        removed
    }

    /// Exports of `user_id` from `list`.
    pub fn exports_of(list: &[ExportedArtifact], user_id: i64) -> Vec<ExportedArtifact> {
        list.iter().filter(|a| a.user_id == user_id).cloned().collect()
    }
}
