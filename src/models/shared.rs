//! Shared collection shapes: listings, details, comments and tags.
//!
//! Views, blocks and moreblocks share these shapes; only the endpoint path
//! differs between the three collection kinds.

use serde::{Deserialize, Serialize};

use super::user::Session;

/// A shared view, block or moreblock as returned by listing and search
/// endpoints.
///
/// The wire shape is the same for every collection kind. Listings of views
/// populate `view_name`, listings of blocks and moreblocks populate
/// `block_name`; the other stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedItem {
    /// Identifier of the shared item.
    pub shared_id: i64,

    /// Name of the shared view (view listings only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_name: Option<String>,

    /// Name of the shared block or moreblock (block listings only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_name: Option<String>,

    /// Alias of the uploader.
    #[serde(default)]
    pub user_alias: String,

    /// User id of the uploader.
    #[serde(default)]
    pub uploader_id: i64,

    #[serde(rename = "short_desc", default)]
    pub short_description: String,

    #[serde(rename = "long_desc", default)]
    pub long_description: String,

    /// Recommendation score.
    #[serde(default)]
    pub recommend: i64,

    #[serde(rename = "down_cnt", default)]
    pub download_count: i64,

    #[serde(rename = "like_cnt", default)]
    pub like_count: i64,

    #[serde(rename = "comment_cnt", default)]
    pub comment_count: i64,

    /// Sequence of the attached file, used to download it.
    #[serde(rename = "file_seq", default)]
    pub file_sequence: String,

    /// Sequence of the preview images.
    #[serde(rename = "images_seq", default)]
    pub images_sequence: String,

    /// Registration timestamp as sent by the service.
    #[serde(rename = "reg_dt", default)]
    pub register_date: String,

    /// Last update timestamp as sent by the service.
    #[serde(rename = "update_dt", default)]
    pub update_date: String,
}

impl SharedItem {
    /// The view or block name, whichever this listing populated.
    pub fn display_name(&self) -> Option<&str> {
        self.view_name.as_deref().or(self.block_name.as_deref())
    }
}

/// Detail record of a single shared item.
///
/// `block_name` is only present for blocks and moreblocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedDetails {
    pub shared_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_name: Option<String>,

    pub user_alias: String,

    pub uploader_id: i64,

    #[serde(rename = "short_desc")]
    pub short_description: String,

    #[serde(rename = "long_desc")]
    pub long_description: String,

    pub recommend: i64,

    #[serde(rename = "down_cnt")]
    pub download_count: i64,

    #[serde(rename = "like_cnt")]
    pub like_count: i64,

    #[serde(rename = "comment_cnt")]
    pub comment_count: i64,

    #[serde(rename = "file_seq")]
    pub file_sequence: String,

    #[serde(rename = "images_seq")]
    pub images_sequence: String,

    #[serde(rename = "reg_dt")]
    pub register_date: String,

    #[serde(rename = "update_dt")]
    pub update_date: String,
}

impl SharedDetails {
    pub fn display_name(&self) -> Option<&str> {
        self.view_name.as_deref().or(self.block_name.as_deref())
    }
}

/// A comment on a shared item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedComment {
    pub comment_id: i64,
    pub shared_id: i64,
    pub user_id: i64,
    pub user_alias: String,
    /// Level of the commenting user.
    pub level: i32,
    pub comment: String,
    #[serde(rename = "reg_dt")]
    pub register_date: String,
}

/// A tag attached to shared items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SharedTag {
    #[serde(rename = "tag_id")]
    pub id: i64,
    #[serde(rename = "tag_text")]
    pub text: String,
}

/// Offset window for listing and tag search requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWindow {
    /// Number of items to load.
    pub row_unit: u32,
    /// Index of the first item.
    pub row_start: u32,
    /// Tag to search for (tag search only).
    #[serde(rename = "tag_text", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl RowWindow {
    #[must_use]
    pub fn new(items_to_load: u32, index: u32) -> Self {
        Self {
            row_unit: items_to_load,
            row_start: index,
            tag: None,
        }
    }

    /// Restrict the window to items carrying `tag`.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// The window directly after this one.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            row_unit: self.row_unit,
            row_start: self.row_start.saturating_add(self.row_unit),
            tag: self.tag.clone(),
        }
    }
}

impl Default for RowWindow {
    fn default() -> Self {
        Self::new(20, 0)
    }
}

/// Body addressing one shared item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedIdRequest {
    pub shared_id: i64,
}

/// Body for downloading a shared item's file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFileRequest {
    pub shared_id: i64,
    pub file_name: String,
}

/// Body for an authenticated action on a shared item (like, removal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedActionRequest {
    #[serde(flatten)]
    pub session: Session,
    pub shared_id: i64,
}

/// Body for posting a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRequest {
    #[serde(flatten)]
    pub session: Session,
    pub shared_id: i64,
    pub comment: String,
}

/// Body for removing a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveCommentRequest {
    #[serde(flatten)]
    pub session: Session,
    pub shared_id: i64,
    pub comment_id: i64,
}
