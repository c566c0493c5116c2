//! Endpoint groups.
//!
//! Each group builds endpoint paths by substituting collection-kind and
//! sort-mode tokens into the service's fixed templates, then hands the call
//! to the shared [`Dispatcher`](crate::Dispatcher).

mod projects;
mod shared;
mod user;

use std::fmt;
use std::str::FromStr;

pub use projects::ProjectsApi;
pub use shared::SharedCollectionsApi;
pub use user::UserApi;

/// The three kinds of shared collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    View,
    Block,
    MoreBlock,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [Self::View, Self::Block, Self::MoreBlock];

    /// Token used by single-item endpoints (`reqSharedViewDetail.do`).
    pub fn token(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Block => "Block",
            Self::MoreBlock => "MoreBlock",
        }
    }

    /// Token used by listing endpoints (`reqRecentSharedViews.do`).
    pub fn plural_token(self) -> &'static str {
        match self {
            Self::View => "Views",
            Self::Block => "Blocks",
            Self::MoreBlock => "MoreBlocks",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::View => "view",
            Self::Block => "block",
            Self::MoreBlock => "moreblock",
        })
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "view" | "views" => Ok(Self::View),
            "block" | "blocks" => Ok(Self::Block),
            "moreblock" | "moreblocks" => Ok(Self::MoreBlock),
            other => Err(format!("unknown collection kind '{other}'")),
        }
    }
}

/// Ordering of a shared collection listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Most recently shared first.
    #[default]
    Recent,
    MostLiked,
    MostDownloaded,
}

impl SortMode {
    pub fn token(self) -> &'static str {
        match self {
            Self::Recent => "Recent",
            Self::MostLiked => "LikeCnt",
            Self::MostDownloaded => "DownCnt",
        }
    }
}

pub(crate) mod paths {
    use super::{CollectionKind, SortMode};

    pub const MIN_VERSION: &str = "min_sketchware_version.txt";
    pub const ALL_TAGS: &str = "reqAllTags.do";
    pub const AUTHORIZE: &str = "registerSnsUser.do";
    pub const EXPORTED_APKS: &str = "reqListExportApk.do";
    pub const EXPORTED_PROJECTS: &str = "reqListExportData.do";
    pub const REMOVE_EXPORTED_APK: &str = "reqDeleteApkUrl.do";
    pub const REMOVE_EXPORTED_PROJECT: &str = "reqDeleteDataUrl.do";
    pub const EXPORT_DATA: &str = "reqGetExportData.do";
    pub const EXPORT_FILE: &str = "getExportProjectFile.do";

    pub fn listing(kind: CollectionKind, sort: SortMode) -> String {
        format!("req{}Shared{}.do", sort.token(), kind.plural_token())
    }

    pub fn tag_search(kind: CollectionKind) -> String {
        format!("reqTagSearchShared{}.do", kind.plural_token())
    }

    pub fn details(kind: CollectionKind) -> String {
        format!("reqShared{}Detail.do", kind.token())
    }

    pub fn comments(kind: CollectionKind) -> String {
        format!("reqShared{}CommentsList.do", kind.token())
    }

    pub fn tags(kind: CollectionKind) -> String {
        format!("reqShared{}Tags.do", kind.token())
    }

    pub fn file(kind: CollectionKind) -> String {
        format!("downloadShared{}File.do", kind.token())
    }

    pub fn add_comment(kind: CollectionKind) -> String {
        format!("reqInsertShared{}Comment.do", kind.token())
    }

    pub fn remove_comment(kind: CollectionKind) -> String {
        format!("reqDeleteShared{}Comment.do", kind.token())
    }

    pub fn like(kind: CollectionKind) -> String {
        format!("reqInsertShared{}Like.do", kind.token())
    }

    pub fn add_download(kind: CollectionKind) -> String {
        format!("reqShared{}DownCntAdd.do", kind.token())
    }

    pub fn upload(kind: CollectionKind) -> String {
        format!("uploadShare{}File.do", kind.token())
    }

    pub fn remove(kind: CollectionKind) -> String {
        format!("reqDeleteShared{}.do", kind.token())
    }
}
