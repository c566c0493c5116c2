//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::models::SharedComment;
use crate::{
    AuthorizedUser, CollectionKind, ExportedArtifact, ExportedProject, SharedItem, SharedTag,
};

/// Login id of the user the default scenario signs in.
pub const TEST_LOGIN_ID: &str = "tester@example.com";

/// Session id of the user the default scenario signs in.
pub const TEST_SESSION_ID: &str = "session-test";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Shared Item Fixtures
    // =========================================================================

    /// Create a shared view with only its id and name set.
    pub fn view(shared_id: i64, name: &str) -> SharedItem {
        SharedItem {
            shared_id,
            view_name: Some(name.to_string()),
            ..SharedItem::default()
        }
    }

    /// Create a shared block or moreblock with only its id and name set.
    pub fn block(shared_id: i64, name: &str) -> SharedItem {
        SharedItem {
            shared_id,
            block_name: Some(name.to_string()),
            ..SharedItem::default()
        }
    }

    /// Create a fully populated shared item of `kind`.
    pub fn popular_item(
        kind: CollectionKind,
        shared_id: i64,
        name: &str,
        likes: i64,
        downloads: i64,
        registered: &str,
    ) -> SharedItem {
        let mut item = match kind {
            CollectionKind::View => Self::view(shared_id, name),
            CollectionKind::Block | CollectionKind::MoreBlock => Self::block(shared_id, name),
        };
        item.user_alias = "maker".to_string();
        item.uploader_id = 7;
        item.short_description = format!("{name} for your app");
        item.long_description = format!("A reusable {kind} called {name}.");
        item.like_count = likes;
        item.download_count = downloads;
        item.file_sequence = format!("{shared_id}.swb");
        item.images_sequence = format!("{shared_id}_1.png");
        item.register_date = registered.to_string();
        item.update_date = registered.to_string();
        item
    }

    pub fn tag(id: i64, text: &str) -> SharedTag {
        SharedTag {
            id,
            text: text.to_string(),
        }
    }

    pub fn comment(comment_id: i64, shared_id: i64, user: &AuthorizedUser, text: &str) -> SharedComment {
        SharedComment {
            comment_id,
            shared_id,
            user_id: user.user_id,
            user_alias: user.alias.clone(),
            level: user.level,
            comment: text.to_string(),
            register_date: "2020-02-02 12:00:00".to_string(),
        }
    }

    // =========================================================================
    // User Fixtures
    // =========================================================================

    /// A signed-in Google user.
    pub fn user(user_id: i64, login_id: &str, session_id: &str) -> AuthorizedUser {
        AuthorizedUser {
            user_id,
            login_id: login_id.to_string(),
            session_id: session_id.to_string(),
            alias: "tester".to_string(),
            sns_kind: crate::models::SNS_KIND_GOOGLE.to_string(),
            gcm_id: "gcm".to_string(),
            device_id: "device".to_string(),
            level: 3,
            grade_level: 2,
            grade_point: 120,
            register_date: 1_577_836_800_000,
            is_sns_user: true,
        }
    }

    pub fn exported_artifact(url_id: i64, user_id: i64, file_name: &str) -> ExportedArtifact {
        ExportedArtifact {
            url_id,
            user_id,
            alias: "tester".to_string(),
            package_name: "com.example.app".to_string(),
            file_name: file_name.to_string(),
            register_date: "2020-01-01".to_string(),
            expire_date: "2020-02-01".to_string(),
        }
    }

    // =========================================================================
    // Export Fixtures
    // =========================================================================

    /// An exported project valid for 31 days from 2020-01-01.
    pub fn exported_project(url_id: i64, user_id: i64, app_name: &str) -> ExportedProject {
        ExportedProject {
            url_id,
            user_id,
            alias: "tester".to_string(),
            app_name: app_name.to_string(),
            package_name: "com.example.app".to_string(),
            register_date: 1_577_836_800_000,
            expire_date: 1_580_515_200_000,
        }
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub items: Vec<(CollectionKind, SharedItem)>,
    pub tags: Vec<(CollectionKind, i64, Vec<SharedTag>)>,
    pub comments: Vec<(CollectionKind, SharedComment)>,
    pub files: Vec<(CollectionKind, i64, String, Vec<u8>)>,
    pub user: AuthorizedUser,
    pub exported_apks: Vec<ExportedArtifact>,
    pub exported_projects: Vec<ExportedArtifact>,
    pub exports: Vec<(ExportedProject, String, Vec<u8>)>,
    pub min_version: u32,
}

impl DefaultScenario {
    fn new() -> Self {
        use CollectionKind::{Block, MoreBlock, View};

        let user = Fixtures::user(77, TEST_LOGIN_ID, TEST_SESSION_ID);

        let items = vec![
            (View, Fixtures::popular_item(View, 1, "LoginForm", 5, 40, "2020-01-10 09:00:00")),
            (View, Fixtures::popular_item(View, 2, "ProfileCard", 12, 8, "2020-03-01 09:00:00")),
            (View, Fixtures::popular_item(View, 3, "Settings", 1, 2, "2020-02-15 09:00:00")),
            (Block, Fixtures::popular_item(Block, 10, "ToastBlock", 4, 9, "2020-01-05 10:00:00")),
            (Block, Fixtures::popular_item(Block, 11, "HttpGet", 9, 3, "2020-01-06 10:00:00")),
            (
                MoreBlock,
                Fixtures::popular_item(MoreBlock, 20, "Shuffle", 2, 2, "2020-01-07 10:00:00"),
            ),
        ];

        let tags = vec![
            (View, 1, vec![Fixtures::tag(1, "login"), Fixtures::tag(2, "form")]),
            (View, 2, vec![Fixtures::tag(2, "form")]),
            (Block, 11, vec![Fixtures::tag(3, "network")]),
        ];

        let comments = vec![(View, Fixtures::comment(900, 1, &user, "Works great"))];

        let files = vec![
            (View, 1, "1.swb".to_string(), b"view-archive".to_vec()),
            (Block, 10, "10.swb".to_string(), b"block-archive".to_vec()),
        ];

        let exported_apks = vec![Fixtures::exported_artifact(300, user.user_id, "app.apk")];
        let exported_projects = vec![Fixtures::exported_artifact(500, user.user_id, "project.sh")];

        let exports = vec![(
            Fixtures::exported_project(500, user.user_id, "Example"),
            "project.sh".to_string(),
            b"project-archive".to_vec(),
        )];

        Self {
            items,
            tags,
            comments,
            files,
            user,
            exported_apks,
            exported_projects,
            exports,
            min_version: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_item_uses_kind_name_field() {
        let view = Fixtures::popular_item(CollectionKind::View, 1, "A", 0, 0, "");
        let block = Fixtures::popular_item(CollectionKind::MoreBlock, 2, "B", 0, 0, "");
        assert_eq!(view.view_name.as_deref(), Some("A"));
        assert!(view.block_name.is_none());
        assert_eq!(block.block_name.as_deref(), Some("B"));
    }

    #[test]
    fn test_default_scenario() {
        let scenario = Fixtures::default_scenario();
        assert!(!scenario.items.is_empty());
        assert!(scenario
            .comments
            .iter()
            .all(|(_, c)| c.user_id == scenario.user.user_id));
        assert_eq!(scenario.user.session_id, TEST_SESSION_ID);
    }
}
