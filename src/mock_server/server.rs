//! Mock Sketchware server.
//!
//! Provides an axum-based HTTP server that speaks the Sketchware wire
//! protocol.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers::{self, SharedState};
use super::state::MockState;
use crate::api::paths;
use crate::models::{
    CommentRequest, RemoveCommentRequest, SharedActionRequest, SharedFileRequest,
    SharedIdRequest,
};
use crate::{CollectionKind, RowWindow, SortMode};

const SORT_MODES: [SortMode; 3] = [
    SortMode::Recent,
    SortMode::MostLiked,
    SortMode::MostDownloaded,
];

/// A mock Sketchware server for testing.
///
/// The server runs in the background and keeps its state across requests,
/// so comments, likes and uploads are visible to later calls.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL as the client's base URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new().with_min_version(scenario.min_version);

        for (kind, item) in scenario.items {
            state = state.with_item(kind, item);
        }

        for (kind, shared_id, tags) in scenario.tags {
            state = state.with_tags(kind, shared_id, tags);
        }

        for (kind, comment) in scenario.comments {
            let key = (kind, comment.shared_id);
            if let Some(item) = state
                .items
                .get_mut(&kind)
                .and_then(|items| items.iter_mut().find(|i| i.shared_id == key.1))
            {
                item.comment_count += 1;
            }
            state.comments.entry(key).or_default().push(comment);
        }

        for (kind, shared_id, file_name, content) in scenario.files {
            state = state.with_file(kind, shared_id, &file_name, content);
        }

        state
            .sessions
            .insert(scenario.user.session_id.clone(), scenario.user);
        state.exported_apks = scenario.exported_apks;
        state.exported_projects = scenario.exported_projects;

        for (project, file_name, content) in scenario.exports {
            state
                .export_files
                .insert((project.url_id, file_name), content);
            state = state.with_export(project);
        }

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: SharedState) -> Router {
        let mut router = Router::new()
            .route(&route(paths::MIN_VERSION), get(handlers::min_version))
            .route(&route(paths::ALL_TAGS), post(handlers::all_tags))
            // User routes
            .route(&route(paths::AUTHORIZE), post(handlers::authorize))
            .route(&route(paths::EXPORTED_APKS), post(handlers::exported_apks))
            .route(
                &route(paths::EXPORTED_PROJECTS),
                post(handlers::exported_projects),
            )
            .route(
                &route(paths::REMOVE_EXPORTED_APK),
                post(handlers::remove_exported_apk),
            )
            .route(
                &route(paths::REMOVE_EXPORTED_PROJECT),
                post(handlers::remove_exported_project),
            )
            // Export routes
            .route(&route(paths::EXPORT_DATA), post(handlers::exported_project))
            .route(
                &route(paths::EXPORT_FILE),
                post(handlers::exported_project_file),
            )
            // Health check
            .route("/health", get(health_check));

        for kind in CollectionKind::ALL {
            router = Self::shared_routes(router, kind);
        }

        router.with_state(state)
    }

    /// Routes of one shared collection.
    fn shared_routes(
        mut router: Router<SharedState>,
        kind: CollectionKind,
    ) -> Router<SharedState> {
        for sort in SORT_MODES {
            router = router.route(
                &route(&paths::listing(kind, sort)),
                post(
                    move |state: State<SharedState>, body: Json<RowWindow>| {
                        handlers::list_shared(kind, sort, state, body)
                    },
                ),
            );
        }

        router
            .route(
                &route(&paths::tag_search(kind)),
                post(move |state: State<SharedState>, body: Json<RowWindow>| {
                    handlers::search_shared(kind, state, body)
                }),
            )
            .route(
                &route(&paths::details(kind)),
                post(move |state: State<SharedState>, body: Json<SharedIdRequest>| {
                    handlers::shared_details(kind, state, body)
                }),
            )
            .route(
                &route(&paths::comments(kind)),
                post(move |state: State<SharedState>, body: Json<SharedIdRequest>| {
                    handlers::shared_comments(kind, state, body)
                }),
            )
            .route(
                &route(&paths::tags(kind)),
                post(move |state: State<SharedState>, body: Json<SharedIdRequest>| {
                    handlers::shared_tags(kind, state, body)
                }),
            )
            .route(
                &route(&paths::file(kind)),
                post(move |state: State<SharedState>, body: Json<SharedFileRequest>| {
                    handlers::shared_file(kind, state, body)
                }),
            )
            .route(
                &route(&paths::add_comment(kind)),
                post(move |state: State<SharedState>, body: Json<CommentRequest>| {
                    handlers::add_comment(kind, state, body)
                }),
            )
            .route(
                &route(&paths::remove_comment(kind)),
                post(
                    move |state: State<SharedState>, body: Json<RemoveCommentRequest>| {
                        handlers::remove_comment(kind, state, body)
                    },
                ),
            )
            .route(
                &route(&paths::like(kind)),
                post(move |state: State<SharedState>, body: Json<SharedActionRequest>| {
                    handlers::like(kind, state, body)
                }),
            )
            .route(
                &route(&paths::add_download(kind)),
                post(move |state: State<SharedState>, body: Json<SharedIdRequest>| {
                    handlers::add_download(kind, state, body)
                }),
            )
            .route(
                &route(&paths::upload(kind)),
                post(
                    move |state: State<SharedState>,
                          query: Query<handlers::UploadQuery>,
                          body: Bytes| { handlers::upload(kind, state, query, body) },
                ),
            )
            .route(
                &route(&paths::remove(kind)),
                post(move |state: State<SharedState>, body: Json<SharedActionRequest>| {
                    handlers::remove_shared(kind, state, body)
                }),
            )
    }
}

fn route(path: &str) -> String {
    format!("/{path}")
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientConfig, SketchwareClient};

    fn client_for(server: &MockServer) -> SketchwareClient {
        SketchwareClient::new(ClientConfig::default().with_base_url(server.url()))
            .expect("client should build")
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_recent_views_with_client() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let views = client
            .shared()
            .recent(CollectionKind::View, 10, 0)
            .await
            .into_result()
            .expect("Failed to list views");

        let ids: Vec<i64> = views.iter().map(|v| v.shared_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = client_for(&server);

        let outcome = client.shared().details(CollectionKind::Block, 10).await;

        assert_eq!(outcome.failure().and_then(|e| e.status_code()), Some(404));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_custom_state() {
        let state = MockState::new()
            .with_item(CollectionKind::MoreBlock, Fixtures::block(5, "Custom"))
            .with_min_version(7);

        let server = MockServer::with_state(state).await;
        let client = client_for(&server);

        let details = client
            .shared()
            .details(CollectionKind::MoreBlock, 5)
            .await
            .into_result()
            .expect("Failed to get details");
        assert_eq!(details.display_name(), Some("Custom"));

        let version = client.min_sketchware_version().await.into_result().unwrap();
        assert_eq!(version, 7);

        server.shutdown().await;
    }
}
