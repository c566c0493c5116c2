//! Mock Sketchware server for E2E testing.
//!
//! This module provides an in-memory mock server that speaks the Sketchware
//! wire protocol for integration and end-to-end testing. Unlike wiremock
//! which mocks at the HTTP level per-test, this server maintains state across
//! requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use sketchware_api::mock_server::MockServer;
//! use sketchware_api::{ClientConfig, CollectionKind, SketchwareClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let config = ClientConfig::default().with_base_url(server.url());
//!     let client = SketchwareClient::new(config).unwrap();
//!
//!     // Server comes with default fixtures
//!     let views = client.shared().recent(CollectionKind::View, 10, 0).await;
//!     assert!(views.is_success());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, TEST_LOGIN_ID, TEST_SESSION_ID};
pub use server::MockServer;
pub use state::MockState;
