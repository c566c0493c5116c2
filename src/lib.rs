//! Sketchware API client library.
//!
//! A typed Rust client for the Sketchware sharing service: shared views,
//! blocks and moreblocks, their comments, tags, likes and downloads, user
//! authorization and exported projects.
//!
//! # Quick Start
//!
//! ```no_run
//! use sketchware_api::{CollectionKind, SketchwareClient};
//!
//! #[tokio::main]
//! async fn main() -> sketchware_api::Result<()> {
//!     let client = SketchwareClient::default_client()?;
//!
//!     // Every call resolves to an Outcome instead of returning an error.
//!     client
//!         .shared()
//!         .recent(CollectionKind::View, 10, 0)
//!         .await
//!         .on_success(|views| {
//!             for view in views {
//!                 println!("{:?} by {}", view.display_name(), view.user_alias);
//!             }
//!         })
//!         .on_error(|err| eprintln!("listing failed: {err}"));
//!
//!     // Or convert it back into a Result and use `?`.
//!     let version = client.min_sketchware_version().await.into_result()?;
//!     println!("Minimum app version: {version}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`codec`] - wire encodings (string integers, `"Y"`/`"N"` flags)
//! - [`models`] - one serde shape per request and response
//! - [`Dispatcher`] - performs a single call through a [`Transport`] and
//!   folds every failure into an [`Outcome`]
//! - [`ProjectsApi`], [`UserApi`], [`SharedCollectionsApi`] - endpoint groups
//!   owned by [`SketchwareClient`]
//! - [`CallbackClient`] - forwards outcomes to push-style callbacks
//!
//! # Configuration
//!
//! [`ClientConfig::from_env`] reads:
//!
//! - `SKETCHWARE_API_URL` (optional) - Base URL (defaults to `http://sketchware.io`)
//! - `SKETCHWARE_API_LOG` (optional) - `1`/`true` to log requests via `tracing`

mod api;
mod callback;
mod client;
pub mod cli;
pub mod codec;
mod dispatcher;
mod error;
pub mod models;
pub mod output;
mod outcome;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{ClientConfig, SketchwareClient, DEFAULT_BASE_URL};
pub use dispatcher::Dispatcher;
pub use error::{BoxError, Result, SketchwareError};
pub use outcome::Outcome;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, RequestBody, Transport,
};

// Re-export endpoint groups
pub use api::{CollectionKind, ProjectsApi, SharedCollectionsApi, SortMode, UserApi};

// Re-export callback adapter
pub use callback::{callback, CallbackClient, FnCallback, ResponseCallback};

// Re-export models
pub use models::{
    // Shared collections
    RowWindow,
    SharedComment,
    SharedDetails,
    SharedItem,
    SharedTag,
    // User
    AuthorizedUser,
    ExportedArtifact,
    Session,
    // Projects
    ExportedProject,
};
