//! Exported project retrieval.

use crate::api::paths;
use crate::dispatcher::Dispatcher;
use crate::models::{ExportFileRequest, ExportedProject, UrlIdRequest};
use crate::outcome::Outcome;

#[derive(Debug, Clone)]
pub struct ProjectsApi {
    dispatcher: Dispatcher,
}

impl ProjectsApi {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Metadata of the project exported under `url_id`.
    pub async fn exported_project(&self, url_id: i64) -> Outcome<Vec<ExportedProject>> {
        self.dispatcher
            .post_json(paths::EXPORT_DATA, &UrlIdRequest { url_id })
            .await
    }

    /// Raw content of an exported project's file.
    pub async fn exported_project_file(
        &self,
        file_name: &str,
        user_id: i64,
        url_id: i64,
    ) -> Outcome<Vec<u8>> {
        let request = ExportFileRequest {
            file_name: file_name.to_string(),
            user_id,
            url_id,
        };
        self.dispatcher.post_bytes(paths::EXPORT_FILE, &request).await
    }
}
