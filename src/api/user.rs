//! User account operations.

use crate::api::paths;
use crate::dispatcher::Dispatcher;
use crate::models::{AuthorizeRequest, AuthorizedUser, ExportActionRequest, ExportedArtifact, Session};
use crate::outcome::Outcome;

/// Authorization and management of a user's exports.
#[derive(Debug, Clone)]
pub struct UserApi {
    dispatcher: Dispatcher,
}

impl UserApi {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Sign in with a Google account.
    ///
    /// # Arguments
    ///
    /// * `login_id` - Account e-mail
    /// * `device_id` - Identifier of the calling device
    /// * `access_token` - OAuth access token issued by Google
    /// * `gcm_id` - Push registration id
    pub async fn authorize(
        &self,
        login_id: &str,
        device_id: &str,
        access_token: &str,
        gcm_id: &str,
    ) -> Outcome<AuthorizedUser> {
        let request = AuthorizeRequest::google(login_id, device_id, access_token, gcm_id);
        self.dispatcher.post_json(paths::AUTHORIZE, &request).await
    }

    /// APKs the user has exported.
    pub async fn exported_apks(&self, session: &Session) -> Outcome<Vec<ExportedArtifact>> {
        self.dispatcher.post_json(paths::EXPORTED_APKS, session).await
    }

    /// Projects the user has exported.
    pub async fn exported_projects(&self, session: &Session) -> Outcome<Vec<ExportedArtifact>> {
        self.dispatcher
            .post_json(paths::EXPORTED_PROJECTS, session)
            .await
    }

    pub async fn remove_exported_apk(&self, session: &Session, url_id: i64) -> Outcome<String> {
        let request = ExportActionRequest {
            session: session.clone(),
            url_id,
        };
        self.dispatcher
            .post_text(paths::REMOVE_EXPORTED_APK, &request)
            .await
    }

    pub async fn remove_exported_project(
        &self,
        session: &Session,
        url_id: i64,
    ) -> Outcome<String> {
        let request = ExportActionRequest {
            session: session.clone(),
            url_id,
        };
        self.dispatcher
            .post_text(paths::REMOVE_EXPORTED_PROJECT, &request)
            .await
    }
}
