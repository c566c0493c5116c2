//! User account shapes: sessions, authorization and exported artifacts.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::codec::{StringInt, YesNo};

/// Sign-in provider the service expects for social logins.
pub const SNS_KIND_GOOGLE: &str = "google";

/// Credentials attached to authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    /// Account login, usually the e-mail address.
    pub login_id: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>, login_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            login_id: login_id.into(),
        }
    }
}

/// Account returned by a successful authorization.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedUser {
    pub user_id: i64,
    pub login_id: String,
    pub session_id: String,
    pub alias: String,
    pub sns_kind: String,
    pub gcm_id: String,
    pub device_id: String,
    pub level: i32,
    pub grade_level: i32,
    pub grade_point: i32,

    /// Registration time in epoch milliseconds, string-encoded on the wire.
    #[serde_as(as = "StringInt")]
    #[serde(rename = "user_reg_dt")]
    pub register_date: i64,

    /// `"Y"`/`"N"` on the wire.
    #[serde_as(as = "YesNo")]
    pub is_sns_user: bool,
}

impl AuthorizedUser {
    /// Session credentials for follow-up calls.
    pub fn session(&self) -> Session {
        Session::new(&self.session_id, &self.login_id)
    }
}

/// Body of the authorization request.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeRequest {
    #[serde_as(as = "YesNo")]
    pub is_sns_user: bool,
    pub login_id: String,
    pub sns_kind: String,
    pub device_id: String,
    pub access_token: String,
    pub gcm_id: String,
}

impl AuthorizeRequest {
    /// A Google sign-in request.
    pub fn google(
        login_id: impl Into<String>,
        device_id: impl Into<String>,
        access_token: impl Into<String>,
        gcm_id: impl Into<String>,
    ) -> Self {
        Self {
            is_sns_user: true,
            login_id: login_id.into(),
            sns_kind: SNS_KIND_GOOGLE.to_string(),
            device_id: device_id.into(),
            access_token: access_token.into(),
            gcm_id: gcm_id.into(),
        }
    }
}

/// An APK or project export listed for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedArtifact {
    pub url_id: i64,
    pub user_id: i64,
    pub alias: String,
    #[serde(rename = "pkg_name")]
    pub package_name: String,
    /// Some service builds spell this field `file_na,e`.
    #[serde(alias = "file_na,e")]
    pub file_name: String,
    #[serde(rename = "reg_dt")]
    pub register_date: String,
    #[serde(rename = "expire_dt")]
    pub expire_date: String,
}

/// Body addressing one export of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportActionRequest {
    #[serde(flatten)]
    pub session: Session,
    pub url_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorized_json(is_sns_user: &str) -> serde_json::Value {
        serde_json::json!({
            "sns_kind": "google",
            "login_id": "me@example.test",
            "gcm_id": "gcm",
            "session_id": "sess-1",
            "level": 2,
            "alias": "me",
            "user_reg_dt": "1589000000000",
            "is_sns_user": is_sns_user,
            "device_id": "dev",
            "user_id": 77,
            "grade_level": 1,
            "grade_point": 40
        })
    }

    #[test]
    fn test_authorized_user_decodes_wire_codecs() {
        let user: AuthorizedUser = serde_json::from_value(authorized_json("Y")).unwrap();
        assert!(user.is_sns_user);
        assert_eq!(user.register_date, 1_589_000_000_000);
        assert_eq!(user.session(), Session::new("sess-1", "me@example.test"));

        let user: AuthorizedUser = serde_json::from_value(authorized_json("n")).unwrap();
        assert!(!user.is_sns_user);
    }

    #[test]
    fn test_authorized_user_rejects_numeric_garbage() {
        let mut json = authorized_json("Y");
        json["user_reg_dt"] = serde_json::json!("yesterday");
        assert!(serde_json::from_value::<AuthorizedUser>(json).is_err());
    }

    #[test]
    fn test_authorize_request_wire_form() {
        let request = AuthorizeRequest::google("me@example.test", "dev", "token", "gcm");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["is_sns_user"], "Y");
        assert_eq!(json["sns_kind"], "google");
        assert_eq!(json["access_token"], "token");
    }

    #[test]
    fn test_exported_artifact_accepts_misspelled_file_name() {
        let json = serde_json::json!({
            "alias": "me",
            "pkg_name": "com.example.app",
            "url_id": 12,
            "user_id": 77,
            "file_na,e": "app.apk",
            "reg_dt": "2020-01-01",
            "expire_dt": "2020-02-01"
        });
        let artifact: ExportedArtifact = serde_json::from_value(json).unwrap();
        assert_eq!(artifact.file_name, "app.apk");
        assert_eq!(artifact.package_name, "com.example.app");
    }
}
