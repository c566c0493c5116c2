//! Wire-level tests for the Sketchware client.
//!
//! Uses wiremock to check the exact requests the client sends and how
//! responses, status errors and transport failures surface as outcomes.

use std::sync::atomic::{AtomicBool, Ordering};

use sketchware_api::{
    ClientConfig, CollectionKind, Outcome, Session, SketchwareClient, SketchwareError,
};
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SketchwareClient {
    SketchwareClient::new(ClientConfig::default().with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_recent_views_sends_row_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reqRecentSharedViews.do"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"row_unit": 10, "row_start": 0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"shared_id": 42, "view_name": "Foo"},
            {"shared_id": 43, "view_name": "Bar", "like_cnt": 3}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let views = client
        .shared()
        .recent(CollectionKind::View, 10, 0)
        .await
        .into_result()
        .unwrap();

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].display_name(), Some("Foo"));
    assert_eq!(views[1].like_count, 3);
}

#[tokio::test]
async fn test_most_downloaded_moreblocks_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reqDownCntSharedMoreBlocks.do"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let blocks = client
        .shared()
        .most_downloaded(CollectionKind::MoreBlock, 5, 5)
        .await;

    assert_eq!(blocks.success().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_tag_search_sends_tag_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reqTagSearchSharedBlocks.do"))
        .and(body_json(serde_json::json!({
            "row_unit": 20,
            "row_start": 40,
            "tag_text": "network"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"shared_id": 11, "block_name": "HttpGet"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let blocks = client
        .shared()
        .search_by_tag(CollectionKind::Block, 20, 40, "network")
        .await
        .into_result()
        .unwrap();

    assert_eq!(blocks[0].block_name.as_deref(), Some("HttpGet"));
}

#[tokio::test]
async fn test_authorize_encodes_flag_and_decodes_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/registerSnsUser.do"))
        .and(body_partial_json(serde_json::json!({
            "is_sns_user": "Y",
            "sns_kind": "google",
            "login_id": "me@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user_id": 5,
            "login_id": "me@example.com",
            "session_id": "abc",
            "alias": "me",
            "sns_kind": "google",
            "gcm_id": "g",
            "device_id": "d",
            "level": 1,
            "grade_level": 1,
            "grade_point": 0,
            "user_reg_dt": "1577836800000",
            "is_sns_user": "Y"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let user = client
        .authorize_user("me@example.com", "d", "token", "g")
        .await
        .into_result()
        .unwrap();

    assert!(user.is_sns_user);
    assert_eq!(user.register_date, 1_577_836_800_000);
    assert_eq!(user.session(), Session::new("abc", "me@example.com"));
}

#[tokio::test]
async fn test_status_error_becomes_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reqSharedViewDetail.do"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "database offline"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = client.shared().details(CollectionKind::View, 1).await;

    match outcome {
        Outcome::Failure(SketchwareError::Status {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 500);
            assert_eq!(message, "database offline");
        }
        other => panic!("Expected status failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_becomes_format_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reqSharedBlockTags.do"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = client.shared().tags(CollectionKind::Block, 1).await;

    assert!(matches!(outcome.failure(), Some(SketchwareError::Format(_))));
}

#[tokio::test]
async fn test_connection_refused_never_reaches_success_handler() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        SketchwareClient::new(ClientConfig::default().with_base_url(format!("http://{addr}")))
            .unwrap();

    let succeeded = AtomicBool::new(false);
    let failed = AtomicBool::new(false);

    client
        .shared()
        .recent(CollectionKind::View, 10, 0)
        .await
        .on_success(|_| succeeded.store(true, Ordering::SeqCst))
        .on_error(|err| {
            assert!(matches!(err, SketchwareError::Http(_)));
            assert!(err.is_transport());
            failed.store(true, Ordering::SeqCst);
        });

    assert!(!succeeded.load(Ordering::SeqCst));
    assert!(failed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_file_download_returns_raw_bytes() {
    let mock_server = MockServer::start().await;
    let content = vec![0x50, 0x4b, 0x03, 0x04, 0xff];

    Mock::given(method("POST"))
        .and(path("/downloadSharedViewFile.do"))
        .and(body_json(serde_json::json!({"shared_id": 1, "file_name": "1.swb"})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client
        .shared()
        .file(CollectionKind::View, 1, "1.swb")
        .await
        .into_result()
        .unwrap();

    assert_eq!(bytes, content);
}

#[tokio::test]
async fn test_min_version_is_plain_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/min_sketchware_version.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("150\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let version = client.min_sketchware_version().await;

    assert_eq!(version.success(), Some(&150));
}

#[tokio::test]
async fn test_upload_sends_query_and_octet_stream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/uploadShareBlockFile.do"))
        .and(query_param("session_id", "s 1"))
        .and(query_param("login_id", "me@example.com"))
        .and(query_param("file_name", "toast.swb"))
        .and(header("content-type", "application/octet-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1001"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let session = Session::new("s 1", "me@example.com");
    let reply = client
        .shared()
        .upload_file(CollectionKind::Block, &session, "toast.swb", b"data".to_vec())
        .await;

    assert_eq!(reply.success().map(String::as_str), Some("1001"));
}

#[tokio::test]
async fn test_like_sends_session_fields_inline() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reqInsertSharedMoreBlockLike.do"))
        .and(body_json(serde_json::json!({
            "session_id": "abc",
            "login_id": "me@example.com",
            "shared_id": 20
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("success"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let session = Session::new("abc", "me@example.com");
    let outcome = client
        .shared()
        .like(CollectionKind::MoreBlock, &session, 20)
        .await;

    assert!(outcome.is_success());
}
