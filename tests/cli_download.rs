//! Tests for the `download` subcommand of the `sketchware` binary.
//!
//! Runs the built binary against a wiremock server.

use std::path::PathBuf;
use std::process::Output;

use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn file_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/downloadSharedViewFile.do"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"swb-bytes".to_vec()))
        .mount(&mock_server)
        .await;

    mock_server
}

async fn download(base_url: &str, output: &PathBuf) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sketchware"))
        .args(["--base-url", base_url, "download", "view", "1", "1.swb", "--output"])
        .arg(output)
        .output()
        .await
        .unwrap()
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sketchware-cli-{}-{name}", std::process::id()))
}

#[tokio::test]
async fn test_download_writes_file() {
    let mock_server = file_server().await;
    let target = scratch_path("1.swb");

    let output = download(&mock_server.uri(), &target).await;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(std::fs::read(&target).unwrap(), b"swb-bytes");

    std::fs::remove_file(&target).unwrap();
}

#[tokio::test]
async fn test_download_write_failure_reports_io_error() {
    let mock_server = file_server().await;
    let target = scratch_path("missing-dir").join("1.swb");

    let output = download(&mock_server.uri(), &target).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot write"), "{stderr}");
    assert!(stderr.contains(&target.display().to_string()), "{stderr}");
    assert!(!stderr.contains("configuration"), "{stderr}");
}
