#![cfg(feature = "server")]

use std::fs;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vitals_dashboard::server::{ServerConfig, router};

const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";

fn asset_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("index.html"), INDEX_HTML).expect("write index");
    fs::create_dir(dir.path().join("assets")).expect("assets dir");
    fs::write(dir.path().join("assets/app.js"), "console.log(1);").expect("write js");
    dir
}

fn config(dir: &tempfile::TempDir) -> ServerConfig {
    ServerConfig {
        asset_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    }
}

async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, String) {
    let response = router(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn serves_existing_assets() {
    let dir = asset_dir();
    let (status, body) = get(&config(&dir), "/assets/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log(1);");
}

#[tokio::test]
async fn root_serves_index() {
    let dir = asset_dir();
    let (status, body) = get(&config(&dir), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let dir = asset_dir();
    let config = config(&dir);
    for uri in ["/dashboard", "/regions/seoul/line", "/assets/missing.js"] {
        let (status, body) = get(&config, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, INDEX_HTML, "{uri}");
    }
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let dir = asset_dir();
    let response = router(&config(&dir))
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[test]
fn config_reads_port_and_asset_dir() {
    let config = ServerConfig::from_lookup(|key| match key {
        "PORT" => Some("8080".to_owned()),
        "ASSET_DIR" => Some("public".to_owned()),
        "BIND_ADDR" => Some("127.0.0.1".to_owned()),
        _ => None,
    })
    .expect("config");
    assert_eq!(config.port, 8080);
    assert_eq!(config.asset_dir, std::path::PathBuf::from("public"));
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn config_defaults_to_port_5174() {
    let config = ServerConfig::from_lookup(|_| None).expect("config");
    assert_eq!(config.port, 5174);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5174");
}
