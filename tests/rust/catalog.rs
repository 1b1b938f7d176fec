use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use xkcd_finder::catalog::memory::MemoryCatalog;
use xkcd_finder::catalog::xkcd_http::{XkcdCatalog, XkcdComicPayload};
use xkcd_finder::catalog::RemoteCatalog;
use xkcd_finder::core::config::CatalogConfigPayload;
use xkcd_finder::core::errors::CoreError;

const COMIC_JSON: &str = r#"{
    "month": "4", "num": 353, "link": "", "year": "2007", "news": "",
    "safe_title": "Python",
    "transcript": "[[ Guy 1 is talking to Guy 2, who is floating in the sky ]]",
    "alt": "I wrote 20 short programs in Python yesterday.",
    "img": "https://imgs.xkcd.com/comics/python.png",
    "title": "Python", "day": "5"
}"#;

/// 모든 요청에 같은 응답을 돌려주는 로컬 HTTP 서버를 띄우고 기본 URL을 반환한다.
async fn serve_canned(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("바인드");
    let address = listener.local_addr().expect("주소");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buffer = [0u8; 1024];
                while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                    match socket.read(&mut buffer).await {
                        Ok(0) | Err(_) => return,
                        Ok(read) => request.extend_from_slice(&buffer[..read]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", address)
}

fn http_catalog(base_url: String) -> XkcdCatalog {
    XkcdCatalog::new(CatalogConfigPayload {
        base_url,
        info_path: "info.0.json".to_string(),
        timeout_ms: 2000,
    })
    .expect("카탈로그")
}

#[test]
fn payload_description_joins_title_alt_and_transcript() {
    let payload: XkcdComicPayload = serde_json::from_str(COMIC_JSON).expect("JSON");

    let raw = payload.into_raw_item();

    assert_eq!(raw.id, 353);
    assert_eq!(raw.image_url, "https://imgs.xkcd.com/comics/python.png");
    assert!(raw.text.starts_with("Python I wrote 20 short programs"));
    assert!(raw.text.ends_with("floating in the sky ]]"));
}

#[test]
fn payload_falls_back_to_safe_title() {
    let payload: XkcdComicPayload =
        serde_json::from_str(r#"{"num": 1, "safe_title": "Barrel", "img": "b.png"}"#)
            .expect("JSON");

    assert_eq!(payload.description(), "Barrel");
}

#[test]
fn http_catalog_rejects_invalid_config() {
    let result = XkcdCatalog::new(CatalogConfigPayload {
        base_url: String::new(),
        info_path: "info.0.json".to_string(),
        timeout_ms: 1000,
    });

    assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
}

#[tokio::test]
async fn memory_catalog_reports_not_found_and_injected_failures() {
    let catalog = MemoryCatalog::new()
        .with_item(1, "1.png", "one")
        .with_item(3, "3.png", "three")
        .with_failing_id(3);

    assert_eq!(catalog.count().await.expect("count"), 3);
    assert_eq!(catalog.fetch(1).await.expect("fetch").text, "one");
    assert!(matches!(catalog.fetch(2).await, Err(CoreError::NotFound(2))));
    assert!(matches!(catalog.fetch(3).await, Err(CoreError::Transport(_))));
    assert_eq!(catalog.fetch_log(), vec![1, 2, 3]);
}

#[tokio::test]
async fn http_catalog_maps_missing_item_to_not_found() {
    let catalog = http_catalog(serve_canned("404 Not Found", "").await);

    assert!(matches!(catalog.fetch(404).await, Err(CoreError::NotFound(404))));
    assert!(matches!(catalog.count().await, Err(CoreError::Transport(_))));
}

#[tokio::test]
async fn http_catalog_maps_server_error_to_transport() {
    let catalog = http_catalog(serve_canned("500 Internal Server Error", "").await);

    assert!(matches!(catalog.fetch(1).await, Err(CoreError::Transport(_))));
    assert!(matches!(catalog.count().await, Err(CoreError::Transport(_))));
}

#[tokio::test]
async fn http_catalog_maps_malformed_body_to_serialization() {
    let catalog = http_catalog(serve_canned("200 OK", "{bad").await);

    assert!(matches!(catalog.fetch(1).await, Err(CoreError::Serialization(_))));
}

#[tokio::test]
async fn http_catalog_reads_item_and_latest_count() {
    let body = r#"{
        "num": 7, "title": "Girl Sleeping", "alt": "sketch",
        "img": "https://imgs.xkcd.com/comics/girl_sleeping.jpg"
    }"#;
    let catalog = http_catalog(serve_canned("200 OK", body).await);

    let raw = catalog.fetch(7).await.expect("조회");
    assert_eq!(raw.id, 7);
    assert_eq!(raw.image_url, "https://imgs.xkcd.com/comics/girl_sleeping.jpg");
    assert!(raw.text.starts_with("Girl Sleeping sketch"));

    assert_eq!(catalog.count().await.expect("개수"), 7);
}
