use super::*;
use crate::test_utils::mock_api_server::{MockApiServer, MockResponse};
use axum::http::StatusCode;
use serde_json::json;

const KEY: &str = "test-key-123";

fn client_for(server: &MockApiServer) -> StreamlineClient {
    StreamlineClient::new(Some(KEY.to_string()))
        .unwrap()
        .with_base_url(server.address())
}

fn search_body(hashes: &[&str], total: u64) -> serde_json::Value {
    let results: Vec<_> = hashes
        .iter()
        .map(|hash| {
            json!({
                "hash": hash,
                "name": format!("Icon {}", hash),
                "imagePreviewUrl": format!("https://cdn.example/{}.png", hash),
                "isFree": true,
                "familySlug": "sharp-line",
                "familyName": "Sharp Line",
                "categorySlug": "interface",
                "categoryName": "Interface",
                "subcategorySlug": "home",
                "subcategoryName": "Home"
            })
        })
        .collect();
    let returned = hashes.len() as u64;
    let has_more = total > returned;
    json!({
        "query": "home",
        "results": results,
        "pagination": {"total": total, "hasMore": has_more, "offset": 0, "nextOffset": returned}
    })
}

#[test]
fn test_client_requires_api_key() {
    assert_eq!(
        StreamlineClient::new(None).unwrap_err(),
        StreamlineError::MissingCredential
    );
    assert_eq!(
        StreamlineClient::new(Some("   ".to_string())).unwrap_err(),
        StreamlineError::MissingCredential
    );
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = StreamlineClient::new(Some(KEY.to_string()))
        .unwrap()
        .with_base_url("http://localhost:9000/v1/");
    assert_eq!(client.base_url(), "http://localhost:9000/v1");
    assert!(!format!("{:?}", client).contains(KEY));
}

#[tokio::test]
async fn test_global_search_sends_key_and_parameters() {
    let server = MockApiServer::start().await;
    server.respond_with(
        "/search/global",
        MockResponse::json(StatusCode::OK, search_body(&["ico_1", "ico_2"], 40)),
    );
    let client = client_for(&server);

    let options = SearchOptions::new("home").with_limit(2).with_offset(4);
    let response = client.global_search(&options).await.unwrap();
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.pagination.total, 40);
    assert!(response.pagination.has_more);

    let requests = server.get_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.api_key.as_deref(), Some(KEY));
    assert_eq!(request.accept.as_deref(), Some("application/json"));
    assert_eq!(request.params.get("productType").unwrap(), "icons");
    assert_eq!(request.params.get("query").unwrap(), "home");
    assert_eq!(request.params.get("limit").unwrap(), "2");
    assert_eq!(request.params.get("offset").unwrap(), "4");
    server.shutdown().await;
}

#[tokio::test]
async fn test_global_search_rejects_missing_query_without_request() {
    let server = MockApiServer::start().await;
    let client = client_for(&server);
    let err = client.global_search(&SearchOptions::default()).await.unwrap_err();
    assert!(matches!(err, StreamlineError::InvalidOptions(_)));
    assert!(server.get_requests().is_empty());
    server.shutdown().await;
}

#[tokio::test]
async fn test_family_search_uses_slug_path_and_omits_absent_query() {
    let server = MockApiServer::start().await;
    server.respond_with(
        "/search/family/sharp-line",
        MockResponse::json(StatusCode::OK, search_body(&["ico_1"], 1)),
    );
    let client = client_for(&server);

    let options = SearchOptions::default().with_product_type(ProductType::Illustrations);
    let response = client.family_search("sharp-line", &options).await.unwrap();
    assert_eq!(response.results[0].hash, "ico_1");

    let request = &server.get_requests()[0];
    assert_eq!(request.path, "/search/family/sharp-line");
    assert_eq!(request.params.get("productType").unwrap(), "illustrations");
    assert_eq!(request.params.get("limit").unwrap(), "50");
    assert_eq!(request.params.get("offset").unwrap(), "0");
    assert!(!request.params.contains_key("query"));
    server.shutdown().await;
}

#[tokio::test]
async fn test_out_of_range_limit_is_rejected_locally() {
    let server = MockApiServer::start().await;
    let client = client_for(&server);
    let options = SearchOptions::new("home").with_limit(500);
    let err = client.family_search("sharp-line", &options).await.unwrap_err();
    assert!(matches!(err, StreamlineError::InvalidOptions(_)));
    assert!(server.get_requests().is_empty());
    server.shutdown().await;
}

#[tokio::test]
async fn test_structured_error_body_is_classified() {
    let server = MockApiServer::start().await;
    server.respond_with(
        "/icons/ico_missing",
        MockResponse::json(
            StatusCode::NOT_FOUND,
            json!({"message": "Icon not found", "error": "Not Found", "statusCode": 404}),
        ),
    );
    let client = client_for(&server);

    let err = client.get_icon("ico_missing").await.unwrap_err();
    match err {
        StreamlineError::RemoteRequestFailed {
            status,
            message,
            error_code,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Icon not found");
            assert_eq!(error_code.as_deref(), Some("Not Found"));
            assert!(body.unwrap().contains("Icon not found"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    server.shutdown().await;
}

#[tokio::test]
async fn test_json_error_without_message_keeps_raw_body() {
    let server = MockApiServer::start().await;
    server.respond_with(
        "/search/global",
        MockResponse::json(
            StatusCode::TOO_MANY_REQUESTS,
            json!({"detail": "rate limited, retry in 60s"}),
        ),
    );
    let client = client_for(&server);

    let err = client
        .global_search(&SearchOptions::new("home"))
        .await
        .unwrap_err();
    match err {
        StreamlineError::RemoteRequestFailed {
            status,
            message,
            error_code,
            body,
        } => {
            assert_eq!(status, 429);
            assert!(message.contains("rate limited, retry in 60s"));
            assert!(error_code.is_none());
            assert!(body.unwrap().contains("rate limited, retry in 60s"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    server.shutdown().await;
}

#[test]
fn test_classify_failure_keeps_body_for_structured_errors() {
    let raw = br#"{"message":"Invalid API key","error":"Unauthorized","statusCode":401}"#;
    let err = crate::client::http::classify_failure(StatusCode::UNAUTHORIZED, raw);
    assert_eq!(
        err,
        StreamlineError::RemoteRequestFailed {
            status: 401,
            message: "Invalid API key".to_string(),
            error_code: Some("Unauthorized".to_string()),
            body: Some(String::from_utf8_lossy(raw).to_string()),
        }
    );
}

#[tokio::test]
async fn test_unstructured_error_body_is_kept_raw() {
    let server = MockApiServer::start().await;
    server.respond_with(
        "/search/global",
        MockResponse::raw(StatusCode::BAD_GATEWAY, "text/html", "<html>upstream down</html>"),
    );
    let client = client_for(&server);

    let err = client
        .global_search(&SearchOptions::new("home"))
        .await
        .unwrap_err();
    match err {
        StreamlineError::RemoteRequestFailed {
            status,
            message,
            error_code,
            body,
        } => {
            assert_eq!(status, 502);
            assert_eq!(
                message,
                "API request failed with status 502: <html>upstream down</html>"
            );
            assert!(error_code.is_none());
            assert_eq!(body.as_deref(), Some("<html>upstream down</html>"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    server.shutdown().await;
}

#[tokio::test]
async fn test_non_200_success_status_is_a_failure() {
    let server = MockApiServer::start().await;
    server.respond_with(
        "/icons/ico_1",
        MockResponse::raw(StatusCode::NO_CONTENT, "application/json", ""),
    );
    let client = client_for(&server);
    let err = client.get_icon("ico_1").await.unwrap_err();
    assert_eq!(err.status(), Some(204));
    server.shutdown().await;
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_failure() {
    let server = MockApiServer::start().await;
    server.respond_with(
        "/icons/ico_1",
        MockResponse::raw(StatusCode::OK, "application/json", "{not json"),
    );
    let client = client_for(&server);
    let err = client.get_icon("ico_1").await.unwrap_err();
    assert!(matches!(err, StreamlineError::DecodeFailure(_)));
    server.shutdown().await;
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = StreamlineClient::new(Some(KEY.to_string()))
        .unwrap()
        .with_base_url(format!("http://{}", addr));
    let err = client.get_icon("ico_1").await.unwrap_err();
    assert!(matches!(err, StreamlineError::TransportFailure(_)));
}

#[tokio::test]
async fn test_svg_download_returns_bytes_and_responsive_flag() {
    let server = MockApiServer::start().await;
    let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";
    server.respond_with(
        "/icons/ico_1/download/svg",
        MockResponse::raw(StatusCode::OK, "image/svg+xml", svg),
    );
    let client = client_for(&server);

    let bytes = client
        .download_svg("ico_1", &SvgOptions { responsive: true })
        .await
        .unwrap();
    assert_eq!(bytes, svg.as_bytes());

    client
        .download_svg("ico_1", &SvgOptions { responsive: false })
        .await
        .unwrap();

    let requests = server.get_requests();
    assert_eq!(requests[0].params.get("responsive").unwrap(), "true");
    assert_eq!(requests[0].accept.as_deref(), Some("image/svg+xml"));
    assert!(!requests[1].params.contains_key("responsive"));
    server.shutdown().await;
}

#[tokio::test]
async fn test_png_download_defaults_size() {
    let server = MockApiServer::start().await;
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    server.respond_with(
        "/icons/ico_1/download/png",
        MockResponse::raw(StatusCode::OK, "image/png", png.clone()),
    );
    let client = client_for(&server);

    let bytes = client.download_png("ico_1", &PngOptions::default()).await.unwrap();
    assert_eq!(bytes, png);
    client
        .download_png("ico_1", &PngOptions { size: Some(128) })
        .await
        .unwrap();

    let requests = server.get_requests();
    assert_eq!(requests[0].params.get("size").unwrap(), "512");
    assert_eq!(requests[0].accept.as_deref(), Some("image/png"));
    assert_eq!(requests[1].params.get("size").unwrap(), "128");
    server.shutdown().await;
}

#[tokio::test]
async fn test_download_failure_is_classified_like_json_calls() {
    let server = MockApiServer::start().await;
    server.respond_with(
        "/icons/ico_1/download/png",
        MockResponse::json(
            StatusCode::FORBIDDEN,
            json!({"message": "Premium icon", "error": "Forbidden", "statusCode": 403}),
        ),
    );
    let client = client_for(&server);
    let err = client
        .download_png("ico_1", &PngOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Premium icon");
    server.shutdown().await;
}

#[tokio::test]
async fn test_empty_hash_is_rejected() {
    let client = StreamlineClient::new(Some(KEY.to_string())).unwrap();
    let err = client.get_icon("  ").await.unwrap_err();
    assert!(matches!(err, StreamlineError::InvalidOptions(_)));
}
