use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dnsdiff_application::ports::LookupPort;
use dnsdiff_domain::{CanonicalRecord, DomainError, LookupResult, RecordData};
use dnsdiff_infrastructure::HttpLookupClient;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupParams {
    domain: String,
    record_type: String,
    nameserver: String,
}

async fn lookup(Query(params): Query<LookupParams>) -> Response {
    if params.domain == "bad..example" {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Invalid domain name: bad..example" })),
        )
            .into_response();
    }
    let record = CanonicalRecord::new(
        params.domain.clone(),
        300,
        "IN",
        RecordData::A {
            address: "192.0.2.1".parse().unwrap(),
        },
    );
    Json(LookupResult::new(
        params.domain,
        params.record_type,
        params.nameserver,
        vec![record],
    ))
    .into_response()
}

async fn start_server() -> String {
    let app = Router::new().route("/api/lookup", get(lookup));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_remote_lookup_round_trips_result() {
    let base = start_server().await;
    let client = HttpLookupClient::new(base, Duration::from_secs(5));

    let result = client.lookup("example.com", "A", "8.8.8.8").await.unwrap();

    assert_eq!(result.domain, "example.com");
    assert_eq!(result.record_type, "A");
    assert_eq!(result.nameserver, "8.8.8.8");
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].record_type(), "A");
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_trimmed() {
    let client = HttpLookupClient::new("http://localhost:8080/", Duration::from_secs(1));
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_remote_error_message_is_surfaced() {
    let base = start_server().await;
    let client = HttpLookupClient::new(base, Duration::from_secs(5));

    let err = client.lookup("bad..example", "A", "8.8.8.8").await.unwrap_err();

    match err {
        DomainError::UpstreamQuery(message) => {
            assert_eq!(message, "Invalid domain name: bad..example")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_upstream_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpLookupClient::new(format!("http://{}", addr), Duration::from_secs(2));
    let err = client.lookup("example.com", "A", "8.8.8.8").await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamQuery(_)));
}
