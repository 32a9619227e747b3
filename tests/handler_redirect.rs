mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

async fn create_link(server: &TestServer, url: &str) -> String {
    let response = server.post("/api/createLink").json(&json!({ "url": url })).await;
    response.assert_status_ok();
    response.json::<Value>()["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_redirect_success() {
    let server = TestServer::new(common::app(common::test_state())).unwrap();

    let token = create_link(&server, "https://example.com/target").await;

    let response = server.get(&format!("/r/{token}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_records_click_with_correlation_ids() {
    let server = TestServer::new(common::app(common::test_state())).unwrap();

    let token = create_link(&server, "https://example.com").await;

    let response = server
        .get(&format!("/r/{token}"))
        .add_query_param("tid", "campaign-1")
        .add_query_param("mid", "msg-1")
        .await;
    assert_eq!(response.status_code(), 302);

    let stats: Value = server.get("/api/stats/campaign-1").await.json();
    assert_eq!(stats["stats"]["CLICK"], 1);
    assert_eq!(stats["stats"]["OPEN"], 0);

    let events: Value = server.get("/api/events").await.json();
    let item = &events["items"][0];
    assert_eq!(item["type"], "CLICK");
    assert_eq!(item["token"], token.as_str());
    assert_eq!(item["url"], "https://example.com");
    assert_eq!(item["tid"], "campaign-1");
    assert_eq!(item["mid"], "msg-1");
}

#[tokio::test]
async fn test_redirect_without_correlation_ids_is_valid() {
    let server = TestServer::new(common::app(common::test_state())).unwrap();

    let token = create_link(&server, "https://example.com").await;

    let response = server.get(&format!("/r/{token}")).await;
    assert_eq!(response.status_code(), 302);

    let events: Value = server.get("/api/events").await.json();
    let item = &events["items"][0];
    assert_eq!(item["type"], "CLICK");
    assert_eq!(item["tid"], Value::Null);
    assert_eq!(item["mid"], Value::Null);
}

#[tokio::test]
async fn test_redirect_unknown_token_records_nothing() {
    let server = TestServer::new(common::app(common::test_state())).unwrap();

    let response = server.get("/r/00000000").await;
    response.assert_status_not_found();

    let events: Value = server.get("/api/events").await.json();
    assert_eq!(events["items"].as_array().unwrap().len(), 0);
}
