//! HTTP-level tests for the REST table source and the chat client

mod common;

use pulseboard::chat::{ChatClient, ChatContext, ChatReply, DEFAULT_APOLOGY};
use pulseboard::error::ErrorCode;
use pulseboard::source::{DataSource, RestTableSource};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn table_source(server: &MockServer) -> RestTableSource {
    RestTableSource::builder(format!("{}/", server.uri()), "anon-key", "Layer1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_rest_source_fetches_and_coerces_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Layer1"))
        .and(query_param("select", "*"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::sample_rows_json()))
        .expect(1)
        .mount(&server)
        .await;

    let records = table_source(&server).fetch_customers().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].customer_id, "C001");
    assert_eq!(records[0].total_spent, Some(2400.0));
    assert_eq!(records[1].customer_id, "2");
    assert_eq!(records[1].total_spent(), 0.0);
    assert_eq!(records[1].churn_risk_score, Some(0.9));
}

#[tokio::test]
async fn test_rest_source_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/Layer1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = table_source(&server).fetch_customers().await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::SOURCE_HTTP_STATUS);
    assert!(err.user_message().contains("HTTP 401"));
    assert!(err.to_string().contains("invalid api key"));
}

#[tokio::test]
async fn test_rest_source_rejects_non_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": [] })))
        .mount(&server)
        .await;

    let err = table_source(&server).fetch_customers().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SOURCE_INVALID_BODY);
}

#[tokio::test]
async fn test_rest_source_describes_table_url() {
    let server = MockServer::start().await;
    let source = table_source(&server);
    assert_eq!(source.describe(), format!("{}/rest/v1/Layer1", server.uri()));
}

fn chat_client(server: &MockServer) -> ChatClient {
    ChatClient::new(&server.uri(), "/process-web-chat/", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_chat_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-web-chat/"))
        .and(body_json(json!({
            "message": "Which segment churns most?",
            "context": { "email": "ops@example.in", "customer_id": "", "customer_name": "Ops" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "success", "response": "At Risk customers." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let context = ChatContext {
        email: "ops@example.in".into(),
        customer_id: String::new(),
        customer_name: "Ops".into(),
    };
    let reply = chat_client(&server)
        .send("  Which segment churns most?  ", context)
        .await
        .unwrap();

    assert_eq!(reply, ChatReply::Answer("At Risk customers.".into()));
}

#[tokio::test]
async fn test_chat_declined_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "status": "error", "message": "Model unavailable" })),
        )
        .mount(&server)
        .await;

    let reply = chat_client(&server)
        .send("hello", ChatContext::default())
        .await
        .unwrap();

    assert_eq!(reply, ChatReply::Declined("Model unavailable".into()));
}

#[tokio::test]
async fn test_chat_declined_without_message_uses_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "error" })))
        .mount(&server)
        .await;

    let reply = chat_client(&server)
        .send("hello", ChatContext::default())
        .await
        .unwrap();

    assert_eq!(reply.text(), DEFAULT_APOLOGY);
}

#[tokio::test]
async fn test_chat_unreadable_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = chat_client(&server)
        .send("hello", ChatContext::default())
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::CHAT_INVALID_RESPONSE);
}
