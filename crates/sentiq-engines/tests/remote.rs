//! Integration tests for `RemoteSentimentClient` using wiremock HTTP mocks.

use sentiq_engines::{EngineError, RemoteSentimentClient};
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> RemoteSentimentClient {
    RemoteSentimentClient::new(base_url, 30, None)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn classify_batch_parses_nested_candidate_lists() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        [
            { "label": "LABEL_2", "score": 0.91 },
            { "label": "LABEL_1", "score": 0.06 },
            { "label": "LABEL_0", "score": 0.03 }
        ],
        [
            { "label": "LABEL_0", "score": 0.88 },
            { "label": "LABEL_1", "score": 0.09 },
            { "label": "LABEL_2", "score": 0.03 }
        ]
    ]);

    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({
            "inputs": ["love it", "hate it"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let texts: Vec<String> = vec!["love it".into(), "hate it".into()];
    let outputs = client
        .classify_batch(&texts)
        .await
        .expect("should parse outputs");

    assert_eq!(outputs.len(), 2);
    assert_eq!(
        outputs[0].first().map(|r| r.label.as_str()),
        Some("LABEL_2"),
        "first text should unwrap to its top candidate"
    );
    assert_eq!(outputs[1].first().map(|r| r.label.as_str()), Some("LABEL_0"));
}

#[tokio::test]
async fn classify_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer hf_test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            [{ "label": "POSITIVE", "score": 0.99 }]
        ])))
        .mount(&server)
        .await;

    let client = RemoteSentimentClient::new(&server.uri(), 30, Some("hf_test_token".to_string()))
        .expect("client construction should not fail");
    let output = client.classify("great stuff").await.expect("should classify");
    assert_eq!(output.first().map(|r| r.label.as_str()), Some("POSITIVE"));
}

#[tokio::test]
async fn non_success_status_is_an_endpoint_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.classify("anything").await.expect_err("must fail");
    assert!(matches!(err, EngineError::Endpoint(_)), "got: {err:?}");
}

#[tokio::test]
async fn wrong_output_count_is_an_endpoint_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.classify("anything").await.expect_err("must fail");
    assert!(
        matches!(err, EngineError::Endpoint(ref msg) if msg.contains("0 outputs")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": "shape"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.classify("anything").await.expect_err("must fail");
    assert!(
        matches!(err, EngineError::Deserialize { .. }),
        "got: {err:?}"
    );
}
