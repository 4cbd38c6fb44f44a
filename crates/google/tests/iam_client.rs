//! Integration tests for the IAM key client against a mock HTTP server.

use rotator_google::{IamClient, IamError, TokenSource};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> IamClient {
    IamClient::with_base_url(TokenSource::from_static("test-token"), server.uri())
}

#[tokio::test]
async fn create_key_posts_to_percent_encoded_resource() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/projects/proj-1/serviceAccounts/svc%40example.com/keys"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "projects/proj-1/serviceAccounts/svc@example.com/keys/abc123",
            "privateKeyData": "U0VDUkVU",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = client_for(&server)
        .create_service_account_key("proj-1", "svc@example.com")
        .await
        .unwrap();

    assert_eq!(key.private_key_data, b"SECRET");
    assert!(key.name.ends_with("/keys/abc123"));
}

#[tokio::test]
async fn create_key_propagates_permission_denied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {
                "code": 403,
                "message": "Permission denied on service account",
                "status": "PERMISSION_DENIED",
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_service_account_key("proj-1", "svc@example.com")
        .await
        .unwrap_err();

    match err {
        IamError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Permission denied on service account");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_keys_returns_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/proj-1/serviceAccounts/svc@example.com/keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "keys": [
                { "name": "projects/proj-1/serviceAccounts/svc@example.com/keys/one" },
                { "name": "projects/proj-1/serviceAccounts/svc@example.com/keys/two" },
            ]
        })))
        .mount(&server)
        .await;

    let keys = client_for(&server)
        .list_service_account_keys("proj-1", "svc@example.com")
        .await
        .unwrap();

    assert_eq!(keys.len(), 2);
    assert!(keys[0].name.ends_with("/keys/one"));
}

#[tokio::test]
async fn list_keys_tolerates_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let keys = client_for(&server)
        .list_service_account_keys("proj-1", "svc@example.com")
        .await
        .unwrap();
    assert!(keys.is_empty());
}

#[tokio::test]
async fn delete_key_targets_key_resource() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/projects/proj-1/serviceAccounts/svc@example.com/keys/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_service_account_key("proj-1", "svc@example.com", "abc123")
        .await
        .unwrap();
}
