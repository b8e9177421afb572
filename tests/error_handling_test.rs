use httpmock::prelude::*;
use clumio_sdk::{ApiClient, ApiRequest, ClumioClient, ClumioError, RetryPolicy};
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_http_errors_are_not_retried() {
    let server = MockServer::start();

    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/tasks/1");
        then.status(503).json_body(serde_json::json!({"message": "maintenance"}));
    });

    let client = ClumioClient::new(
        ApiClient::new(&server.base_url(), "token")
            .unwrap()
            .with_retry_policy(RetryPolicy::new(
                3,
                Duration::from_millis(5),
                Duration::from_millis(10),
            )),
    );

    let err = client.tasks().read_task("1").await.unwrap_err();

    failing_mock.assert_hits(1);
    assert!(matches!(err, ClumioError::Api { status: 503, ref message, .. } if message == "maintenance"));
    assert!(!err.is_connection_error());
}

#[tokio::test]
async fn test_connection_errors_are_retried_then_returned() {
    // Nothing listens on port 1.
    let policy = RetryPolicy::new(3, Duration::from_millis(20), Duration::from_millis(40));
    let client = ClumioClient::new(
        ApiClient::new("http://127.0.0.1:1", "token")
            .unwrap()
            .with_retry_policy(policy),
    );

    let started = Instant::now();
    let err = client.tasks().read_task("1").await.unwrap_err();

    assert!(err.is_connection_error(), "unexpected error: {:?}", err);
    assert!(started.elapsed() >= Duration::from_millis(60));
}

#[tokio::test]
async fn test_plain_text_error_body_becomes_message() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/organizational-units/ou-1");
        then.status(403).body("forbidden for this OU\n");
    });

    let client = ClumioClient::new(ApiClient::new(&server.base_url(), "token").unwrap());
    let err = client
        .organizational_units()
        .read_organizational_unit("ou-1")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "API responded with 403: forbidden for this OU");
    assert_eq!(err.user_friendly_message(), "Not allowed to access this resource");
}

#[tokio::test]
async fn test_unexpected_body_is_serialization_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/tasks/9");
        then.status(200).body("<html>not json</html>");
    });

    let client = ClumioClient::new(ApiClient::new(&server.base_url(), "token").unwrap());
    let err = client.tasks().read_task("9").await.unwrap_err();

    assert!(matches!(err, ClumioError::Serialization(_)));
}

#[tokio::test]
async fn test_execute_empty_accepts_no_content() {
    let server = MockServer::start();

    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/policies/definitions/p-9");
        then.status(204);
    });

    let api = ApiClient::new(&server.base_url(), "token")
        .unwrap()
        .with_retry_policy(RetryPolicy::none());
    let request = ApiRequest::delete("/policies/definitions/{policy_id}").path_param("policy_id", "p-9");

    tokio_test::assert_ok!(api.execute_empty(request).await);
    delete_mock.assert();
}
