use httpmock::prelude::*;
use clumio_sdk::models::SetBucketPropertiesRequest;
use clumio_sdk::{ApiClient, ClumioClient, ClumioError, Filter, ListParams, RetryPolicy};
use serde_json::json;

fn client_for(server: &MockServer) -> ClumioClient {
    ClumioClient::new(
        ApiClient::new(&server.base_url(), "token")
            .unwrap()
            .with_retry_policy(RetryPolicy::none()),
    )
}

#[tokio::test]
async fn test_list_sends_query_parameters() {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/datasources/aws/s3-buckets")
            .query_param("limit", "2")
            .query_param("filter", r#"{"name":{"$contains":"prod"}}"#)
            .query_param("embed", "read-aws-s3-bucket-protection-group-count");
        then.status(200).json_body(json!({
            "_embedded": {"items": [
                {"id": "b-1", "name": "prod-logs", "aws_region": "us-west-2"},
                {"id": "b-2", "name": "prod-data", "aws_region": "us-east-1", "is_deleted": false}
            ]},
            "_links": {"_self": {"href": "/datasources/aws/s3-buckets?limit=2"}},
            "current_count": 2,
            "limit": 2,
            "start": "1",
            "total_count": 2,
            "total_pages_count": 1
        }));
    });

    let params = ListParams::new()
        .limit(2)
        .filter(Filter::new().contains("name", "prod"))
        .embed("read-aws-s3-bucket-protection-group-count");
    let page = client_for(&server)
        .s3_buckets()
        .list_aws_s3_buckets(&params)
        .await
        .unwrap();

    list_mock.assert();
    assert_eq!(page.items().len(), 2);
    assert_eq!(page.items()[1].is_deleted, Some(false));
    assert_eq!(page.total_count, Some(2));
    assert!(page.links.next_href().is_none());
}

#[tokio::test]
async fn test_read_bucket_substitutes_path_parameter() {
    let server = MockServer::start();

    let read_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/datasources/aws/s3-buckets/b-42")
            .header("accept", "application/api.clumio.aws-s3-buckets=v1+json");
        then.status(200).json_body(json!({
            "id": "b-42",
            "name": "archive",
            "tags": [{"key": "team", "value": "storage"}],
            "last_backup_timestamp": "2024-03-01T08:00:00Z"
        }));
    });

    let bucket = client_for(&server)
        .s3_buckets()
        .read_aws_s3_bucket("b-42")
        .await
        .unwrap();

    read_mock.assert();
    assert_eq!(bucket.name.as_deref(), Some("archive"));
    assert_eq!(bucket.tags.len(), 1);
    assert!(bucket.last_backup_timestamp.is_some());
}

#[tokio::test]
async fn test_set_bucket_properties_posts_json_body() {
    let server = MockServer::start();

    let properties_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/datasources/aws/s3-buckets/b-7/properties")
            .header("content-type", "application/json")
            .json_body(json!({"event_bridge_enabled": true}));
        then.status(200).json_body(json!({
            "event_bridge_enabled": true,
            "event_bridge_notification_disabled": false
        }));
    });

    let response = client_for(&server)
        .s3_buckets()
        .set_bucket_properties(
            "b-7",
            &SetBucketPropertiesRequest {
                event_bridge_enabled: true,
                event_bridge_notification_disabled: None,
            },
        )
        .await
        .unwrap();

    properties_mock.assert();
    assert_eq!(response.event_bridge_enabled, Some(true));
}

#[tokio::test]
async fn test_missing_bucket_maps_to_api_error() {
    let server = MockServer::start();

    let missing_mock = server.mock(|when, then| {
        when.method(GET).path("/datasources/aws/s3-buckets/nope");
        then.status(404).json_body(json!({
            "errors": [{"error_code": 404, "error_message": "S3 bucket not found"}]
        }));
    });

    let err = client_for(&server)
        .s3_buckets()
        .read_aws_s3_bucket("nope")
        .await
        .unwrap_err();

    missing_mock.assert();
    match err {
        ClumioError::Api { status, message, body } => {
            assert_eq!(status, 404);
            assert_eq!(message, "S3 bucket not found");
            assert!(body.contains("error_code"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}
