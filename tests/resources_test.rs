use anyhow::Result;
use httpmock::prelude::*;
use clumio_sdk::models::{
    CreateOrganizationalUnitRequest, GenerateComplianceReportRequest,
    UpdateIndividualAlertRequest,
};
use clumio_sdk::{ApiClient, ClumioClient, Filter, ListParams, RetryPolicy};
use serde_json::json;

fn client_for(server: &MockServer) -> ClumioClient {
    ClumioClient::new(
        ApiClient::new(&server.base_url(), "token")
            .unwrap()
            .with_retry_policy(RetryPolicy::none()),
    )
}

#[tokio::test]
async fn test_clear_individual_alert() -> Result<()> {
    let server = MockServer::start();

    let patch_mock = server.mock(|when, then| {
        when.method(httpmock::Method::PATCH)
            .path("/alerts/individual/al-1")
            .json_body(json!({"action": "clear", "notes": "resolved upstream"}));
        then.status(200).json_body(json!({
            "id": "al-1",
            "type": "policy_violated",
            "status": "cleared",
            "notes": "resolved upstream",
            "primary_entity": {"id": "b-1", "type": "aws_s3_bucket", "value": "prod-logs"},
            "cleared_timestamp": "2024-05-02T10:00:00Z"
        }));
    });

    let alert = client_for(&server)
        .alerts()
        .update_individual_alert(
            "al-1",
            &UpdateIndividualAlertRequest::clear().with_notes("resolved upstream"),
        )
        .await?;

    patch_mock.assert();
    assert!(!alert.is_active());
    assert_eq!(
        alert.primary_entity.and_then(|e| e.entity_type).as_deref(),
        Some("aws_s3_bucket")
    );
    Ok(())
}

#[tokio::test]
async fn test_file_systems_scoped_by_backup() -> Result<()> {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/backups/bk-1/file-systems");
        then.status(200).json_body(json!({
            "_embedded": {"items": [
                {"id": "fs-1", "mount_path": "/", "type": "ext4", "size": 1000, "free_space": 400, "is_supported": true}
            ]}
        }));
    });
    let read_mock = server.mock(|when, then| {
        when.method(GET).path("/backups/bk-1/file-systems/fs-1");
        then.status(200).json_body(json!({"id": "fs-1", "mount_path": "/", "type": "ext4"}));
    });

    let controller = client_for(&server).file_systems();
    let page = controller.list_file_systems("bk-1", &ListParams::new()).await?;
    let single = controller.read_file_system("bk-1", "fs-1").await?;

    list_mock.assert();
    read_mock.assert();
    assert_eq!(page.items()[0].used_space(), Some(600));
    assert_eq!(single.filesystem_type.as_deref(), Some("ext4"));
    Ok(())
}

#[tokio::test]
async fn test_generate_and_read_compliance_report() -> Result<()> {
    let server = MockServer::start();

    let generate_mock = server.mock(|when, then| {
        when.method(POST).path("/reports/compliance").json_body(json!({
            "name": "q2",
            "filter": r#"{"compliance_status":{"$eq":"non_compliant"}}"#
        }));
        then.status(202).json_body(json!({"id": "rep-1", "task_id": "task-9"}));
    });
    let read_mock = server.mock(|when, then| {
        when.method(GET).path("/reports/compliance/rep-1");
        then.status(200).json_body(json!({
            "id": "rep-1",
            "name": "q2",
            "status": "completed",
            "download_link": "https://reports/rep-1.csv"
        }));
    });

    let controller = client_for(&server).compliance_reports();
    let reference = controller
        .generate_compliance_report(
            &GenerateComplianceReportRequest::new("q2")
                .with_filter(&Filter::new().eq("compliance_status", "non_compliant")),
        )
        .await?;
    let report = controller.read_compliance_report("rep-1").await?;

    generate_mock.assert();
    read_mock.assert();
    assert_eq!(reference.task_id, "task-9");
    assert_eq!(report.download_link.as_deref(), Some("https://reports/rep-1.csv"));
    Ok(())
}

#[tokio::test]
async fn test_organizational_unit_lifecycle() -> Result<()> {
    let server = MockServer::start();

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/organizational-units")
            .json_body(json!({"name": "finance", "parent_id": "root"}));
        then.status(202).json_body(json!({
            "id": "ou-2",
            "name": "finance",
            "parent_id": "root",
            "task_id": "task-11"
        }));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/organizational-units/ou-2");
        then.status(202).json_body(json!({"task_id": "task-12"}));
    });

    let controller = client_for(&server).organizational_units();
    let created = controller
        .create_organizational_unit(&CreateOrganizationalUnitRequest {
            name: "finance".to_string(),
            description: None,
            parent_id: Some("root".to_string()),
        })
        .await?;
    let deleted = controller.delete_organizational_unit(&created.id).await?;

    create_mock.assert();
    delete_mock.assert();
    assert_eq!(created.task_id.as_deref(), Some("task-11"));
    assert!(created.configured_datasource_types.is_empty());
    assert_eq!(deleted.map(|t| t.task_id).as_deref(), Some("task-12"));
    Ok(())
}

#[tokio::test]
async fn test_delete_organizational_unit_without_content() -> Result<()> {
    let server = MockServer::start();

    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/organizational-units/ou-empty");
        then.status(204);
    });

    let deleted = client_for(&server)
        .organizational_units()
        .delete_organizational_unit("ou-empty")
        .await?;

    delete_mock.assert();
    assert!(deleted.is_none());
    Ok(())
}

#[tokio::test]
async fn test_policy_definition_operations() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/policies/definitions/p-1");
        then.status(200).json_body(json!({
            "id": "p-1",
            "name": "gold",
            "activation_status": "activated",
            "operations": [{
                "type": "aws_s3_backup",
                "action_setting": "immediate",
                "slas": [{
                    "retention_duration": {"unit": "days", "value": 30},
                    "rpo_frequency": {"unit": "days", "value": 1}
                }]
            }]
        }));
    });

    let policy = client_for(&server)
        .policies()
        .read_policy_definition("p-1")
        .await?;

    let operation = policy.operation("aws_s3_backup").expect("operation present");
    let retention = operation.slas[0].retention_duration.as_ref().unwrap();
    assert_eq!((retention.unit.as_str(), retention.value), ("days", 30));
    assert!(policy.operation("mssql_backup").is_none());
    Ok(())
}
