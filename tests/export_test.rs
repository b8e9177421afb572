use anyhow::Result;
use httpmock::prelude::*;
use clumio_sdk::{
    ApiClient, ClumioClient, ExportFormat, Exporter, ListParams, LocalStorage, Resource,
    RetryPolicy,
};
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn test_export_all_pages_to_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_1 = server.mock(|when, then| {
        when.method(GET)
            .path("/datasources/vmware/vcenters")
            .query_param("start", "1");
        then.status(200).json_body(json!({
            "_embedded": {"items": [{"id": "vc-1", "ip_address": "10.0.0.1", "status": "connected"}]},
            "_links": {"_next": {"href": "/datasources/vmware/vcenters?start=2"}}
        }));
    });
    let page_2 = server.mock(|when, then| {
        when.method(GET)
            .path("/datasources/vmware/vcenters")
            .query_param("start", "2");
        then.status(200).json_body(json!({
            "_embedded": {"items": [{"id": "vc-2", "ip_address": "10.0.0.2", "status": "disconnected"}]}
        }));
    });

    let client = ClumioClient::new(
        ApiClient::new(&server.base_url(), "token")?.with_retry_policy(RetryPolicy::none()),
    );
    let items = client
        .lister(Resource::Vcenters)
        .list_values(&ListParams::new().start("1"), None)
        .await?;

    let exporter = Exporter::new(LocalStorage::new(output_path.clone()), output_path.clone());
    let written = exporter
        .export(Resource::Vcenters.as_str(), &items, ExportFormat::Csv)
        .await?;

    page_1.assert();
    page_2.assert();
    assert!(written.ends_with("vcenters.csv"));

    let content = std::fs::read_to_string(temp_dir.path().join("vcenters.csv"))?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    assert!(headers.iter().any(|h| h == "ip_address"));
    assert!(!headers.iter().any(|h| h == "_links"));

    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 2);
    assert!(content.contains("disconnected"));
    Ok(())
}

#[tokio::test]
async fn test_export_json_keeps_links() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let items = vec![json!({"id": "t-1", "_links": {"_self": {"href": "/tasks/t-1"}}})];
    let exporter = Exporter::new(LocalStorage::new(output_path.clone()), output_path);
    exporter.export("tasks", &items, ExportFormat::Json).await?;

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("tasks.json"))?)?;
    assert_eq!(written[0]["_links"]["_self"]["href"], "/tasks/t-1");
    Ok(())
}
