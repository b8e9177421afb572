use crate::core::Storage;
use crate::utils::error::{ClumioError, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ClumioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ClumioError::InvalidConfigValue {
                field: "export.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: json, csv".to_string(),
            }),
        }
    }
}

/// 把列表結果寫成檔案 (`<resource>.<ext>`)
pub struct Exporter<S: Storage> {
    storage: S,
    base_path: String,
}

impl<S: Storage> Exporter<S> {
    pub fn new(storage: S, base_path: impl Into<String>) -> Self {
        Self {
            storage,
            base_path: base_path.into(),
        }
    }

    pub async fn export(&self, resource: &str, items: &[Value], format: ExportFormat) -> Result<String> {
        let filename = format!("{}.{}", resource, format.extension());
        let data = match format {
            ExportFormat::Json => serde_json::to_vec_pretty(items)?,
            ExportFormat::Csv => to_csv(items)?,
        };

        tracing::debug!("💾 Writing {} ({} bytes, {} items)", filename, data.len(), items.len());
        self.storage.write_file(&filename, &data).await?;

        Ok(format!("{}/{}", self.base_path.trim_end_matches('/'), filename))
    }
}

/// CSV 欄位為所有頂層欄位的聯集 (排序，排除 `_links`/`_embedded`)；巢狀值以 JSON 字串輸出
pub fn to_csv(items: &[Value]) -> Result<Vec<u8>> {
    let columns: BTreeSet<&str> = items
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|obj| obj.keys().map(String::as_str))
        .filter(|key| *key != "_links" && *key != "_embedded")
        .collect();

    if columns.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;

    for item in items {
        let row: Vec<String> = columns
            .iter()
            .map(|column| match item.get(*column) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            })
            .collect();
        writer.write_record(&row)?;
    }

    writer.into_inner().map_err(|e| ClumioError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_columns_are_union_of_keys() {
        let items = vec![
            json!({"id": "b-1", "name": "logs", "_links": {"_self": {"href": "/x"}}}),
            json!({"id": "b-2", "aws_region": "us-west-2", "tags": [{"key": "env"}]}),
        ];

        let csv = String::from_utf8(to_csv(&items).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "aws_region,id,name,tags");
        assert_eq!(lines[1], ",b-1,logs,");
        assert_eq!(lines[2], r#"us-west-2,b-2,,"[{""key"":""env""}]""#);
    }

    #[test]
    fn test_csv_without_items_is_empty() {
        assert!(to_csv(&[]).unwrap().is_empty());
        assert!(to_csv(&[json!({"_links": {}})]).unwrap().is_empty());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
