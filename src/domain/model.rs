use crate::core::filter::Filter;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// 單一 HATEOAS 連結
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HateoasLink {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

/// 回應中的 `_links` 區塊；常見的分頁連結有獨立欄位，其餘放在 `other`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HateoasLink>,
    #[serde(rename = "_next", default, skip_serializing_if = "Option::is_none")]
    pub next: Option<HateoasLink>,
    #[serde(rename = "_prev", default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<HateoasLink>,
    #[serde(rename = "_first", default, skip_serializing_if = "Option::is_none")]
    pub first: Option<HateoasLink>,
    #[serde(rename = "_last", default, skip_serializing_if = "Option::is_none")]
    pub last: Option<HateoasLink>,
    #[serde(flatten)]
    pub other: HashMap<String, HateoasLink>,
}

impl Links {
    pub fn next_href(&self) -> Option<&str> {
        self.next
            .as_ref()
            .map(|link| link.href.as_str())
            .filter(|href| !href.is_empty())
    }

    pub fn get(&self, name: &str) -> Option<&HateoasLink> {
        match name {
            "_self" => self.self_link.as_ref(),
            "_next" => self.next.as_ref(),
            "_prev" => self.prev.as_ref(),
            "_first" => self.first.as_ref(),
            "_last" => self.last.as_ref(),
            other => self.other.get(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Embedded<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

impl<T> Default for Embedded<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// 列表回應的共用外殼
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(rename = "_embedded", default, deserialize_with = "null_as_default")]
    pub embedded: Embedded<T>,
    #[serde(rename = "_links", default, deserialize_with = "null_as_default")]
    pub links: Links,
    #[serde(default)]
    pub current_count: Option<i64>,
    #[serde(default)]
    pub filter_applied: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub start: Option<String>,
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub total_pages_count: Option<i64>,
}

impl<T> ListEnvelope<T> {
    pub fn items(&self) -> &[T] {
        &self.embedded.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.embedded.items
    }
}

/// 明確的 `null` 與缺少欄位同樣視為預設值
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `start` is a page token: some endpoints send it as a number, others as a string.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// 列表端點共用的查詢參數
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub start: Option<String>,
    pub filter: Option<Filter>,
    pub embed: Option<String>,
    pub sort: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn embed(mut self, embed: impl Into<String>) -> Self {
        self.embed = Some(embed.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// 轉成查詢字串參數；空的 filter 不送出
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(start) = &self.start {
            query.push(("start".to_string(), start.clone()));
        }
        if let Some(filter) = self.filter.as_ref().filter(|f| !f.is_empty()) {
            query.push(("filter".to_string(), filter.to_query_value()));
        }
        if let Some(embed) = &self.embed {
            query.push(("embed".to_string(), embed.clone()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort".to_string(), sort.clone()));
        }
        query
    }
}

/// Common AWS tag shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsTag {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_next_link() {
        let body = json!({
            "_embedded": {"items": [{"id": "a"}, {"id": "b"}]},
            "_links": {
                "_self": {"href": "/tasks?start=1", "templated": false, "type": "get"},
                "_next": {"href": "/tasks?start=2", "templated": false, "type": "get"},
                "read-task": {"href": "/tasks/{task_id}", "templated": true, "type": "get"}
            },
            "current_count": 2,
            "limit": 2,
            "start": "1",
            "total_count": 5,
            "total_pages_count": 3
        });

        let page: ListEnvelope<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(page.items().len(), 2);
        assert_eq!(page.links.next_href(), Some("/tasks?start=2"));
        assert_eq!(page.links.get("read-task").unwrap().templated, Some(true));
        assert_eq!(page.start.as_deref(), Some("1"));
        assert_eq!(page.total_pages_count, Some(3));
    }

    #[test]
    fn test_envelope_tolerates_missing_members() {
        let page: ListEnvelope<serde_json::Value> =
            serde_json::from_value(json!({"start": 3})).unwrap();
        assert!(page.items().is_empty());
        assert_eq!(page.links.next_href(), None);
        assert_eq!(page.start.as_deref(), Some("3"));
    }

    #[test]
    fn test_envelope_tolerates_null_members() {
        let page: ListEnvelope<serde_json::Value> =
            serde_json::from_value(json!({"_embedded": null, "_links": null})).unwrap();
        assert!(page.items().is_empty());
        assert_eq!(page.links, Links::default());

        let page: ListEnvelope<serde_json::Value> =
            serde_json::from_value(json!({"_embedded": {"items": null}})).unwrap();
        assert!(page.items().is_empty());
    }

    #[derive(Debug, Deserialize)]
    struct NoDefault {
        id: String,
    }

    #[test]
    fn test_envelope_items_need_no_default() {
        let page: ListEnvelope<NoDefault> =
            serde_json::from_value(json!({"_embedded": {"items": [{"id": "x"}]}})).unwrap();
        assert_eq!(page.items()[0].id, "x");
    }

    #[test]
    fn test_list_params_query_order() {
        let params = ListParams::new()
            .limit(25)
            .start("2")
            .filter(Filter::new())
            .sort("-created_timestamp");
        assert_eq!(
            params.to_query(),
            vec![
                ("limit".to_string(), "25".to_string()),
                ("start".to_string(), "2".to_string()),
                ("sort".to_string(), "-created_timestamp".to_string()),
            ]
        );
    }
}
