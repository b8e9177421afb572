use crate::utils::error::{ClumioError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterOp {
    Eq,
    Neq,
    In,
    Contains,
    BeginsWith,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "$eq",
            FilterOp::Neq => "$neq",
            FilterOp::In => "$in",
            FilterOp::Contains => "$contains",
            FilterOp::BeginsWith => "$begins_with",
            FilterOp::Gt => "$gt",
            FilterOp::Gte => "$gte",
            FilterOp::Lt => "$lt",
            FilterOp::Lte => "$lte",
        }
    }

    pub fn parse(op: &str) -> Option<Self> {
        let op = match op {
            "$eq" => FilterOp::Eq,
            "$neq" => FilterOp::Neq,
            "$in" => FilterOp::In,
            "$contains" => FilterOp::Contains,
            "$begins_with" => FilterOp::BeginsWith,
            "$gt" => FilterOp::Gt,
            "$gte" => FilterOp::Gte,
            "$lt" => FilterOp::Lt,
            "$lte" => FilterOp::Lte,
            _ => return None,
        };
        Some(op)
    }
}

/// `filter` 查詢參數：`{"欄位": {"$運算子": 值}}`，序列化成 JSON 字串送出
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: BTreeMap<String, BTreeMap<FilterOp, Value>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(mut self, field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        self.conditions
            .entry(field.into())
            .or_default()
            .insert(op, value.into());
        self
    }

    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.condition(field, FilterOp::Eq, value)
    }

    pub fn neq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.condition(field, FilterOp::Neq, value)
    }

    pub fn in_values<I, V>(self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.condition(field, FilterOp::In, Value::Array(values))
    }

    pub fn contains(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.condition(field, FilterOp::Contains, value)
    }

    pub fn begins_with(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.condition(field, FilterOp::BeginsWith, value)
    }

    pub fn gt(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.condition(field, FilterOp::Gt, value)
    }

    pub fn gte(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.condition(field, FilterOp::Gte, value)
    }

    pub fn lt(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.condition(field, FilterOp::Lt, value)
    }

    pub fn lte(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.condition(field, FilterOp::Lte, value)
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        for (field, ops) in &self.conditions {
            let mut inner = Map::new();
            for (op, value) in ops {
                inner.insert(op.as_str().to_string(), value.clone());
            }
            root.insert(field.clone(), Value::Object(inner));
        }
        Value::Object(root)
    }

    pub fn to_query_value(&self) -> String {
        self.to_value().to_string()
    }

    /// 解析使用者提供的 JSON 過濾字串 (CLI `--filter`)
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let parsed: Value = serde_json::from_str(raw).map_err(|e| ClumioError::InvalidFilter {
            message: format!("not valid JSON: {}", e),
        })?;

        let Value::Object(fields) = parsed else {
            return Err(ClumioError::InvalidFilter {
                message: "expected a JSON object".to_string(),
            });
        };

        let mut filter = Filter::new();
        for (field, ops) in fields {
            let Value::Object(ops) = ops else {
                return Err(ClumioError::InvalidFilter {
                    message: format!("conditions for '{}' must be an object", field),
                });
            };
            if ops.is_empty() {
                return Err(ClumioError::InvalidFilter {
                    message: format!("no operator given for '{}'", field),
                });
            }
            for (op, value) in ops {
                let op = FilterOp::parse(&op).ok_or_else(|| ClumioError::InvalidFilter {
                    message: format!("unknown operator '{}' on '{}'", op, field),
                })?;
                if op == FilterOp::In && !value.is_array() {
                    return Err(ClumioError::InvalidFilter {
                        message: format!("$in on '{}' needs an array", field),
                    });
                }
                filter = filter.condition(field.clone(), op, value);
            }
        }
        Ok(filter)
    }
}
