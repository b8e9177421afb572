use crate::core::retry::RetryPolicy;
use crate::domain::model::ListParams;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ClumioError, Result};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://us-west-2.api.clumio.com";
pub const API_CLIENT_NAME: &str = "clumio-rust-sdk";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HEADER_API_CLIENT: &str = "x-clumio-api-client";
pub const HEADER_SDK_VERSION: &str = "x-clumio-sdk-version";
pub const HEADER_OU_CONTEXT: &str = "x-clumio-organizationalunit-context";

/// 單一 API 呼叫的描述：路徑樣板、路徑參數、查詢參數與本文
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    template: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    accept: String,
}

impl ApiRequest {
    pub fn new(method: Method, template: impl Into<String>) -> Self {
        Self {
            method,
            template: template.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
            accept: "application/json".to_string(),
        }
    }

    pub fn get(template: impl Into<String>) -> Self {
        Self::new(Method::GET, template)
    }

    pub fn post(template: impl Into<String>) -> Self {
        Self::new(Method::POST, template)
    }

    pub fn put(template: impl Into<String>) -> Self {
        Self::new(Method::PUT, template)
    }

    pub fn patch(template: impl Into<String>) -> Self {
        Self::new(Method::PATCH, template)
    }

    pub fn delete(template: impl Into<String>) -> Self {
        Self::new(Method::DELETE, template)
    }

    pub fn path_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path_params.push((name.into(), value.to_string()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    pub fn list_params(mut self, params: &ListParams) -> Self {
        self.query.extend(params.to_query());
        self
    }

    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn accept(mut self, media_type: impl Into<String>) -> Self {
        self.accept = media_type.into();
        self
    }

    pub fn accept_header(&self) -> &str {
        &self.accept
    }
}

/// 所有 controller 共用的低階 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
    organizational_unit: Option<String>,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClumioError::InvalidConfigValue {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let http = Client::builder()
            .user_agent(format!("{}/{}", API_CLIENT_NAME, SDK_VERSION))
            .build()?;

        let token = token.into();
        Ok(Self {
            http,
            base_url,
            token: if token.is_empty() { None } else { Some(token) },
            organizational_unit: None,
            retry: RetryPolicy::default(),
            timeout: None,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let token = config
            .api_token()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ClumioError::MissingConfig {
                field: "api.token".to_string(),
            })?;

        let mut client = Self::new(config.base_url(), token)?
            .with_retry_policy(config.retry_policy())
            .with_timeout(Duration::from_secs(config.timeout_seconds()));
        if let Some(ou) = config.organizational_unit_context() {
            client = client.with_organizational_unit(ou);
        }
        Ok(client)
    }

    pub fn with_organizational_unit(mut self, ou: impl Into<String>) -> Self {
        let ou = ou.into();
        self.organizational_unit = if ou.is_empty() { None } else { Some(ou) };
        self
    }

    pub fn without_organizational_unit(mut self) -> Self {
        self.organizational_unit = None;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() { None } else { Some(timeout) };
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn organizational_unit(&self) -> Option<&str> {
        self.organizational_unit.as_deref()
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// 將路徑樣板的 `{name}` 片段替換成編碼後的值，並附上查詢參數
    pub fn resolve_url(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| ClumioError::Config {
                message: format!("base URL cannot carry a path: {}", self.base_url),
            })?;
            segments.pop_if_empty();

            for segment in request.template.split('/').filter(|s| !s.is_empty()) {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => {
                        let value = request
                            .path_params
                            .iter()
                            .find(|(key, _)| key == name)
                            .map(|(_, value)| value.as_str())
                            .filter(|value| !value.is_empty())
                            .ok_or_else(|| ClumioError::MissingPathParameter {
                                name: name.to_string(),
                                template: request.template.clone(),
                            })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    /// 解析回應中的 `href`；以 `/` 開頭的連結接在 base URL 的路徑之後
    pub fn resolve_href(&self, href: &str) -> Result<Url> {
        let base_path = self.base_url.path().trim_end_matches('/');
        let root_relative = href.starts_with('/') && !href.starts_with("//");
        if root_relative && !base_path.is_empty() && !href.starts_with(&format!("{}/", base_path)) {
            return Ok(self.base_url.join(&format!("{}{}", base_path, href))?);
        }
        Ok(self.base_url.join(href)?)
    }

    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = self.resolve_url(&request)?;
        let response = self
            .send(request.method.clone(), url, &request.accept, request.body.as_ref())
            .await?;
        Self::decode(response).await
    }

    /// 不解析回應本文 (204、或 202 沒有本文的呼叫)
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<()> {
        let url = self.resolve_url(&request)?;
        self.send(request.method.clone(), url, &request.accept, request.body.as_ref())
            .await?;
        Ok(())
    }

    /// 回應可能有本文也可能沒有 (例如 202 回傳工作，204 表示無事可做)
    pub async fn execute_optional<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Option<T>> {
        let url = self.resolve_url(&request)?;
        let response = self
            .send(request.method.clone(), url, &request.accept, request.body.as_ref())
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    pub async fn execute_url<T: DeserializeOwned>(&self, url: Url, accept: &str) -> Result<T> {
        let response = self.send(Method::GET, url, accept, None).await?;
        Self::decode(response).await
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        accept: &str,
        body: Option<&Value>,
    ) -> Result<Response> {
        let mut attempt = 1;
        loop {
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .header(reqwest::header::ACCEPT, accept)
                .header(HEADER_API_CLIENT, API_CLIENT_NAME)
                .header(HEADER_SDK_VERSION, format!("{}:{}", API_CLIENT_NAME, SDK_VERSION));

            if let Some(ou) = &self.organizational_unit {
                request = request.header(HEADER_OU_CONTEXT, ou);
            }
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
            if let Some(body) = body {
                request = request.json(body);
            }
            if let Some(timeout) = self.timeout {
                request = request.timeout(timeout);
            }

            tracing::debug!("📡 {} {} (attempt {})", method, url, attempt);

            match request.send().await {
                Ok(response) => {
                    tracing::debug!("📡 {} {} -> {}", method, url, response.status());
                    return Self::check_status(response).await;
                }
                Err(e) => {
                    let error = ClumioError::Http(e);
                    if !self.retry.should_retry(&error, attempt) {
                        return Err(error);
                    }
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(
                        "🔁 Connection to {} failed ({}), retrying in {:?} ({}/{})",
                        url,
                        error,
                        delay,
                        attempt,
                        self.retry.max_attempts
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(status, &body);
        tracing::debug!("API error {}: {}", status, message);
        Err(ClumioError::Api {
            status: status.as_u16(),
            message,
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// 從錯誤回應本文取出訊息：errors[].error_message → message → error → 原文 → 狀態碼說明
pub fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(errors) = json.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("error_message").and_then(Value::as_str))
                .filter(|m| !m.is_empty())
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
        for key in ["message", "error"] {
            if let Some(message) = json.get(key).and_then(Value::as_str) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
