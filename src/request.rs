use placement_shared::protocol::HttpMethod;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::ApiError;

#[cfg(test)]
use std::cell::RefCell;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
    /// 由适配器统一设置，具体传输层负责执行
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// 按名称查找请求头（大小写不敏感）
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// HTTP 客户端特性 (Trait)
///
/// 浏览器中的 fetch 返回的 Future 不是 Send 的，因此使用 `?Send`。
/// 实现只负责传输：网络失败映射为 `ApiError::Network`，超时映射为 `ApiError::Timeout`，
/// 任何状态码都作为 `Ok(HttpResponse)` 返回，由适配器解释。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// =========================================================
// 实现层: reqwest 客户端 (Native)
// =========================================================

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &req.url);

        for (k, v) in &req.headers {
            builder = builder.header(k, v);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = req.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await.map_err(map_reqwest_error)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(map_reqwest_error)?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_builder() {
        ApiError::Build(e.to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
#[derive(Clone)]
pub enum MockReply {
    Response(u16, String),
    NetworkError,
    Timeout,
}

#[cfg(test)]
type MockHandler = Box<dyn Fn(&HttpRequest) -> Option<MockReply>>;

#[cfg(test)]
pub struct MockHttpClient {
    // ("METHOD url", reply)
    responses: RefCell<HashMap<String, MockReply>>,
    // 优先于固定响应，用于回显类场景
    handler: RefCell<Option<MockHandler>>,
    // 记录发出的请求
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            handler: RefCell::new(None),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method.as_str(), url)
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.responses.borrow_mut().insert(
            Self::key(method, url),
            MockReply::Response(status, body.to_string()),
        );
    }

    pub fn mock_reply(&self, method: HttpMethod, url: &str, reply: MockReply) {
        self.responses
            .borrow_mut()
            .insert(Self::key(method, url), reply);
    }

    pub fn set_handler(&self, handler: impl Fn(&HttpRequest) -> Option<MockReply> + 'static) {
        *self.handler.borrow_mut() = Some(Box::new(handler));
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(req.clone());

        let handled = self.handler.borrow().as_ref().and_then(|h| h(&req));
        let reply = handled.or_else(|| {
            self.responses
                .borrow()
                .get(&Self::key(req.method, &req.url))
                .cloned()
        });

        match reply {
            Some(MockReply::Response(status, body)) => Ok(HttpResponse { status, body }),
            Some(MockReply::NetworkError) => Err(ApiError::Network("connection refused".into())),
            Some(MockReply::Timeout) => Err(ApiError::Timeout),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = HttpRequest::new("http://x/a", HttpMethod::Get)
            .with_header("Authorization", "Bearer abc");
        assert_eq!(req.header("authorization"), Some("Bearer abc"));
        assert_eq!(req.header("x-missing"), None);
    }

    #[test]
    fn test_response_json_decode_error() {
        let resp = HttpResponse {
            status: 200,
            body: "<html>".into(),
        };
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(resp.ok());
    }

    #[tokio::test]
    async fn test_reqwest_client_reports_unreachable_backend() {
        let client = ReqwestHttpClient::new();
        let req = HttpRequest::new("http://127.0.0.1:1/api/health", HttpMethod::Get)
            .with_timeout(Duration::from_secs(2));
        let err = client.send(req).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_) | ApiError::Timeout));
    }
}
