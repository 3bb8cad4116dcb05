use std::cell::RefCell;
use std::rc::{Rc, Weak};

use placement_shared::protocol::{ApiRequest, Empty};
use placement_shared::{CONTENT_TYPE_JSON, Envelope, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};
use url::Url;

use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::error::ApiError;
use crate::request::{HttpClient, HttpRequest, HttpResponse};

#[cfg(test)]
mod tests;

// =========================================================
// 注入点 (Collaborators)
// =========================================================

/// 401 后的整页跳转
pub trait Navigator {
    fn redirect_to_login(&self);
}

/// 不做任何跳转（原生环境）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self) {}
}

/// 关心凭证被吊销的一方（会话）
pub trait AuthObserver {
    fn on_credentials_revoked(&self);
}

// =========================================================
// 信封解包 (Envelope unwrapping)
// =========================================================

pub trait EnvelopeExt<T> {
    /// `success` 为真且带有 `data`
    fn into_data(self) -> Result<T, ApiError>;
    /// 只关心 `success`
    fn into_success(self) -> Result<(), ApiError>;
}

impl<T> EnvelopeExt<T> for Envelope<T> {
    fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Unsuccessful {
                message: self.message,
            });
        }
        self.data.ok_or(ApiError::MissingData)
    }

    fn into_success(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Unsuccessful {
                message: self.message,
            })
        }
    }
}

// =========================================================
// HTTP 适配器 (ApiClient)
// =========================================================

/// 全应用共享的唯一 HTTP 适配器
///
/// - 请求拦截：凭证存在时附加 `Authorization: Bearer <token>`
/// - 响应拦截：401 时清除凭证、通知观察者并跳转登录页，然后把错误交还调用方
pub struct ApiClient<C: HttpClient> {
    http: C,
    config: ClientConfig,
    credentials: Rc<dyn CredentialStore>,
    navigator: Rc<dyn Navigator>,
    observers: RefCell<Vec<Weak<dyn AuthObserver>>>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(
        http: C,
        config: ClientConfig,
        credentials: Rc<dyn CredentialStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            http,
            config,
            credentials,
            navigator,
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &dyn CredentialStore {
        self.credentials.as_ref()
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// 注册 401 观察者。只保存弱引用，观察者释放后自动移除
    pub fn subscribe(&self, observer: Weak<dyn AuthObserver>) {
        self.observers.borrow_mut().push(observer);
    }

    /// 发送一个端点请求并解析响应信封
    ///
    /// 2xx 一律返回 `Ok(Envelope)`，调用方需自行检查 `success`。
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<Envelope<R::Response>, ApiError> {
        let url = self.endpoint_url(req)?;

        let mut http_req = HttpRequest::new(&url, R::METHOD)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .with_timeout(self.config.timeout);

        if let Some(body) = req.body().map_err(|e| ApiError::Build(e.to_string()))? {
            http_req = http_req.with_body(body);
        }

        let http_req = self.attach_token(http_req);

        log::debug!("{} {}", R::METHOD.as_str(), url);

        let resp = match self.http.send(http_req).await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("{} {} failed: {}", R::METHOD.as_str(), url, e);
                return Err(e);
            }
        };

        self.interpret(resp)
    }

    // ===== 请求拦截 =====

    fn attach_token(&self, req: HttpRequest) -> HttpRequest {
        match self.credentials.token().filter(|t| !t.is_empty()) {
            Some(token) => req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token)),
            None => req,
        }
    }

    // ===== 响应拦截 =====

    fn interpret<T: serde::de::DeserializeOwned>(
        &self,
        resp: HttpResponse,
    ) -> Result<Envelope<T>, ApiError> {
        if resp.status == 401 {
            let message = failure_message(&resp);
            self.revoke_credentials();
            return Err(ApiError::Unauthorized { message });
        }

        if !resp.ok() {
            let status = resp.status;
            return Err(match failure_message(&resp) {
                Some(message) => ApiError::Rejected { status, message },
                None => ApiError::Status { status },
            });
        }

        resp.json()
    }

    fn revoke_credentials(&self) {
        log::warn!("received 401, clearing credentials");
        self.credentials.clear();

        // 通知期间不持有借用，观察者可以再次订阅
        let observers: Vec<Rc<dyn AuthObserver>> = {
            let mut list = self.observers.borrow_mut();
            list.retain(|o| o.strong_count() > 0);
            list.iter().filter_map(Weak::upgrade).collect()
        };
        for observer in observers {
            observer.on_credentials_revoked();
        }

        self.navigator.redirect_to_login();
    }

    // ===== URL 构造 =====

    fn endpoint_url<R: ApiRequest>(&self, req: &R) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::Build(format!("invalid base url: {}", e)))?;

        let mut params = req.path_params().into_iter();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::Build("base url cannot carry a path".to_string()))?;
            segments.pop_if_empty();

            for part in R::PATH.split('/').filter(|s| !s.is_empty()) {
                if part.starts_with(':') {
                    let value = params
                        .next()
                        .ok_or_else(|| ApiError::Build(format!("missing path parameter {}", part)))?;
                    segments.push(value);
                } else {
                    segments.push(part);
                }
            }
        }

        let query = req.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url.to_string())
    }
}

/// 非 2xx 响应中的 `message`（若响应体是信封）
fn failure_message(resp: &HttpResponse) -> Option<String> {
    resp.json::<Envelope<Empty>>()
        .ok()
        .and_then(|env| env.message)
        .filter(|m| !m.trim().is_empty())
}
