//! PlacementTracker 客户端核心
//!
//! 与平台无关的部分都在这里：HTTP 适配器、资源门面、会话、路由守卫和页面动作。
//! 浏览器相关的实现（fetch、LocalStorage、页面跳转）由 `placement-frontend` 注入。

pub mod actions;
pub mod api;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod notify;
pub mod request;
pub mod route;
pub mod session;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, AuthObserver, EnvelopeExt, Navigator, NoopNavigator};
pub use config::ClientConfig;
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use error::ApiError;
pub use guard::{GuardOutcome, guard};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use route::AppRoute;
pub use session::{Session, SessionState, SessionStore};

#[cfg(not(target_arch = "wasm32"))]
pub use request::ReqwestHttpClient;

/// 原生环境下的默认客户端：reqwest 传输 + 内存凭证 + 不跳转
#[cfg(not(target_arch = "wasm32"))]
pub fn native_client(config: ClientConfig) -> ApiClient<ReqwestHttpClient> {
    ApiClient::new(
        ReqwestHttpClient::new(),
        config,
        std::rc::Rc::new(MemoryCredentialStore::new()),
        std::rc::Rc::new(NoopNavigator),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_client_starts_signed_out() {
        let client = native_client(ClientConfig::default());
        assert_eq!(client.credentials().token(), None);
        assert_eq!(client.config().base_url, config::DEFAULT_BASE_URL);
    }
}
