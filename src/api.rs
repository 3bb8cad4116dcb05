//! 资源门面 (Resource Facades)
//!
//! 每个方法对应一个端点，返回未解包的 `Envelope`；
//! 不做校验、重试或缓存。

use crate::client::ApiClient;
use crate::request::HttpClient;

mod ai;
mod analytics;
mod applications;
mod auth;
mod health;

#[cfg(test)]
mod tests;

pub use ai::AiApi;
pub use analytics::{AnalyticsApi, DashboardSnapshot, SnapshotQuery};
pub use applications::ApplicationsApi;
pub use auth::AuthApi;
pub use health::HealthApi;

impl<C: HttpClient> ApiClient<C> {
    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi::new(self)
    }

    pub fn applications(&self) -> ApplicationsApi<'_, C> {
        ApplicationsApi::new(self)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_, C> {
        AnalyticsApi::new(self)
    }

    pub fn ai(&self) -> AiApi<'_, C> {
        AiApi::new(self)
    }

    pub fn health(&self) -> HealthApi<'_, C> {
        HealthApi::new(self)
    }
}
