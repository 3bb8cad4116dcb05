use std::time::Duration;

// =========================================================
// 客户端配置 (Client Configuration)
// =========================================================

/// 未配置 `API_BASE_URL` 时使用的后端地址
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const BASE_URL_ENV: &str = "API_BASE_URL";
/// 所有请求共用的超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// 不带结尾 `/` 的绝对地址
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// 空值或缺失时回退到默认地址
    ///
    /// 浏览器端在编译期通过 `option_env!` 取值后调用这里
    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// 运行时读取 `API_BASE_URL`（原生环境）
    pub fn from_env() -> Self {
        let value = std::env::var(BASE_URL_ENV).ok();
        let config = Self::from_override(value.as_deref());
        log::debug!("api base url: {}", config.base_url);
        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_override_trims_trailing_slash() {
        let config = ClientConfig::from_override(Some("https://api.example.com/api/"));
        assert_eq!(config.base_url, "https://api.example.com/api");
    }

    #[test]
    fn test_blank_override_falls_back() {
        assert_eq!(ClientConfig::from_override(Some("  ")), ClientConfig::default());
        assert_eq!(ClientConfig::from_override(None), ClientConfig::default());
    }

    #[test]
    fn test_from_env_matches_override() {
        let value = std::env::var(BASE_URL_ENV).ok();
        assert_eq!(ClientConfig::from_env(), ClientConfig::from_override(value.as_deref()));
    }
}
