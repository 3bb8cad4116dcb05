//! 客户端错误分类
//!
//! - 传输失败（超时、连接失败）：界面显示通用的失败提示，不重试
//! - 401：由适配器全局拦截（清除 Token 并跳转登录），同时作为错误返回给调用方
//! - 业务 / 校验错误（非 401 且带 `message`）：原样展示给用户
//! - 其他无法解析的错误：回退为通用提示

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// 非 2xx 且响应信封带有 `message`
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// 非 2xx 且无法解析出 `message`
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// 2xx 但 `success == false`
    #[error("{}", message.as_deref().unwrap_or("request was not successful"))]
    Unsuccessful { message: Option<String> },

    #[error("response carried no data")]
    MissingData,

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("request could not be built: {0}")]
    Build(String),
}

impl ApiError {
    /// 对应的 HTTP 状态码（传输层错误没有）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Rejected { status, .. } | ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// 面向用户的文本：后端 `message` 原样返回，否则使用调用方给出的通用提示
    pub fn user_message(&self, fallback: &str) -> String {
        let backend_message = match self {
            ApiError::Rejected { message, .. } => Some(message.as_str()),
            ApiError::Unsuccessful { message } | ApiError::Unauthorized { message } => {
                message.as_deref()
            }
            _ => None,
        };

        backend_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Rejected {
            status: 409,
            message: "User with this email already exists".into(),
        };
        assert_eq!(
            err.user_message("Failed to register"),
            "User with this email already exists"
        );
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(ApiError::Timeout.user_message("Failed"), "Failed");
        assert_eq!(
            ApiError::Network("refused".into()).user_message("Failed"),
            "Failed"
        );
        assert_eq!(
            ApiError::Status { status: 500 }.user_message("Failed"),
            "Failed"
        );
        assert_eq!(
            ApiError::Unsuccessful {
                message: Some("  ".into())
            }
            .user_message("Failed"),
            "Failed"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::Status { status: 502 }.to_string(),
            "request failed with status 502"
        );
        assert_eq!(
            ApiError::Unsuccessful { message: None }.to_string(),
            "request was not successful"
        );
        assert!(ApiError::Unauthorized { message: None }.is_unauthorized());
    }
}
