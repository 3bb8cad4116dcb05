//! PlacementTracker 前后端共享的数据模型
//!
//! - 顶层：常量、统一响应信封 `Envelope`、用户模型
//! - `application`: 求职申请相关模型
//! - `analytics`: 统计分析模型
//! - `ai`: AI 生成接口的请求/响应
//! - `protocol`: 端点协议（`ApiRequest`）
//! - `date`: 时间显示辅助

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod ai;
pub mod analytics;
pub mod application;
pub mod date;
pub mod protocol;

pub use ai::*;
pub use analytics::*;
pub use application::*;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化 Bearer Token 的固定键
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 响应信封 (Envelope)
// =========================================================

/// 后端统一响应包装 `{ success, data?, token?, message? }`
///
/// 调用方必须先检查 `success` 再信任 `data`。
/// `message` 是唯一面向用户的错误文本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 字段级校验错误（字段名 -> 描述）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,
}

// `#[serde(default)]` 会要求 `T: Default`，这里手动给出 None
fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    /// 仅当 `success` 为真且携带数据时返回数据
    pub fn success_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

// =========================================================
// 用户 (User)
// =========================================================

/// 后端返回的身份记录，客户端只做存在性检查
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_true", alias = "isActive")]
    pub is_active: bool,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_role() -> String {
    "user".to_string()
}

fn default_true() -> bool {
    true
}

impl User {
    /// 头像占位用的首字母
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// 个人资料（设置页可编辑部分）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_backend_keys() {
        let json = r#"{
            "_id": "64b1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "role": "admin",
            "is_active": true,
            "created_at": "2024-01-15T10:00:00+00:00",
            "updated_at": "2024-01-15T10:00:00+00:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "64b1");
        assert_eq!(user.role, "admin");
        assert!(user.created_at.is_some());
        assert_eq!(user.initials(), "AL");
    }

    #[test]
    fn test_user_accepts_camel_case_keys() {
        let json = r#"{"id":"1","name":"a","email":"a@b.c","isActive":false}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "1");
        assert!(!user.is_active);
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_envelope_without_data() {
        let env: Envelope<User> =
            serde_json::from_str(r#"{"success":false,"message":"Invalid email or password"}"#)
                .unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Invalid email or password"));
        assert!(env.success_data().is_none());
    }

    #[test]
    fn test_envelope_validation_errors() {
        let env: Envelope<User> = serde_json::from_str(
            r#"{"success":false,"message":"Validation failed","errors":{"name":"too short"}}"#,
        )
        .unwrap();
        assert_eq!(env.errors.unwrap().get("name").map(String::as_str), Some("too short"));
    }
}
