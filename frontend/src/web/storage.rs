//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 替代 `gloo-storage`。

use placement_shared::TOKEN_STORAGE_KEY;
use placement_tracker::CredentialStore;

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 键不存在或存储不可用时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// Bearer Token 持久化在 `localStorage["token"]`
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenStorage;

impl CredentialStore for TokenStorage {
    fn token(&self) -> Option<String> {
        LocalStorage::get(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) -> bool {
        let stored = LocalStorage::set(TOKEN_STORAGE_KEY, token);
        if !stored {
            log::warn!("failed to persist token");
        }
        stored
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}
