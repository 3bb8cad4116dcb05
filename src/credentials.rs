use std::cell::RefCell;

/// Bearer Token 的持久化位置
///
/// 浏览器里是 LocalStorage 的 `token` 键；原生环境和测试使用内存实现。
/// 读取不会失败：存储不可用时等同于没有 Token。
/// 写入返回是否真正落盘，调用方据此决定是否进入已登录状态。
pub trait CredentialStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> bool;
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) -> bool {
        *self.token.borrow_mut() = Some(token.to_string());
        true
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
