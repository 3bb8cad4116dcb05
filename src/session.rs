//! 会话 / 认证上下文
//!
//! 状态只在内存中，持久化的只有 Token。
//!
//! ```text
//! Unknown ──restore──▶ Authenticated(User) ──logout / 401──▶ Unauthenticated
//!    │                                                          │
//!    └────────────── 无 Token / 校验失败 ─────────────────────────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use placement_shared::protocol::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use placement_shared::{Envelope, User, UserProfile};

use crate::client::{ApiClient, AuthObserver, EnvelopeExt};
use crate::error::ApiError;
use crate::request::HttpClient;

#[cfg(test)]
mod tests;

// ===== 状态 =====

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// 启动后尚未完成身份恢复
    Unknown,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

type Listener = Box<dyn Fn(&SessionState)>;

/// 会话状态容器
///
/// 只有状态真正变化时才通知监听者，重复的 401 只会产生一次迁移。
pub struct SessionStore {
    state: RefCell<SessionState>,
    listeners: RefCell<Vec<Listener>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(SessionState::Unknown),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// 监听者回调内不能再调用 `subscribe`
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub(crate) fn set(&self, next: SessionState) {
        if *self.state.borrow() == next {
            return;
        }
        *self.state.borrow_mut() = next.clone();

        for listener in self.listeners.borrow().iter() {
            listener(&next);
        }
    }
}

impl AuthObserver for SessionStore {
    fn on_credentials_revoked(&self) {
        self.set(SessionState::Unauthenticated);
    }
}

// ===== 会话 =====

/// 显式传递的会话上下文，不存在全局状态
///
/// 操作之间不做串行化，后完成的写入生效。
pub struct Session<C: HttpClient> {
    client: Rc<ApiClient<C>>,
    store: Rc<SessionStore>,
}

impl<C: HttpClient> Session<C> {
    pub fn new(client: Rc<ApiClient<C>>) -> Self {
        let store = Rc::new(SessionStore::new());
        let observer = Rc::downgrade(&store);
        client.subscribe(observer);
        Self { client, store }
    }

    pub fn client(&self) -> &Rc<ApiClient<C>> {
        &self.client
    }

    pub fn store(&self) -> &Rc<SessionStore> {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.store.state()
    }

    pub fn user(&self) -> Option<User> {
        self.store.state().user().cloned()
    }

    /// 启动时（或手动重新校验时）根据持久化的 Token 恢复身份
    pub async fn restore(&self) {
        // 空字符串和缺失同等对待，与请求头注入的判断一致
        let stored = self.client.credentials().token();
        if stored.filter(|t| !t.is_empty()).is_none() {
            self.store.set(SessionState::Unauthenticated);
            return;
        }

        match self.client.auth().me().await.and_then(|env| env.into_data()) {
            Ok(user) => {
                log::info!("session restored for {}", user.email);
                self.store.set(SessionState::Authenticated(user));
            }
            Err(e) => {
                log::warn!("session restore failed: {}", e);
                self.client.credentials().clear();
                self.store.set(SessionState::Unauthenticated);
            }
        }
    }

    /// 成功时保存 Token 并设置用户；失败时不修改任何状态
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.client.auth().login(&req).await;
        self.accept("login", result)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        let req = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.client.auth().register(&req).await;
        self.accept("register", result)
    }

    /// 不请求后端，不会失败
    pub fn logout(&self) {
        self.client.credentials().clear();
        self.store.set(SessionState::Unauthenticated);
    }

    /// 成功后用后端返回的用户替换会话中的用户
    pub async fn update_profile(&self, profile: &UserProfile) -> Result<User, ApiError> {
        let user = self
            .client
            .auth()
            .update_profile(profile)
            .await?
            .into_data()?;
        self.store.set(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        let req = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        self.client.auth().change_password(&req).await?.into_success()
    }

    /// Token 和用户必须同时存在，且 Token 写入成功才提交
    fn accept(&self, action: &str, result: Result<Envelope<User>, ApiError>) -> bool {
        let env = match result {
            Ok(env) => env,
            Err(e) => {
                log::warn!("{} failed: {}", action, e);
                return false;
            }
        };

        if !env.success {
            log::warn!(
                "{} rejected: {}",
                action,
                env.message.as_deref().unwrap_or("no message")
            );
            return false;
        }

        match (env.token.filter(|t| !t.is_empty()), env.data) {
            (Some(token), Some(user)) => {
                if !self.client.credentials().set_token(&token) {
                    log::warn!("{} succeeded but token could not be stored", action);
                    return false;
                }
                log::info!("{} succeeded for {}", action, user.email);
                self.store.set(SessionState::Authenticated(user));
                true
            }
            _ => {
                log::warn!("{} response missing token or user", action);
                false
            }
        }
    }
}
