//! 认证模块
//!
//! 会话逻辑在核心库的 `Session` 中，这里只负责把它接入 Leptos：
//! - 会话状态镜像到信号，供路由守卫和页面读取
//! - `Session` 本身（`Rc`，非 `Send`）放在本地存储的 `StoredValue` 中

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_shared::User;
use placement_tracker::{ApiClient, ClientConfig, Session, SessionState};

use crate::web::{BrowserNavigator, FetchHttpClient, TokenStorage};

pub type AppClient = ApiClient<FetchHttpClient>;
pub type AppSession = Session<FetchHttpClient>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    session: StoredValue<Rc<AppSession>, LocalStorage>,
}

impl AuthContext {
    /// 创建客户端与会话，并把会话状态变化同步到信号
    pub fn new() -> Self {
        let config = ClientConfig::from_override(option_env!("API_BASE_URL"));
        log::info!("api base url: {}", config.base_url);

        let client = Rc::new(ApiClient::new(
            FetchHttpClient,
            config,
            Rc::new(TokenStorage),
            Rc::new(BrowserNavigator),
        ));
        let session = Rc::new(Session::new(client));

        let (state, set_state) = signal(session.state());
        session
            .store()
            .subscribe(move |next| set_state.set(next.clone()));

        Self {
            state,
            session: StoredValue::new_local(session),
        }
    }

    pub fn session(&self) -> Rc<AppSession> {
        self.session.get_value()
    }

    pub fn client(&self) -> Rc<AppClient> {
        self.session.get_value().client().clone()
    }

    pub fn state_signal(&self) -> Signal<SessionState> {
        let state = self.state;
        Signal::derive(move || state.get())
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 启动时根据持久化的 Token 恢复会话
pub fn init_auth(ctx: &AuthContext) {
    let session = ctx.session();
    spawn_local(async move {
        session.restore().await;
    });
}

/// 登录；导航由路由守卫在状态变化后自动完成
pub async fn login(ctx: &AuthContext, email: String, password: String) -> bool {
    ctx.session().login(&email, &password).await
}

pub async fn register(ctx: &AuthContext, name: String, email: String, password: String) -> bool {
    ctx.session().register(&name, &email, &password).await
}

/// 注销并清除 Token，不请求后端
pub fn logout(ctx: &AuthContext) {
    ctx.session().logout();
}
