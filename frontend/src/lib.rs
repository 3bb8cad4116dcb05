//! PlacementTracker 前端应用
//!
//! 核心逻辑（HTTP 适配器、会话、路由守卫、页面动作）都在 `placement-tracker` 中，
//! 这里只负责把它们接入浏览器和 Leptos：
//! - `web`: 浏览器原生 API 封装（fetch、LocalStorage、History、剪贴板）
//! - `auth`: 会话状态到信号的桥接
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod ai_tools;
    pub mod analytics;
    pub mod applications;
    mod charts;
    pub mod dashboard;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod not_found;
    pub mod register;
    pub mod settings;
    pub mod toast;
}

// 原生 Web API 封装模块
// 直接使用 web_sys，替代 gloo-net / gloo-storage 等 crate，以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod export;
    mod http;
    mod navigator;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use navigator::BrowserNavigator;
    pub use storage::TokenStorage;
}

use leptos::prelude::*;
use placement_tracker::AppRoute;

use crate::auth::{AuthContext, init_auth};
use crate::components::ai_tools::AiToolsPage;
use crate::components::analytics::AnalyticsPage;
use crate::components::applications::ApplicationsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::layout::DashboardLayout;
use crate::components::login::LoginPage;
use crate::components::not_found::NotFoundPage;
use crate::components::register::RegisterPage;
use crate::components::settings::SettingsPage;
use crate::components::toast::{ToastRegion, Toaster};
use crate::web::router::{Router, RouterOutlet};

fn protected_page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Applications => view! { <ApplicationsPage /> }.into_any(),
        AppRoute::AiTools => view! { <AiToolsPage /> }.into_any(),
        AppRoute::Analytics => view! { <AnalyticsPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        _ => view! { <DashboardPage /> }.into_any(),
    }
}

/// 路由匹配函数
///
/// 只会收到守卫放行的路由，受保护页面统一包在 `DashboardLayout` 中。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
        protected => view! { <DashboardLayout>{protected_page(protected)}</DashboardLayout> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 通知区域，页面动作通过它报告结果
    provide_context(Toaster::new());

    // 2. 创建认证上下文（客户端 + 会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 3. 根据持久化的 Token 恢复会话
    init_auth(&auth_ctx);

    view! {
        // 4. 路由器只依赖会话状态信号
        <Router session=auth_ctx.state_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <ToastRegion />
    }
}
