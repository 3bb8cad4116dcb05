//! 应用路由表

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Register,
    Dashboard,
    Applications,
    AiTools,
    Analytics,
    Settings,
    NotFound,
}

impl AppRoute {
    /// 侧边栏导航顺序
    pub const NAVIGATION: [AppRoute; 5] = [
        AppRoute::Dashboard,
        AppRoute::Applications,
        AppRoute::AiTools,
        AppRoute::Analytics,
        AppRoute::Settings,
    ];

    /// 忽略查询串、片段和结尾的 `/`；`/` 等同于 `/login`
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        match path {
            "" | "/login" => AppRoute::Login,
            "/register" => AppRoute::Register,
            "/dashboard" => AppRoute::Dashboard,
            "/applications" => AppRoute::Applications,
            "/ai-tools" => AppRoute::AiTools,
            "/analytics" => AppRoute::Analytics,
            "/settings" => AppRoute::Settings,
            _ => AppRoute::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Applications => "/applications",
            AppRoute::AiTools => "/ai-tools",
            AppRoute::Analytics => "/analytics",
            AppRoute::Settings => "/settings",
            AppRoute::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Login => "Sign in",
            AppRoute::Register => "Create account",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Applications => "Applications",
            AppRoute::AiTools => "AI Tools",
            AppRoute::Analytics => "Analytics",
            AppRoute::Settings => "Settings",
            AppRoute::NotFound => "Page not found",
        }
    }

    /// 需要登录才能访问（在仪表盘布局内渲染）
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            AppRoute::Dashboard
                | AppRoute::Applications
                | AppRoute::AiTools
                | AppRoute::Analytics
                | AppRoute::Settings
        )
    }

    /// 已登录时不应再显示的页面
    pub fn is_guest_only(&self) -> bool {
        matches!(self, AppRoute::Login | AppRoute::Register)
    }
}
