//! 401 后的整页跳转

use placement_tracker::{AppRoute, Navigator};

fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// 通过 `window.location` 跳转到登录页（会重新加载应用）
///
/// 已经在登录页时不跳转，避免登录失败的 401 刷新页面。
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect_to_login(&self) {
        let on_login = current_path()
            .map(|p| AppRoute::from_path(&p) == AppRoute::Login)
            .unwrap_or(false);
        if on_login {
            return;
        }

        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(AppRoute::Login.path()) {
                log::error!("redirect to login failed: {:?}", e);
            }
        }
    }
}
