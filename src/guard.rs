//! 路由守卫：根据会话状态决定渲染、等待或跳转

use crate::route::AppRoute;
use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 会话尚未恢复，显示加载指示
    Loading,
    Render(AppRoute),
    Redirect(AppRoute),
}

pub fn guard(state: &SessionState, route: AppRoute) -> GuardOutcome {
    match state {
        SessionState::Unknown => GuardOutcome::Loading,
        SessionState::Unauthenticated if route.is_protected() => {
            GuardOutcome::Redirect(AppRoute::Login)
        }
        SessionState::Authenticated(_) if route.is_guest_only() => {
            GuardOutcome::Redirect(AppRoute::Dashboard)
        }
        _ => GuardOutcome::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::user_json;

    fn authenticated() -> SessionState {
        SessionState::Authenticated(serde_json::from_value(user_json()).unwrap())
    }

    #[test]
    fn test_loading_while_unknown() {
        for route in [AppRoute::Login, AppRoute::Dashboard, AppRoute::NotFound] {
            assert_eq!(guard(&SessionState::Unknown, route), GuardOutcome::Loading);
        }
    }

    #[test]
    fn test_protected_routes_redirect_to_login() {
        for route in AppRoute::NAVIGATION {
            assert_eq!(
                guard(&SessionState::Unauthenticated, route),
                GuardOutcome::Redirect(AppRoute::Login)
            );
        }
        assert_eq!(
            guard(&SessionState::Unauthenticated, AppRoute::Register),
            GuardOutcome::Render(AppRoute::Register)
        );
    }

    #[test]
    fn test_guest_pages_redirect_when_signed_in() {
        let state = authenticated();
        assert_eq!(
            guard(&state, AppRoute::Login),
            GuardOutcome::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            guard(&state, AppRoute::Register),
            GuardOutcome::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            guard(&state, AppRoute::Analytics),
            GuardOutcome::Render(AppRoute::Analytics)
        );
    }

    #[test]
    fn test_not_found_renders_for_everyone() {
        assert_eq!(
            guard(&SessionState::Unauthenticated, AppRoute::NotFound),
            GuardOutcome::Render(AppRoute::NotFound)
        );
        assert_eq!(
            guard(&authenticated(), AppRoute::NotFound),
            GuardOutcome::Render(AppRoute::NotFound)
        );
    }
}
