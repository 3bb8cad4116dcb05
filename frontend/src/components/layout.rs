//! 仪表盘布局：侧边栏 + 顶栏 + 受保护内容区

use leptos::prelude::*;
use placement_tracker::AppRoute;

use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::web::router::{Link, use_router};

fn nav_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <Home attr:class="h-4 w-4 shrink-0" /> }.into_any(),
        AppRoute::Applications => view! { <FileText attr:class="h-4 w-4 shrink-0" /> }.into_any(),
        AppRoute::AiTools => view! { <Brain attr:class="h-4 w-4 shrink-0" /> }.into_any(),
        AppRoute::Analytics => view! { <BarChart3 attr:class="h-4 w-4 shrink-0" /> }.into_any(),
        _ => view! { <Settings attr:class="h-4 w-4 shrink-0" /> }.into_any(),
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let router = use_router();
    let (collapsed, set_collapsed) = signal(false);

    view! {
        <aside class=move || {
            if collapsed.get() {
                "flex flex-col h-full bg-base-100 border-r border-base-300 transition-all w-16"
            } else {
                "flex flex-col h-full bg-base-100 border-r border-base-300 transition-all w-64"
            }
        }>
            <div class="flex items-center justify-between p-4">
                <Show when=move || !collapsed.get()>
                    <div class="flex items-center gap-2">
                        <div class="p-1.5 bg-primary rounded-lg text-primary-content">
                            <Target attr:class="h-5 w-5" />
                        </div>
                        <span class="text-lg font-bold text-primary">"PlacementTracker"</span>
                    </div>
                </Show>
                <button
                    class="btn btn-ghost btn-sm btn-square"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() {
                        view! { <ChevronRight attr:class="h-4 w-4" /> }.into_any()
                    } else {
                        view! { <ChevronLeft attr:class="h-4 w-4" /> }.into_any()
                    }}
                </button>
            </div>

            <div class="divider my-0"></div>

            <ul class="menu flex-1 px-3 py-4 gap-1 w-full">
                {AppRoute::NAVIGATION
                    .into_iter()
                    .map(|route| {
                        let class = Signal::derive(move || {
                            if router.current_route().get() == route {
                                "active".to_string()
                            } else {
                                String::new()
                            }
                        });
                        view! {
                            <li>
                                <Link to=route class=class>
                                    {nav_icon(route)}
                                    <Show when=move || !collapsed.get()>
                                        <span>{route.title()}</span>
                                    </Show>
                                </Link>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let name = move || auth.user().map(|u| u.name).unwrap_or_default();
    let email = move || auth.user().map(|u| u.email).unwrap_or_default();
    let initials = move || auth.user().map(|u| u.initials()).unwrap_or_default();

    view! {
        <header class="navbar bg-base-100 border-b border-base-300 px-6">
            <div class="flex-1">
                <h1 class="text-xl font-semibold">{move || router.current_route().get().title()}</h1>
            </div>
            <div class="flex-none gap-3">
                <div class="hidden md:flex flex-col items-end leading-tight">
                    <span class="font-medium">{name}</span>
                    <span class="text-xs text-base-content/60">{email}</span>
                </div>
                <div class="avatar placeholder">
                    <div class="bg-primary text-primary-content rounded-full w-10">
                        <span>{initials}</span>
                    </div>
                </div>
                <button on:click=move |_| logout(&auth) class="btn btn-ghost btn-sm gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </header>
    }
}

/// 只在守卫放行（已认证）后才会被渲染
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="flex h-screen bg-base-200">
            <Sidebar />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-auto p-6">{children()}</main>
            </div>
        </div>
    }
}
