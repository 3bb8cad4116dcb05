use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_tracker::actions::load_dashboard;
use placement_tracker::api::DashboardSnapshot;

use crate::auth::use_auth;
use crate::components::charts::{ActivityList, DistributionList, StatCard, TrendBars};
use crate::components::icons::RefreshCw;
use crate::components::toast::use_toaster;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (snapshot, set_snapshot) = signal(DashboardSnapshot::default());
    let (loading, set_loading) = signal(true);
    let (refresh, set_refresh) = signal(0u32);

    // 挂载和手动刷新时加载；任一请求失败则保留原有数据并提示
    Effect::new(move |_| {
        refresh.track();
        let client = auth.client();
        spawn_local(async move {
            if let Some(data) = load_dashboard(&client, &toaster).await {
                set_snapshot.set(data);
            }
            set_loading.set(false);
        });
    });

    let stats = move || snapshot.with(|s| s.stats.clone());

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="flex justify-center p-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold">
                        {move || match auth.user() {
                            Some(user) => format!("Welcome back, {}!", user.name),
                            None => "Welcome back!".to_string(),
                        }}
                    </h2>
                    <button class="btn btn-ghost btn-sm gap-2" on:click=move |_| set_refresh.update(|n| *n += 1)>
                        <RefreshCw attr:class="h-4 w-4" /> "Refresh"
                    </button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard
                        title="Total Applications"
                        value=Signal::derive(move || stats().total_applications.to_string())
                    />
                    <StatCard
                        title="Active Applications"
                        value=Signal::derive(move || stats().active_applications.to_string())
                        hint="In progress"
                    />
                    <StatCard
                        title="Interviews"
                        value=Signal::derive(move || stats().interviews_scheduled.to_string())
                    />
                    <StatCard
                        title="Offers"
                        value=Signal::derive(move || stats().offers_received.to_string())
                        hint="Received"
                    />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <TrendBars trends=Signal::derive(move || snapshot.with(|s| s.trends.clone())) />
                    <DistributionList distribution=Signal::derive(move || snapshot.with(|s| s.distribution.clone())) />
                </div>

                <ActivityList recent=Signal::derive(move || snapshot.with(|s| s.recent.clone())) />
            </div>
        </Show>
    }
}
