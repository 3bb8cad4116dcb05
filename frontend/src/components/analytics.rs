use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_tracker::actions::load_analytics;
use placement_tracker::api::DashboardSnapshot;

use crate::auth::use_auth;
use crate::components::charts::{ActivityList, DistributionList, GoalList, StatCard, TrendBars};
use crate::components::toast::use_toaster;

const TIME_RANGES: [u32; 3] = [3, 6, 12];
const DEFAULT_RANGE: u32 = 6;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (months, set_months) = signal(DEFAULT_RANGE);
    let (snapshot, set_snapshot) = signal(DashboardSnapshot::default());
    let (loading, set_loading) = signal(true);

    // 时间范围变化时重新加载
    Effect::new(move |_| {
        let months = months.get();
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            if let Some(data) = load_analytics(&client, months, &toaster).await {
                set_snapshot.set(data);
            }
            set_loading.set(false);
        });
    });

    let stats = move || snapshot.with(|s| s.stats.clone());

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold">"Analytics"</h2>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        if let Ok(m) = event_target_value(&ev).parse::<u32>() {
                            set_months.set(m);
                        }
                    }
                    prop:value=move || months.get().to_string()
                >
                    {TIME_RANGES
                        .into_iter()
                        .map(|m| view! { <option value=m.to_string()>{format!("Last {} months", m)}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || loading.get()>
                <progress class="progress progress-primary w-full"></progress>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard
                    title="Total Applications"
                    value=Signal::derive(move || stats().total_applications.to_string())
                />
                <StatCard
                    title="Acceptance Rate"
                    value=Signal::derive(move || format!("{:.1}%", stats().acceptance_rate))
                />
                <StatCard
                    title="Avg. Response Time"
                    value=Signal::derive(move || format!("{:.1}", stats().average_response_time))
                    hint="days"
                />
                <StatCard
                    title="Offers"
                    value=Signal::derive(move || stats().offers_received.to_string())
                />
            </div>

            <TrendBars trends=Signal::derive(move || snapshot.with(|s| s.trends.clone())) />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <GoalList goals=Signal::derive(move || snapshot.with(|s| s.goals.clone())) />
                <DistributionList distribution=Signal::derive(move || snapshot.with(|s| s.distribution.clone())) />
            </div>

            <ActivityList recent=Signal::derive(move || snapshot.with(|s| s.recent.clone())) />
        </div>
    }
}
