//! 仪表盘和分析页共用的展示组件
//!
//! 只用 daisyUI/Tailwind 画条形图，不引入图表库。

use leptos::prelude::*;
use placement_shared::date::format_date_opt;
use placement_shared::{ApplicationTrend, MonthlyGoal, RecentActivity, StatusDistribution};

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 rounded-box shadow">
            <div class="stat-title">{title}</div>
            <div class="stat-value text-primary">{value}</div>
            <div class="stat-desc">{hint}</div>
        </div>
    }
}

/// 每月申请 / 面试 / Offer 三列条形
#[component]
pub fn TrendBars(#[prop(into)] trends: Signal<Vec<ApplicationTrend>>) -> impl IntoView {
    let peak = move || {
        trends.with(|list| list.iter().map(|t| t.applications).max().unwrap_or(0).max(1))
    };
    let height = move |n: u32| format!("height: {}%", n * 100 / peak());

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Application Trends"</h2>
                <Show
                    when=move || trends.with(|t| !t.is_empty())
                    fallback=|| view! { <p class="text-base-content/60">"No data yet"</p> }
                >
                    <div class="flex items-end gap-4 h-48">
                        <For
                            each=move || trends.get()
                            key=|t| t.month.clone()
                            children=move |t| {
                                view! {
                                    <div class="flex flex-col items-center flex-1 h-full">
                                        <div class="flex items-end gap-1 flex-1 w-full">
                                            <div class="bg-primary flex-1 rounded-t" style=height(t.applications) title="Applications"></div>
                                            <div class="bg-success flex-1 rounded-t" style=height(t.interviews) title="Interviews"></div>
                                            <div class="bg-secondary flex-1 rounded-t" style=height(t.offers) title="Offers"></div>
                                        </div>
                                        <span class="text-xs mt-1">{t.month.clone()}</span>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <div class="flex gap-4 text-xs">
                        <span class="badge badge-primary badge-sm">"Applications"</span>
                        <span class="badge badge-success badge-sm">"Interviews"</span>
                        <span class="badge badge-secondary badge-sm">"Offers"</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn DistributionList(#[prop(into)] distribution: Signal<Vec<StatusDistribution>>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Status Distribution"</h2>
                <Show
                    when=move || distribution.with(|d| !d.is_empty())
                    fallback=|| view! { <p class="text-base-content/60">"No data yet"</p> }
                >
                    <ul class="space-y-3">
                        <For
                            each=move || distribution.get()
                            key=|d| d.status.clone()
                            children=move |d| {
                                let status = d.status_kind();
                                let bar = format!(
                                    "width: {:.0}%; background-color: {}",
                                    d.percentage.clamp(0.0, 100.0),
                                    status.color()
                                );
                                view! {
                                    <li>
                                        <div class="flex justify-between text-sm">
                                            <span>{status.label()}</span>
                                            <span>{format!("{} ({:.1}%)", d.count, d.percentage)}</span>
                                        </div>
                                        <div class="w-full bg-base-200 rounded-full h-2">
                                            <div class="h-2 rounded-full" style=bar></div>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn GoalList(#[prop(into)] goals: Signal<Vec<MonthlyGoal>>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Monthly Goals"</h2>
                <For
                    each=move || goals.get()
                    key=|g| g.month.clone()
                    children=move |g| {
                        view! {
                            <div>
                                <div class="flex justify-between text-sm">
                                    <span>{g.month.clone()}</span>
                                    <span>{format!("{} / {}", g.achieved, g.target)}</span>
                                </div>
                                <progress class="progress progress-primary w-full" value=g.progress() max="100"></progress>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn ActivityList(#[prop(into)] recent: Signal<Vec<RecentActivity>>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Recent Activity"</h2>
                <Show
                    when=move || recent.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="text-base-content/60">"No recent applications"</p> }
                >
                    <ul class="divide-y divide-base-200">
                        <For
                            each=move || recent.get()
                            key=|a| a.id.clone()
                            children=move |a| {
                                view! {
                                    <li class="flex items-center justify-between py-2">
                                        <div>
                                            <p class="font-medium">{a.position.title.clone()}</p>
                                            <p class="text-sm text-base-content/60">{a.company.name.clone()}</p>
                                        </div>
                                        <div class="text-right">
                                            <span class="badge badge-outline">{a.status.label()}</span>
                                            <p class="text-xs text-base-content/60">
                                                {format_date_opt(a.timeline.applied_at.as_ref())}
                                            </p>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}
