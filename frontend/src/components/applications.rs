//! 申请列表页：搜索与状态过滤、列表、新建/编辑对话框、删除

mod application_dialog;
mod form_state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_shared::date::format_date_opt;
use placement_shared::{Application, ApplicationFilter, ApplicationStatus};
use placement_tracker::actions::{delete_application, load_applications};

use self::application_dialog::ApplicationDialog;
use crate::auth::use_auth;
use crate::components::icons::*;
use crate::components::toast::use_toaster;

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message("Are you sure you want to delete this application?")
                .ok()
        })
        .unwrap_or(false)
}

fn status_badge(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Offer | ApplicationStatus::Accepted => "badge badge-success",
        ApplicationStatus::Interview => "badge badge-info",
        ApplicationStatus::Screening => "badge badge-warning",
        ApplicationStatus::Rejected => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (applications, set_applications) = signal(Vec::<Application>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(Option::<ApplicationStatus>::None);

    let (refresh, set_refresh) = signal(0u32);

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Application>::None);

    // 过滤条件变化或写操作完成后重新请求，过滤由后端完成
    Effect::new(move |_| {
        refresh.track();
        let filter = ApplicationFilter {
            company: search.get().trim().to_string(),
            status: status_filter.get(),
        };
        let client = auth.client();
        spawn_local(async move {
            if let Some(list) = load_applications(&client, &filter, &toaster).await {
                set_applications.set(list);
            }
            set_loading.set(false);
        });
    });

    let open_new = move |_| {
        editing.set(None);
        dialog_open.set(true);
    };

    let open_edit = move |app: Application| {
        editing.set(Some(app));
        dialog_open.set(true);
    };

    let reload = move || set_refresh.update(|n| *n += 1);

    // 新建、编辑、添加备注都以后端列表为准
    let on_saved = move |_: Application| reload();

    let handle_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        let client = auth.client();
        spawn_local(async move {
            if delete_application(&client, &id, &toaster).await {
                reload();
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-2xl font-bold">"Applications"</h2>
                    <p class="text-base-content/70">"Track and manage your job applications"</p>
                </div>
                <button class="btn btn-primary gap-2" on:click=open_new>
                    <Plus attr:class="h-4 w-4" /> "Add Application"
                </button>
            </div>

            <div class="flex items-center gap-4">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search attr:class="h-4 w-4 opacity-60" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search by company..."
                        on:change=move |ev| set_search.set(event_target_value(&ev))
                        prop:value=search
                    />
                </label>
                <select
                    class="select select-bordered w-48"
                    on:change=move |ev| {
                        set_status_filter.set(ApplicationStatus::from_str_opt(&event_target_value(&ev)))
                    }
                >
                    <option value="">"All Status"</option>
                    {ApplicationStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center p-12">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <Show
                    when=move || !applications.with(Vec::is_empty)
                    fallback=|| view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body items-center text-center">
                                <FileText attr:class="h-12 w-12 opacity-40" />
                                <p>"No applications yet. Add your first one!"</p>
                            </div>
                        </div>
                    }
                >
                    <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Company"</th>
                                    <th>"Position"</th>
                                    <th>"Status"</th>
                                    <th>"Priority"</th>
                                    <th>"Applied"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || applications.get()
                                    key=|a| a.id.clone()
                                    children=move |app| {
                                        let id = app.id.clone();
                                        // 同一 id 的行复用，字段从最新列表读取
                                        let row = Memo::new(move |_| {
                                            applications
                                                .with(|list| list.iter().find(|a| a.id == app.id).cloned())
                                                .unwrap_or_else(|| app.clone())
                                        });
                                        let location = move || {
                                            row.with(|a| {
                                                a.company
                                                    .location
                                                    .as_ref()
                                                    .map(|l| l.display())
                                                    .unwrap_or_default()
                                            })
                                        };
                                        view! {
                                            <tr class="hover">
                                                <td>
                                                    <div class="font-bold">{move || row.with(|a| a.company.name.clone())}</div>
                                                    <div class="text-sm opacity-60">{location}</div>
                                                </td>
                                                <td>{move || row.with(|a| a.position.title.clone())}</td>
                                                <td>
                                                    <span class=move || status_badge(row.with(|a| a.status))>
                                                        {move || row.with(|a| a.status.label())}
                                                    </span>
                                                </td>
                                                <td>{move || row.with(|a| a.priority.label())}</td>
                                                <td>{move || row.with(|a| format_date_opt(a.timeline.applied_at.as_ref()))}</td>
                                                <td class="flex gap-1 justify-end">
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square"
                                                        on:click=move |_| open_edit(row.get())
                                                    >
                                                        <Pencil attr:class="h-4 w-4" />
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                        on:click=move |_| handle_delete(id.clone())
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>

            <ApplicationDialog open=dialog_open editing=editing on_saved=on_saved />
        </div>
    }
}
