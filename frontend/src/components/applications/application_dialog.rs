//! 新建 / 编辑申请对话框

use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_shared::{Application, ApplicationForm, ApplicationStatus, NoteInput, Priority};
use placement_shared::date::format_date_opt;
use placement_tracker::actions::{add_note, save_application};

use super::form_state::FormState;
use crate::auth::use_auth;
use crate::components::toast::use_toaster;

const POSITION_TYPES: [(&str, &str); 5] = [
    ("full-time", "Full Time"),
    ("part-time", "Part Time"),
    ("internship", "Internship"),
    ("contract", "Contract"),
    ("freelance", "Freelance"),
];

const POSITION_LEVELS: [(&str, &str); 6] = [
    ("entry", "Entry"),
    ("junior", "Junior"),
    ("mid", "Mid"),
    ("senior", "Senior"),
    ("lead", "Lead"),
    ("manager", "Manager"),
];

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type="text"
                placeholder=placeholder
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[component]
fn OptionSelect(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select select-bordered w-full"
                on:change=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
            >
                {options
                    .iter()
                    .map(|(v, l)| view! { <option value=*v>{*l}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// 编辑时显示已有备注并允许追加
#[component]
fn NotesSection(
    editing: RwSignal<Option<Application>>,
    on_saved: Callback<Application>,
) -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let (content, set_content) = signal(String::new());

    let on_add = move |_| {
        let text = content.get().trim().to_string();
        let Some(id) = editing.with_untracked(|e| e.as_ref().map(|a| a.id.clone())) else {
            return;
        };
        if text.is_empty() {
            return;
        }
        let client = auth.client();
        spawn_local(async move {
            let note = NoteInput {
                content: text,
                kind: None,
            };
            if let Some(app) = add_note(&client, &id, &note, &toaster).await {
                on_saved.run(app.clone());
                editing.set(Some(app));
                set_content.set(String::new());
            }
        });
    };

    view! {
        <div class="space-y-2">
            <h4 class="font-semibold">"Notes"</h4>
            <ul class="space-y-1 text-sm">
                {move || {
                    editing
                        .get()
                        .map(|app| app.notes)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|note| view! {
                            <li class="bg-base-200 rounded p-2">
                                <p>{note.content}</p>
                                <p class="text-xs text-base-content/60">
                                    {format_date_opt(note.created_at.as_ref())}
                                </p>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
            <div class="join w-full">
                <input
                    type="text"
                    placeholder="Add a note..."
                    class="input input-bordered input-sm join-item flex-1"
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                    prop:value=content
                />
                <button type="button" class="btn btn-sm join-item" on:click=on_add>"Add"</button>
            </div>
        </div>
    }
}

#[component]
pub fn ApplicationDialog(
    open: RwSignal<bool>,
    editing: RwSignal<Option<Application>>,
    #[prop(into)] on_saved: Callback<Application>,
) -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let state = FormState::new();
    let (saving, set_saving) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // 打开时根据是否在编辑回填或重置
    Effect::new(move |_| {
        if open.get() {
            match editing.get_untracked() {
                Some(app) => state.load(&ApplicationForm::from(&app)),
                None => state.reset(),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);

        let form = state.to_form();
        let id = editing.with_untracked(|e| e.as_ref().map(|a| a.id.clone()));
        let client = auth.client();
        spawn_local(async move {
            if let Some(app) = save_application(&client, id.as_deref(), &form, &toaster).await {
                on_saved.run(app);
                open.set(false);
            }
            set_saving.set(false);
        });
    };

    let type_value = state.position_type;
    let level_value = state.position_level;

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">
                    {move || if editing.with(Option::is_some) { "Edit Application" } else { "Add New Application" }}
                </h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <div class="grid grid-cols-2 gap-4">
                        <TextField id="company_name" label="Company Name" value=state.company_name required=true />
                        <TextField id="position_title" label="Position Title" value=state.position_title required=true />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Status"</span></label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    if let Some(s) = ApplicationStatus::from_str_opt(&event_target_value(&ev)) {
                                        state.status.set(s);
                                    }
                                }
                                prop:value=move || state.status.get().as_str()
                            >
                                {ApplicationStatus::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Priority"</span></label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    if let Some(p) = Priority::from_str_opt(&event_target_value(&ev)) {
                                        state.priority.set(p);
                                    }
                                }
                                prop:value=move || state.priority.get().as_str()
                            >
                                {Priority::ALL
                                    .into_iter()
                                    .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <OptionSelect label="Position Type" options=&POSITION_TYPES value=type_value />
                        <OptionSelect label="Level" options=&POSITION_LEVELS value=level_value />
                    </div>

                    <div class="grid grid-cols-3 gap-4">
                        <TextField id="city" label="City" value=state.city />
                        <TextField id="state" label="State" value=state.region />
                        <TextField id="country" label="Country" value=state.country />
                    </div>

                    <div class="grid grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Min Salary"</span></label>
                            <input
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                on:input=move |ev| state.salary_min.set(event_target_value(&ev).parse().unwrap_or(0))
                                prop:value=move || state.salary_min.get().to_string()
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Max Salary"</span></label>
                            <input
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                on:input=move |ev| state.salary_max.set(event_target_value(&ev).parse().unwrap_or(0))
                                prop:value=move || state.salary_max.get().to_string()
                            />
                        </div>
                        <TextField id="currency" label="Currency" value=state.currency />
                    </div>

                    <TextField id="website" label="Company Website" value=state.company_website placeholder="https://" />
                    <TextField id="job_url" label="Job Posting URL" value=state.job_posting_url placeholder="https://" />

                    <Show when=move || editing.with(Option::is_some)>
                        <NotesSection editing=editing on_saved=on_saved />
                    </Show>

                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| open.set(false)>"Cancel"</button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() {
                                view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                            } else if editing.with(Option::is_some) {
                                "Update Application".into_any()
                            } else {
                                "Add Application".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
