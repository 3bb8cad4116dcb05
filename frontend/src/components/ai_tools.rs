//! AI 工具页：求职信、简历分析、面试准备
//!
//! 三个标签页共用一个输出面板，切换标签不清空已生成的内容。

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_shared::date::file_stamp;
use placement_shared::{CoverLetterRequest, InterviewPrepRequest, ResumeAnalysisRequest};
use placement_tracker::{Notice, NoticeLevel, Notifier};
use placement_tracker::actions::{
    GeneratedContent, analyze_resume, generate_cover_letter, prepare_interview,
};

use crate::auth::use_auth;
use crate::components::icons::*;
use crate::components::toast::use_toaster;
use crate::web::export::{copy_text, download_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    CoverLetter,
    Resume,
    Interview,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::CoverLetter, Tab::Resume, Tab::Interview];

    /// 同时用作下载文件名前缀
    fn slug(&self) -> &'static str {
        match self {
            Tab::CoverLetter => "cover-letter",
            Tab::Resume => "resume",
            Tab::Interview => "interview",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Tab::CoverLetter => "Cover Letter",
            Tab::Resume => "Resume",
            Tab::Interview => "Interview",
        }
    }
}

const INTERVIEW_TYPES: [&str; 6] = ["general", "technical", "behavioral", "phone", "video", "onsite"];

fn opt(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                id=id
                rows="6"
                placeholder=placeholder
                required=required
                class="textarea textarea-bordered w-full"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                type="text"
                placeholder=placeholder
                required=required
                class="input input-bordered w-full"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
            />
        }
        .into_any()
    };

    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            {input}
        </div>
    }
}

#[component]
fn SubmitButton(loading: ReadSignal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary w-full" disabled=move || loading.get()>
            {move || if loading.get() {
                view! { <span class="loading loading-spinner loading-sm"></span> "Generating..." }.into_any()
            } else {
                view! { <Brain attr:class="h-4 w-4" /> {label} }.into_any()
            }}
        </button>
    }
}

#[component]
pub fn AiToolsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (tab, set_tab) = signal(Tab::CoverLetter);
    let (loading, set_loading) = signal(false);
    let (output, set_output) = signal(Option::<GeneratedContent>::None);

    // 求职信
    let cl_company = RwSignal::new(String::new());
    let cl_position = RwSignal::new(String::new());
    let cl_description = RwSignal::new(String::new());
    let cl_experience = RwSignal::new(String::new());

    // 简历分析
    let resume_content = RwSignal::new(String::new());
    let resume_target = RwSignal::new(String::new());

    // 面试准备
    let iv_company = RwSignal::new(String::new());
    let iv_position = RwSignal::new(String::new());
    let iv_type = RwSignal::new("general".to_string());

    let on_cover_letter = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = CoverLetterRequest {
            job_description: cl_description.get(),
            company_name: cl_company.get(),
            position_title: cl_position.get(),
            user_experience: opt(cl_experience.get()),
        };
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            if let Some(content) = generate_cover_letter(&client, &req, &toaster).await {
                set_output.set(Some(content));
            }
            set_loading.set(false);
        });
    };

    let on_resume = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = ResumeAnalysisRequest {
            resume_content: resume_content.get(),
            job_description: opt(resume_target.get()),
        };
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            if let Some(content) = analyze_resume(&client, &req, &toaster).await {
                set_output.set(Some(content));
            }
            set_loading.set(false);
        });
    };

    let on_interview = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = InterviewPrepRequest {
            company_name: iv_company.get(),
            position_title: iv_position.get(),
            interview_type: Some(iv_type.get()),
        };
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            if let Some(content) = prepare_interview(&client, &req, &toaster).await {
                set_output.set(Some(content));
            }
            set_loading.set(false);
        });
    };

    let on_copy = move |_| {
        let Some(content) = output.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match copy_text(&content.text).await {
                Ok(()) => toaster.notify(Notice::new(
                    NoticeLevel::Success,
                    "Copied!",
                    "Content copied to clipboard",
                )),
                Err(e) => log::error!("clipboard write failed: {:?}", e),
            }
        });
    };

    let on_download = move |_| {
        let Some(content) = output.get_untracked() else {
            return;
        };
        let filename = format!("{}-{}.txt", tab.get_untracked().slug(), file_stamp(&Utc::now()));
        if let Err(e) = download_text(&filename, &content.text) {
            log::error!("download failed: {:?}", e);
        }
    };

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold">"AI Tools"</h2>
                <p class="text-base-content/70">"Generate cover letters, analyze resumes and prepare for interviews"</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div role="tablist" class="tabs tabs-boxed">
                            {Tab::ALL
                                .into_iter()
                                .map(|t| view! {
                                    <a
                                        role="tab"
                                        class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                                        on:click=move |_| set_tab.set(t)
                                    >
                                        {t.label()}
                                    </a>
                                })
                                .collect_view()}
                        </div>

                        <Show when=move || tab.get() == Tab::CoverLetter>
                            <form class="space-y-4 mt-4" on:submit=on_cover_letter>
                                <div class="grid grid-cols-2 gap-4">
                                    <Field id="companyName" label="Company Name" value=cl_company required=true />
                                    <Field id="positionTitle" label="Position Title" value=cl_position required=true />
                                </div>
                                <Field id="jobDescription" label="Job Description" value=cl_description multiline=true required=true />
                                <Field
                                    id="userExperience"
                                    label="Your Experience (Optional)"
                                    value=cl_experience
                                    multiline=true
                                    placeholder="Briefly describe your relevant experience..."
                                />
                                <SubmitButton loading=loading label="Generate Cover Letter" />
                            </form>
                        </Show>

                        <Show when=move || tab.get() == Tab::Resume>
                            <form class="space-y-4 mt-4" on:submit=on_resume>
                                <Field
                                    id="resumeContent"
                                    label="Resume Content"
                                    value=resume_content
                                    multiline=true
                                    required=true
                                    placeholder="Paste your resume content here..."
                                />
                                <Field
                                    id="targetJobDescription"
                                    label="Target Job Description (Optional)"
                                    value=resume_target
                                    multiline=true
                                    placeholder="Paste the job description to get targeted feedback..."
                                />
                                <SubmitButton loading=loading label="Analyze Resume" />
                            </form>
                        </Show>

                        <Show when=move || tab.get() == Tab::Interview>
                            <form class="space-y-4 mt-4" on:submit=on_interview>
                                <Field id="interviewCompanyName" label="Company Name" value=iv_company required=true />
                                <Field id="interviewPositionTitle" label="Position Title" value=iv_position required=true />
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Interview Type"</span></label>
                                    <select
                                        class="select select-bordered w-full"
                                        on:change=move |ev| iv_type.set(event_target_value(&ev))
                                        prop:value=move || iv_type.get()
                                    >
                                        {INTERVIEW_TYPES
                                            .into_iter()
                                            .map(|t| view! { <option value=t>{t}</option> })
                                            .collect_view()}
                                    </select>
                                </div>
                                <SubmitButton loading=loading label="Generate Prep Materials" />
                            </form>
                        </Show>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <h3 class="card-title">"Generated Content"</h3>
                            <Show when=move || output.with(Option::is_some)>
                                <div class="flex gap-2">
                                    <button class="btn btn-ghost btn-sm gap-1" on:click=on_copy>
                                        <Clipboard attr:class="h-4 w-4" /> "Copy"
                                    </button>
                                    <button class="btn btn-ghost btn-sm gap-1" on:click=on_download>
                                        <Download attr:class="h-4 w-4" /> "Download"
                                    </button>
                                </div>
                            </Show>
                        </div>
                        {move || match output.get() {
                            Some(content) => view! {
                                <div class="space-y-2">
                                    <p class="text-xs text-base-content/60">{format!("{} words", content.word_count)}</p>
                                    <pre class="whitespace-pre-wrap bg-base-200 rounded-box p-4 text-sm max-h-[32rem] overflow-auto">
                                        {content.text}
                                    </pre>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="flex flex-col items-center justify-center py-16 text-base-content/50">
                                    <Brain attr:class="h-12 w-12 mb-2" />
                                    <p>"Generated content will appear here"</p>
                                </div>
                            }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
