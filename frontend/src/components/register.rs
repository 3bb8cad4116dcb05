use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_tracker::AppRoute;

use crate::auth::{register, use_auth};
use crate::components::icons::Target;
use crate::web::router::Link;

const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let invalid = if name.get().trim().is_empty() || email.get().is_empty() {
            Some("Please fill in all fields")
        } else if password.get().len() < MIN_PASSWORD_LEN {
            Some("Password must be at least 6 characters")
        } else if password.get() != confirm.get() {
            Some("Passwords do not match")
        } else {
            None
        };
        if let Some(msg) = invalid {
            set_error_msg.set(Some(msg.to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let ok = register(
                &auth,
                name.get_untracked().trim().to_string(),
                email.get_untracked(),
                password.get_untracked(),
            )
            .await;
            if !ok {
                set_error_msg.set(Some("Registration failed. The email may already be in use.".to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      value: ReadSignal<String>,
                      set: WriteSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    on:input=move |ev| set.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered"
                    required
                />
            </div>
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="flex flex-col items-center gap-2 mb-4">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <Target attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-3xl font-bold">"Create your account"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        {field("name", "Full name", "text", name, set_name)}
                        {field("email", "Email", "email", email, set_email)}
                        {field("password", "Password", "password", password, set_password)}
                        {field("confirm", "Confirm password", "password", confirm, set_confirm)}

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Register".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm mt-2">
                            "Already registered? "
                            <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
