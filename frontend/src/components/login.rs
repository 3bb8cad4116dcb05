use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_tracker::AppRoute;
use placement_tracker::actions::check_health;

use crate::auth::{login, use_auth};
use crate::components::icons::Target;
use crate::components::toast::use_toaster;
use crate::web::router::Link;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 登录成功后由路由守卫跳转到仪表盘
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            if !login(&auth, email.get_untracked(), password.get_untracked()).await {
                set_error_msg.set(Some("Invalid email or password".to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    let on_check_health = move |_| {
        let client = auth.client();
        spawn_local(async move {
            check_health(&client, &toaster).await;
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Target attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"PlacementTracker"</h1>
                        <p class="text-base-content/70">"Sign in to track your applications"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                        <div class="flex items-center justify-between text-sm mt-2">
                            <span>
                                "No account? "
                                <Link to=AppRoute::Register class="link link-primary">"Register"</Link>
                            </span>
                            <button type="button" class="btn btn-ghost btn-xs" on:click=on_check_health>
                                "Test connection"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
