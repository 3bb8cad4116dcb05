use leptos::prelude::*;
use leptos::task::spawn_local;
use placement_shared::UserProfile;
use placement_tracker::actions::{PasswordForm, change_password, load_profile, save_profile};

use crate::auth::use_auth;
use crate::components::icons::*;
use crate::components::toast::use_toaster;

fn opt(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

#[component]
fn ProfileField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] kind: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind.unwrap_or("text")
                placeholder=placeholder
                class="input input-bordered w-full"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
            />
        </div>
    }
}

/// 带显示/隐藏切换的密码框
#[component]
fn PasswordField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    visible: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <div class="join w-full">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    required
                    class="input input-bordered join-item flex-1"
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=move || value.get()
                />
                <button
                    type="button"
                    class="btn join-item"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() {
                        view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                    } else {
                        view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                    }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (profile_loading, set_profile_loading) = signal(true);
    let (saving_profile, set_saving_profile) = signal(false);
    let (saving_password, set_saving_password) = signal(false);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let linkedin = RwSignal::new(String::new());
    let github = RwSignal::new(String::new());

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_current = RwSignal::new(false);
    let show_new = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);

    Effect::new(move |_| {
        let client = auth.client();
        spawn_local(async move {
            if let Some(profile) = load_profile(&client, &toaster).await {
                name.set(profile.name);
                email.set(profile.email);
                bio.set(profile.bio.unwrap_or_default());
                location.set(profile.location.unwrap_or_default());
                website.set(profile.website.unwrap_or_default());
                linkedin.set(profile.linkedin.unwrap_or_default());
                github.set(profile.github.unwrap_or_default());
            }
            set_profile_loading.set(false);
        });
    });

    let on_save_profile = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let profile = UserProfile {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            bio: opt(bio.get()),
            location: opt(location.get()),
            website: opt(website.get()),
            linkedin: opt(linkedin.get()),
            github: opt(github.get()),
        };
        let session = auth.session();
        set_saving_profile.set(true);
        spawn_local(async move {
            save_profile(&session, &profile, &toaster).await;
            set_saving_profile.set(false);
        });
    };

    let on_change_password = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = PasswordForm {
            current: current.get(),
            new: new_password.get(),
            confirm: confirm.get(),
        };
        let session = auth.session();
        set_saving_password.set(true);
        spawn_local(async move {
            if change_password(&session, &form, &toaster).await {
                current.set(String::new());
                new_password.set(String::new());
                confirm.set(String::new());
            }
            set_saving_password.set(false);
        });
    };

    view! {
        <Show
            when=move || !profile_loading.get()
            fallback=|| view! {
                <div class="flex justify-center p-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="space-y-6 max-w-3xl">
                <div>
                    <h2 class="text-2xl font-bold">"Settings"</h2>
                    <p class="text-base-content/70">"Manage your account settings and preferences"</p>
                </div>

                <div class="card bg-base-100 shadow">
                    <form class="card-body" on:submit=on_save_profile>
                        <h3 class="card-title">"Profile"</h3>
                        <div class="grid grid-cols-2 gap-4">
                            <ProfileField id="name" label="Full Name" value=name />
                            <ProfileField id="email" label="Email" value=email kind="email" />
                        </div>
                        <div class="form-control">
                            <label for="bio" class="label"><span class="label-text">"Bio"</span></label>
                            <textarea
                                id="bio"
                                rows="3"
                                class="textarea textarea-bordered w-full"
                                placeholder="Tell us about yourself..."
                                on:input=move |ev| bio.set(event_target_value(&ev))
                                prop:value=move || bio.get()
                            ></textarea>
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <ProfileField id="location" label="Location" value=location placeholder="City, Country" />
                            <ProfileField id="website" label="Website" value=website placeholder="https://" />
                            <ProfileField id="linkedin" label="LinkedIn" value=linkedin />
                            <ProfileField id="github" label="GitHub" value=github />
                        </div>
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary" disabled=move || saving_profile.get()>
                                "Save Profile"
                            </button>
                        </div>
                    </form>
                </div>

                <div class="card bg-base-100 shadow">
                    <form class="card-body" on:submit=on_change_password>
                        <h3 class="card-title">"Change Password"</h3>
                        <PasswordField id="current" label="Current Password" value=current visible=show_current />
                        <PasswordField id="new" label="New Password" value=new_password visible=show_new />
                        <PasswordField id="confirm" label="Confirm New Password" value=confirm visible=show_confirm />
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary" disabled=move || saving_password.get()>
                                "Change Password"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
