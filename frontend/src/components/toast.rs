//! 通知区域
//!
//! `Toaster` 实现核心库的 `Notifier`，页面动作通过它发出提示，3 秒后自动消失。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use placement_tracker::{Notice, NoticeLevel, Notifier};

const TOAST_LIFETIME_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            log::warn!("{}: {}", notice.title, notice.description);
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| list.push(Toast { id, notice }));

        let toaster = *self;
        Timeout::new(TOAST_LIFETIME_MS, move || toaster.dismiss(id)).forget();
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toaster.toasts.get()
                key=|t| t.id
                children=move |toast| {
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "alert alert-success shadow-lg",
                        NoticeLevel::Error => "alert alert-error shadow-lg",
                    };
                    let id = toast.id;
                    view! {
                        <div role="alert" class=class on:click=move |_| toaster.dismiss(id)>
                            <div>
                                <h3 class="font-bold">{toast.notice.title}</h3>
                                <div class="text-sm">{toast.notice.description}</div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
