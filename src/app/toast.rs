use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::PageConfig;
use crate::contact::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Queue of transient notifications rendered by [`Toaster`].
#[derive(Debug, Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Notify for ToastContext {
    fn notify(&self, title: &str, description: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
            })
        });
    }
}

pub fn provide_toaster() {
    provide_context(ToastContext {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    });
}

pub fn use_toaster() -> ToastContext {
    expect_context::<ToastContext>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <ol class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full md:max-w-[420px]">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toaster = use_toaster();
    let duration = expect_context::<PageConfig>().toast_duration_ms;
    let id = toast.id;

    let UseTimeoutFnReturn { start, stop, .. } =
        use_timeout_fn(move |_: ()| toaster.dismiss(id), duration as f64);
    start(());
    on_cleanup(stop);

    view! {
        <li class="relative rounded-md border bg-background text-foreground p-4 pr-8 shadow-lg">
            <div class="text-sm font-semibold">{toast.title}</div>
            <div class="text-sm opacity-90">{toast.description}</div>
            <button
                class="absolute right-2 top-2 rounded-md p-1 opacity-70 hover:opacity-100"
                aria-label="Dismiss"
                on:click=move |_| toaster.dismiss(id)
            >
                "✕"
            </button>
        </li>
    }
}
