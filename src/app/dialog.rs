use leptos::{ev, prelude::*};

/// Modal overlay. Closes on the backdrop, the close button or Escape.
#[component]
pub fn Dialog(open: RwSignal<bool>, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-black/80" on:click=move |_| open.set(false)></div>
                <div
                    role="dialog"
                    aria-modal="true"
                    class="relative z-10 w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-lg border bg-background p-6 shadow-lg"
                >
                    <button
                        class="absolute right-4 top-4 rounded-sm opacity-70 hover:opacity-100"
                        aria-label="Close"
                        on:click=move |_| open.set(false)
                    >
                        "✕"
                    </button>
                    {children.read_value()()}
                </div>
            </div>
        </Show>
    }
}
