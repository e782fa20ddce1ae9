use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use super::ui::BUTTON_GHOST_ICON;
use crate::config::PageConfig;
use crate::theme::{ThemeController, ThemeName, ThemeStore};

/// Theme persistence backed by the browser's local storage.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        let value = self.value.get_untracked();
        (!value.is_empty()).then_some(value)
    }

    fn save(&self, value: &str) {
        self.set_value.set(value.to_string());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    controller: RwSignal<ThemeController<LocalStorageStore>>,
}

impl ThemeContext {
    /// `None` until the page has hydrated.
    pub fn current(&self) -> Option<ThemeName> {
        self.controller.with(|c| c.current())
    }

    pub fn select(&self, name: &str) {
        if let Some(Err(e)) = self.controller.try_update(|c| c.set_theme(name)) {
            log::warn!("{e}");
        }
    }
}

pub fn provide_theme(config: &PageConfig) {
    let (value, set_value, _) =
        use_local_storage::<String, FromToStringCodec>(config.theme_storage_key.clone());
    let controller = RwSignal::new(ThemeController::new(
        LocalStorageStore { value, set_value },
        config.default_theme,
    ));

    // effects only run in the browser once hydration is done, so the server
    // markup and the first client render both use the neutral default
    Effect::new(move |_| {
        controller.update(|c| {
            c.init();
        });
    });
    Effect::new(move |_| {
        if let Some(theme) = controller.with(|c| c.current()) {
            apply_theme(theme);
        }
    });

    provide_context(ThemeContext { controller });
}

fn apply_theme(theme: ThemeName) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let res = ThemeName::ALL
        .iter()
        .try_for_each(|t| classes.remove_1(t.as_str()))
        .and_then(|_| classes.add_1(theme.as_str()));
    if let Err(e) = res {
        log::error!("couldn't apply theme {theme}: {e:?}");
    }
}

fn icon(theme: Option<ThemeName>) -> &'static str {
    match theme {
        Some(t) if t.is_dark() => "🌙",
        _ => "☀️",
    }
}

#[component]
pub fn ThemeSelector() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                class=BUTTON_GHOST_ICON
                aria-label="Select theme"
                on:click=move |_| {
                    if theme.current().is_some() {
                        set_open.update(|o| *o = !*o);
                    }
                }
            >
                <span aria-hidden="true">{move || icon(theme.current())}</span>
                <span class="sr-only">"Select theme"</span>
            </button>
            <Show when=move || open.get() && theme.current().is_some()>
                <div class="absolute right-0 mt-2 w-44 rounded-md border bg-popover text-popover-foreground shadow-md py-1 z-50">
                    {ThemeName::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="flex w-full items-center gap-2 px-3 py-2 text-sm cursor-pointer hover:bg-accent"
                                    on:click=move |_| {
                                        theme.select(t.as_str());
                                        set_open.set(false);
                                    }
                                >
                                    <span aria-hidden="true">{icon(Some(t))}</span>
                                    <span>{t.label()}</span>
                                    <Show when=move || theme.current() == Some(t)>
                                        <span class="ml-auto text-primary">"✓"</span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
