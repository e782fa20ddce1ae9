use leptos::prelude::*;
use leptos_use::{use_media_query, use_window_scroll};
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::theme_selector::ThemeSelector;
use super::ui::BUTTON_GHOST_ICON;
use crate::config::PageConfig;
use crate::nav::{Layout, Navigator};
use crate::sections::{sections, Section};

/// Shared handle to the page's single [`Navigator`].
#[derive(Debug, Clone, Copy)]
pub struct NavContext {
    navigator: RwSignal<Navigator>,
}

impl NavContext {
    /// Scrolls to the section with id `target`. Unknown targets are logged
    /// and otherwise ignored.
    pub fn activate(&self, target: &str) {
        match self.navigator.with_untracked(|n| n.resolve(target)) {
            Ok(section) => {
                self.navigator.update(|n| {
                    let _ = n.activate(section.id);
                });
                self.navigator
                    .with_untracked(|n| scroll_to_section(section, n));
            }
            Err(e) => log::warn!("{e}"),
        }
    }

    pub fn toggle_menu(&self) {
        self.navigator.update(|n| {
            n.toggle_menu();
        });
    }

    pub fn is_menu_open(&self) -> bool {
        self.navigator.with(|n| n.is_menu_open())
    }

    pub fn is_scrolled(&self) -> bool {
        self.navigator.with(|n| n.is_scrolled())
    }

    pub fn is_narrow(&self) -> bool {
        self.navigator.with(|n| n.layout() == Layout::Narrow)
    }

    pub fn active(&self) -> Option<&'static str> {
        self.navigator.with(|n| n.active())
    }
}

pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}

pub fn provide_navigator(config: &PageConfig) {
    let navigator = RwSignal::new(Navigator::new(sections(), config));
    let (_, scroll_y) = use_window_scroll();
    let is_narrow = use_media_query(config.narrow_media_query());

    Effect::new(move |_| {
        let y = scroll_y.get();
        navigator.maybe_update(|n| n.on_scroll(y));
    });
    Effect::new(move |_| {
        let layout = Layout::from_narrow(is_narrow.get());
        navigator.maybe_update(|n| n.set_layout(layout));
    });

    provide_context(NavContext { navigator });
}

fn scroll_to_section(section: &Section, navigator: &Navigator) {
    let Some(el) = document().get_element_by_id(section.id) else {
        log::warn!("section #{} is registered but not rendered", section.id);
        return;
    };
    let win = window();
    let scroll_y = win.scroll_y().unwrap_or_default();
    let top = navigator.scroll_top(el.get_bounding_client_rect().top(), scroll_y);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_nav();
    let links = move |mobile: bool| {
        sections()
            .iter()
            .map(|section| view! { <NavLink section=*section mobile=mobile /> })
            .collect_view()
    };

    view! {
        <header class=move || {
            let backing = if nav.is_scrolled() {
                "bg-background/80 backdrop-blur-md shadow-sm"
            } else {
                "bg-transparent"
            };
            format!("fixed top-0 w-full z-50 transition-all duration-300 {backing}")
        }>
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <button
                    class="text-2xl font-bold bg-transparent border-none cursor-pointer"
                    on:click=move |_| nav.activate("hero")
                >
                    "Portfolio"
                </button>
                <Show
                    when=move || nav.is_narrow()
                    fallback=move || {
                        view! {
                            <nav class="flex items-center gap-6">
                                {links(false)} <ThemeSelector />
                            </nav>
                        }
                    }
                >
                    <div class="flex items-center gap-2">
                        <ThemeSelector />
                        <button
                            class=BUTTON_GHOST_ICON
                            aria-label="Toggle menu"
                            on:click=move |_| nav.toggle_menu()
                        >
                            <span class="text-xl">
                                {move || if nav.is_menu_open() { "✕" } else { "☰" }}
                            </span>
                        </button>
                    </div>
                    <Show when=move || nav.is_menu_open()>
                        <div class="absolute top-full left-0 right-0 bg-background shadow-md p-4 flex flex-col gap-2 border-t border-border">
                            {links(true)}
                        </div>
                    </Show>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn NavLink(section: Section, mobile: bool) -> impl IntoView {
    let nav = use_nav();
    let base = if mobile {
        "px-4 py-2 text-left hover:bg-accent rounded-md transition-colors"
    } else {
        "text-sm font-medium hover:text-primary transition-colors bg-transparent border-none cursor-pointer"
    };
    view! {
        <button
            class=move || {
                if nav.active() == Some(section.id) {
                    format!("{base} text-primary")
                } else {
                    base.to_string()
                }
            }
            on:click=move |_| nav.activate(section.id)
        >
            {section.display_name}
        </button>
    }
}
