use leptos::prelude::*;

use crate::content::{badge_preview, BADGE_PREVIEW};

/// Centered section title with an optional blurb and accent rule.
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl font-bold mb-4">{title}</h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-muted-foreground max-w-2xl mx-auto">{s}</p> }
                })}
            <div class="w-20 h-1 bg-primary mx-auto mt-4"></div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
}

#[component]
pub fn Badge(text: String, #[prop(optional)] variant: BadgeVariant) -> impl IntoView {
    let class = match variant {
        BadgeVariant::Secondary => "bg-secondary text-secondary-foreground border-transparent",
        BadgeVariant::Outline => "border-border text-foreground",
    };
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {class}",
        )>{text}</span>
    }
}

/// The first few badges of a card plus a "+N" badge for the rest.
#[component]
pub fn BadgePreview(items: &'static [&'static str], variant: BadgeVariant) -> impl IntoView {
    let (shown, more) = badge_preview(items, BADGE_PREVIEW);
    view! {
        <div class="flex flex-wrap gap-2 mb-4">
            {shown
                .iter()
                .map(|s| view! { <Badge text=s.to_string() variant=variant /> })
                .collect_view()}
            {more
                .map(|n| {
                    view! { <Badge text=format!("+{n}") variant=BadgeVariant::Outline /> }
                })}
        </div>
    }
}

pub const BUTTON: &str = "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium transition-colors h-10 px-4 py-2 bg-primary text-primary-foreground hover:bg-primary/90 disabled:opacity-50 disabled:pointer-events-none";
pub const BUTTON_OUTLINE: &str = "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium transition-colors h-10 px-4 py-2 border border-input bg-background hover:bg-accent hover:text-accent-foreground";
pub const BUTTON_GHOST_ICON: &str = "inline-flex items-center justify-center rounded-md h-10 w-10 hover:bg-accent hover:text-accent-foreground transition-colors";
pub const CARD: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";
