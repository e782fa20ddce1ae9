use leptos::prelude::*;

use super::reveal::RevealSection;
use super::ui::{Badge, SectionHeading, CARD};
use crate::content::skills::{category, ADDITIONAL_SKILLS, DEFAULT_TAB, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    let (tab, set_tab) = signal(DEFAULT_TAB);

    view! {
        <RevealSection id="skills" class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Skills & Expertise"
                    subtitle="A comprehensive overview of my technical skills and proficiency levels."
                />
                <div class="flex flex-wrap justify-center gap-1 rounded-md bg-muted p-1 mb-8 max-w-3xl mx-auto">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|c| {
                            let id = c.id;
                            view! {
                                <button
                                    class=move || {
                                        let state = if tab.get() == id {
                                            "bg-background text-foreground shadow-sm"
                                        } else {
                                            "text-muted-foreground"
                                        };
                                        format!("flex-1 rounded-sm px-3 py-1.5 text-sm font-medium {state}")
                                    }
                                    on:click=move |_| set_tab.set(id)
                                >
                                    {c.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-2 gap-x-12 gap-y-6 max-w-4xl mx-auto">
                    {move || {
                        category(tab.get())
                            .skills
                            .iter()
                            .map(|s| {
                                view! {
                                    <div>
                                        <div class="flex justify-between mb-2">
                                            <span class="font-medium">{s.name}</span>
                                            <span class="text-muted-foreground">{format!("{}%", s.level)}</span>
                                        </div>
                                        <div class="h-2 w-full rounded-full bg-secondary overflow-hidden">
                                            <div
                                                class="h-full bg-primary transition-all"
                                                style=format!("width: {}%", s.level)
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class=format!("{CARD} p-6 mt-12 max-w-4xl mx-auto")>
                    <h3 class="text-xl font-semibold mb-4 text-center">"Additional Skills"</h3>
                    <div class="flex flex-wrap justify-center gap-2">
                        {ADDITIONAL_SKILLS
                            .iter()
                            .map(|s| view! { <Badge text=s.to_string() /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
