use leptos::prelude::*;

use super::reveal::RevealSection;
use super::ui::{Badge, BadgeVariant, SectionHeading, CARD};
use crate::content::experience::EXPERIENCES;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <RevealSection id="experience" class="py-20 bg-muted/50">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Work Experience"
                    subtitle="My professional journey and the companies I've had the pleasure to work with."
                />
                <div class="relative max-w-4xl mx-auto border-l-2 border-primary/30 pl-8 space-y-12">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="relative">
                                    <span class="absolute -left-[41px] top-2 h-4 w-4 rounded-full bg-primary"></span>
                                    <div class=format!("{CARD} p-6")>
                                        <div class="flex flex-col md:flex-row md:justify-between mb-4">
                                            <div>
                                                <h3 class="text-xl font-semibold">{exp.position}</h3>
                                                <p class="text-primary">{exp.company}</p>
                                            </div>
                                            <div class="text-sm text-muted-foreground md:text-right">
                                                <p>{exp.period}</p>
                                                <p>{exp.location}</p>
                                            </div>
                                        </div>
                                        <p class="mb-4">{exp.description}</p>
                                        <h4 class="font-semibold mb-2">"Key Achievements"</h4>
                                        <ul class="list-disc pl-5 space-y-1 mb-4 text-muted-foreground">
                                            {exp
                                                .achievements
                                                .iter()
                                                .map(|a| view! { <li>{*a}</li> })
                                                .collect_view()}
                                        </ul>
                                        <div class="flex flex-wrap gap-2">
                                            {exp
                                                .technologies
                                                .iter()
                                                .map(|t| {
                                                    view! {
                                                        <Badge text=t.to_string() variant=BadgeVariant::Outline />
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
