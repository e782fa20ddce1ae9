use leptos::prelude::*;

use super::dialog::Dialog;
use super::reveal::RevealSection;
use super::ui::{Badge, BadgePreview, BadgeVariant, SectionHeading, BUTTON, BUTTON_OUTLINE, CARD};
use crate::content::portfolio::{filter_projects, find_project, Project, ALL_CATEGORY, CATEGORIES};

#[component]
pub fn Portfolio() -> impl IntoView {
    let (category, set_category) = signal(ALL_CATEGORY);
    let selected = RwSignal::new(None::<u32>);
    let dialog_open = RwSignal::new(false);

    let open_project = move |id: u32| {
        selected.set(Some(id));
        dialog_open.set(true);
    };

    view! {
        <RevealSection id="portfolio" class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="My Portfolio"
                    subtitle="Explore my recent projects and see how I've helped clients achieve their goals."
                />
                <div class="flex flex-wrap justify-center gap-2 mb-8">
                    {CATEGORIES
                        .iter()
                        .map(|c| {
                            let id = c.id;
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == id { BUTTON } else { BUTTON_OUTLINE }
                                    }
                                    on:click=move |_| set_category.set(id)
                                >
                                    {c.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let projects = filter_projects(category.get());
                    if projects.is_empty() {
                        view! {
                            <p class="text-center text-muted-foreground py-12">
                                "No projects found in this category."
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                {projects
                                    .into_iter()
                                    .map(|p| view! { <ProjectCard project=p on_open=open_project /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            <Dialog open=dialog_open>
                {move || selected.get().and_then(find_project).map(|p| view! { <ProjectDetails project=p /> })}
            </Dialog>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    on_open: impl Fn(u32) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class=format!("{CARD} overflow-hidden flex flex-col h-full")>
            <img src=project.image alt=project.title class="w-full h-48 object-cover" />
            <div class="p-6 flex flex-col flex-1">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class="text-muted-foreground mb-4 line-clamp-2">{project.description}</p>
                <BadgePreview items=project.technologies variant=BadgeVariant::Secondary />
                <button class=format!("{BUTTON} mt-auto w-full") on:click=move |_| on_open(project.id)>
                    "View Details"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProjectDetails(project: &'static Project) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
        <img src=project.image alt=project.title class="w-full rounded-lg mb-6 object-cover" />
        <p class="mb-6">{project.description}</p>
        <div class="grid md:grid-cols-2 gap-6 mb-6">
            <div>
                <h4 class="font-semibold mb-2">"My Role"</h4>
                <p class="text-muted-foreground">{project.role}</p>
            </div>
            <div>
                <h4 class="font-semibold mb-2">"Impact"</h4>
                <p class="text-muted-foreground">{project.impact}</p>
            </div>
        </div>
        <h4 class="font-semibold mb-2">"Technologies"</h4>
        <div class="flex flex-wrap gap-2 mb-6">
            {project
                .technologies
                .iter()
                .map(|t| view! { <Badge text=t.to_string() /> })
                .collect_view()}
        </div>
        <div class="flex gap-4">
            {project
                .live_url
                .map(|url| {
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class=BUTTON>
                            "Live Demo"
                        </a>
                    }
                })}
            {project
                .source_url
                .map(|url| {
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class=BUTTON_OUTLINE>
                            "Source Code"
                        </a>
                    }
                })}
        </div>
    }
}
