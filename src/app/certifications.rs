use leptos::prelude::*;

use super::dialog::Dialog;
use super::reveal::RevealSection;
use super::ui::{Badge, BadgePreview, BadgeVariant, SectionHeading, BUTTON, BUTTON_OUTLINE, CARD};
use crate::content::certifications::{find_certification, Certification, CERTIFICATIONS};

#[component]
pub fn Certifications() -> impl IntoView {
    let selected = RwSignal::new(None::<u32>);
    let dialog_open = RwSignal::new(false);

    view! {
        <RevealSection id="certifications" class="py-20 bg-muted/50">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Certifications"
                    subtitle="Professional certifications and credentials that validate my expertise."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class=format!("{CARD} overflow-hidden flex flex-col h-full")>
                                    <div class="p-6 flex flex-col flex-1">
                                        <div class="flex items-center gap-4 mb-4">
                                            <img
                                                src=cert.image
                                                alt=cert.organization
                                                width="48"
                                                height="48"
                                                class="rounded"
                                            />
                                            <div>
                                                <h3 class="font-semibold">{cert.name}</h3>
                                                <p class="text-sm text-muted-foreground">
                                                    {cert.organization}
                                                </p>
                                            </div>
                                        </div>
                                        <p class="text-sm text-muted-foreground mb-4">{cert.period()}</p>
                                        <BadgePreview items=cert.skills variant=BadgeVariant::Outline />
                                        <button
                                            class=format!("{BUTTON_OUTLINE} mt-auto w-full")
                                            on:click=move |_| {
                                                selected.set(Some(cert.id));
                                                dialog_open.set(true);
                                            }
                                        >
                                            "View Certificate"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Dialog open=dialog_open>
                {move || {
                    selected
                        .get()
                        .and_then(find_certification)
                        .map(|cert| view! { <CertificationDetails cert=cert /> })
                }}
            </Dialog>
        </RevealSection>
    }
}

#[component]
fn CertificationDetails(cert: &'static Certification) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-bold mb-1">{cert.name}</h3>
        <p class="text-muted-foreground mb-6">{cert.organization}</p>
        <img src=cert.image alt=cert.name class="w-full rounded-lg border mb-6" />
        <div class="grid grid-cols-2 gap-4 mb-6 text-sm">
            <div>
                <h4 class="font-semibold">"Issued"</h4>
                <p class="text-muted-foreground">{cert.date}</p>
            </div>
            {cert
                .expiration
                .map(|exp| {
                    view! {
                        <div>
                            <h4 class="font-semibold">"Expires"</h4>
                            <p class="text-muted-foreground">{exp}</p>
                        </div>
                    }
                })}
        </div>
        <h4 class="font-semibold mb-2">"Skills"</h4>
        <div class="flex flex-wrap gap-2 mb-6">
            {cert.skills.iter().map(|s| view! { <Badge text=s.to_string() /> }).collect_view()}
        </div>
        <div class="flex gap-4">
            {cert
                .pdf_url
                .map(|url| {
                    view! {
                        <a href=url download class=BUTTON_OUTLINE>
                            "Download PDF"
                        </a>
                    }
                })}
            <a href=cert.verification_url target="_blank" rel="noopener noreferrer" class=BUTTON>
                "Verify Certificate"
            </a>
        </div>
    }
}
