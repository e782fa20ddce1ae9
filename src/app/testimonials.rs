use leptos::prelude::*;

use super::reveal::RevealSection;
use super::ui::{SectionHeading, BUTTON_GHOST_ICON, CARD};
use crate::content::testimonials::{Carousel, Direction, TESTIMONIALS};

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let current = move || carousel.with(|c| c.current());

    view! {
        <RevealSection id="testimonials" class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Testimonials"
                    subtitle="What clients and colleagues say about working with me."
                />
                <div class="relative max-w-3xl mx-auto overflow-hidden">
                    {move || {
                        let (index, direction) = carousel.with(|c| (c.current(), c.direction()));
                        let t = &TESTIMONIALS[index];
                        let slide = match direction {
                            Direction::Forward => "animate-slide-in-right",
                            Direction::Back => "animate-slide-in-left",
                        };
                        view! {
                            <div class=format!("{CARD} p-8 text-center {slide}")>
                                <span class="block text-5xl text-primary/30 leading-none mb-4">"“"</span>
                                <p class="text-lg italic mb-6">{t.quote}</p>
                                <img
                                    src=t.image
                                    alt=t.name
                                    width="64"
                                    height="64"
                                    class="rounded-full mx-auto mb-3"
                                />
                                <h4 class="font-semibold">{t.name}</h4>
                                <p class="text-sm text-muted-foreground">
                                    {format!("{}, {}", t.position, t.company)}
                                </p>
                            </div>
                        }
                    }}
                </div>
                <div class="flex items-center justify-center gap-4 mt-8">
                    <button
                        class=BUTTON_GHOST_ICON
                        aria-label="Previous testimonial"
                        on:click=move |_| {
                            carousel.update(|c| {
                                c.prev();
                            })
                        }
                    >
                        "‹"
                    </button>
                    <div class="flex gap-2">
                        {(0..TESTIMONIALS.len())
                            .map(|i| {
                                view! {
                                    <button
                                        aria-label=format!("Go to testimonial {}", i + 1)
                                        class=move || {
                                            if current() == i {
                                                "h-3 w-3 rounded-full bg-primary"
                                            } else {
                                                "h-3 w-3 rounded-full bg-primary/30"
                                            }
                                        }
                                        on:click=move |_| {
                                            carousel.update(|c| {
                                                c.go_to(i);
                                            })
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class=BUTTON_GHOST_ICON
                        aria-label="Next testimonial"
                        on:click=move |_| {
                            carousel.update(|c| {
                                c.next();
                            })
                        }
                    >
                        "›"
                    </button>
                </div>
            </div>
        </RevealSection>
    }
}
