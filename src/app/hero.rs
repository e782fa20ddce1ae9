use leptos::prelude::*;

use super::navbar::use_nav;
use super::reveal::RevealSection;
use super::ui::{BUTTON, BUTTON_OUTLINE};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_nav();

    view! {
        <RevealSection
            id="hero"
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-primary/10 to-background -z-10"></div>
            <div class="container mx-auto px-4 py-32 flex flex-col items-center text-center">
                <img
                    src="/placeholder.svg"
                    alt="Profile"
                    width="150"
                    height="150"
                    class="rounded-full mb-8 border-4 border-primary"
                />
                <h1 class="text-4xl md:text-6xl font-bold mb-4">
                    "Hi, I'm " <span class="text-primary">"Your Name"</span>
                </h1>
                <h2 class="text-xl md:text-2xl text-muted-foreground mb-8">
                    "Full Stack Developer & UI/UX Designer"
                </h2>
                <p class="max-w-2xl text-lg mb-12">
                    "I build exceptional digital experiences that are fast, accessible, and visually appealing. "
                    "Let's turn your vision into reality."
                </p>
                <div class="flex flex-col sm:flex-row gap-4">
                    <button class=BUTTON on:click=move |_| nav.activate("portfolio")>
                        "View My Work"
                    </button>
                    <button class=BUTTON_OUTLINE on:click=move |_| nav.activate("contact")>
                        "Contact Me"
                    </button>
                </div>
            </div>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-2xl"
                aria-label="Scroll down"
                on:click=move |_| nav.activate("about")
            >
                "⌄"
            </button>
        </RevealSection>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::navbar::provide_navigator;
    use crate::config::PageConfig;

    #[test]
    fn test_hero_starts_hidden_behind_reveal() {
        let owner = Owner::new();
        owner.with(|| {
            let config = PageConfig::default();
            provide_navigator(&config);
            provide_context(config);

            let html = view! { <Hero /> }.to_html();
            assert!(html.contains(r#"id="hero""#));
            assert!(html.contains("opacity-0 translate-y-10"));
        });
    }
}
