use leptos::prelude::*;

use super::reveal::RevealSection;
use super::ui::{SectionHeading, BUTTON, CARD};

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("5+", "Years of Experience"),
    ("50+", "Projects Completed"),
    ("30+", "Happy Clients"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection id="about" class="py-20 bg-muted/50">
            <div class="container mx-auto px-4">
                <SectionHeading title="About Me" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <img
                        src="/placeholder.svg"
                        alt="About me"
                        class="rounded-lg shadow-lg w-full object-cover"
                    />
                    <div>
                        <h3 class="text-2xl font-bold mb-4">"Who am I?"</h3>
                        <p class="mb-4">
                            "I'm a passionate Full Stack Developer and UI/UX Designer with over 5 years of experience "
                            "creating digital solutions for businesses and individuals. I specialize in building modern, "
                            "responsive web applications with a focus on user experience and performance."
                        </p>
                        <p class="mb-6">
                            "My journey in tech began when I built my first website at 15. Since then, I've worked with "
                            "startups, agencies, and enterprise clients to deliver high-quality products that solve real problems."
                        </p>
                        <div class="grid grid-cols-3 gap-4 mb-8">
                            {HIGHLIGHTS
                                .iter()
                                .map(|(figure, caption)| {
                                    view! {
                                        <div class=format!("{CARD} p-4 text-center")>
                                            <div class="text-3xl font-bold text-primary">{*figure}</div>
                                            <p class="text-sm text-muted-foreground">{*caption}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a href="/resume.pdf" download class=BUTTON>
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
