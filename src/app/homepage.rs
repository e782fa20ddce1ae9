use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::certifications::Certifications;
use super::contact::Contact;
use super::experience::Experience;
use super::hero::Hero;
use super::portfolio::Portfolio;
use super::skills::Skills;
use super::testimonials::Testimonials;

/// Every section of the single-page site, in registry order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <About />
        <Portfolio />
        <Certifications />
        <Skills />
        <Experience />
        <Testimonials />
        <Contact />
    }
}
