mod about;
mod certifications;
mod contact;
mod dialog;
mod experience;
mod footer;
mod hero;
mod homepage;
mod navbar;
mod portfolio;
mod reveal;
mod skills;
mod testimonials;
mod theme_selector;
mod toast;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::PageConfig;
use footer::Footer;
use homepage::HomePage;
use navbar::{provide_navigator, Navbar};
use theme_selector::provide_theme;
use toast::{provide_toaster, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="description" content="Portfolio of a full stack developer and UI/UX designer" />
                <link rel="icon" type="image/svg+xml" href="/placeholder.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = PageConfig::load();
    provide_theme(&config);
    provide_navigator(&config);
    provide_context(config);
    provide_toaster();

    view! {
        <Title formatter=|title| format!("Your Name - {title}") />

        <Router>
            <div class="min-h-screen bg-background text-foreground">
                <Navbar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <Toaster />
            </div>
        </Router>
    }
}
