use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t py-8">
            <div class="container mx-auto px-4 text-center text-sm text-muted-foreground">
                {format!("© {} Your Name. All rights reserved.", env!("BUILD_YEAR"))}
            </div>
        </footer>
    }
}
