use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::reveal::RevealSection;
use super::toast::use_toaster;
use super::ui::{SectionHeading, BUTTON, BUTTON_GHOST_ICON, CARD};
use crate::config::PageConfig;
use crate::contact::{ContactFlow, Field};

const CONTACT_INFO: [(&str, &str, &str, &str); 3] = [
    ("✉", "Email", "hello@example.com", "mailto:hello@example.com"),
    ("☎", "Phone", "+1 (555) 123-4567", "tel:+15551234567"),
    ("⌖", "Location", "San Francisco, CA", "https://maps.google.com/?q=San+Francisco,+CA"),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
];

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RevealSection id="contact" class="py-20 bg-muted/50">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project in mind or want to discuss potential opportunities? Feel free to reach out!"
                />
                <div class="grid md:grid-cols-3 gap-6 mb-12">
                    {CONTACT_INFO
                        .iter()
                        .map(|(icon, title, text, href)| {
                            view! {
                                <div class=format!("{CARD} p-6 flex flex-col items-center text-center")>
                                    <span class="text-3xl text-primary mb-4">{*icon}</span>
                                    <h3 class="font-semibold mb-2">{*title}</h3>
                                    <a
                                        href=*href
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                    >
                                        {*text}
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex justify-center gap-4 mb-12">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(name, href)| {
                            view! {
                                <a
                                    href=*href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=*name
                                    class=format!("{BUTTON_GHOST_ICON} border w-auto px-4")
                                >
                                    {*name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <ContactForm />
            </div>
        </RevealSection>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let toaster = use_toaster();
    let delay = expect_context::<PageConfig>().submit_delay_ms;
    let flow = RwSignal::new(ContactFlow::new());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: u64| {
            flow.update(|f| {
                f.complete(ticket, &toaster);
            });
        },
        delay as f64,
    );
    on_cleanup(move || {
        stop();
        flow.try_update_untracked(|f| f.cancel());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match flow.try_update(|f| f.submit()) {
            Some(Ok(submission)) => start(submission.ticket),
            Some(Err(e)) => log::debug!("{e}"),
            None => {}
        }
    };
    let sending = move || flow.with(|f| f.is_sending());

    view! {
        <form on:submit=on_submit novalidate class=format!("{CARD} p-6 max-w-2xl mx-auto space-y-6")>
            <div class="grid md:grid-cols-2 gap-6">
                <FormField field=Field::Name flow=flow />
                <FormField field=Field::Email flow=flow />
            </div>
            <FormField field=Field::Subject flow=flow />
            <FormField field=Field::Message flow=flow />
            <button type="submit" class=format!("{BUTTON} w-full") disabled=sending>
                {move || if sending() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

#[component]
fn FormField(field: Field, flow: RwSignal<ContactFlow>) -> impl IntoView {
    let id = field.label().to_lowercase();
    let value = move || flow.with(|f| f.form().get(field).to_string());
    let error = move || flow.with(|f| f.errors().get(field));
    let on_input = move |ev: leptos::ev::Event| {
        flow.update(|f| f.edit(field, event_target_value(&ev)));
    };
    let input_class = move || {
        let border = if error().is_some() { "border-destructive" } else { "border-input" };
        format!("flex w-full rounded-md border bg-background px-3 py-2 text-sm {border}")
    };

    let control = if field == Field::Message {
        view! {
            <textarea
                id=id.clone()
                rows="5"
                placeholder=field.placeholder()
                class=input_class
                prop:value=value
                on:input=on_input
            ></textarea>
        }
            .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                type="text"
                placeholder=field.placeholder()
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }
            .into_any()
    };

    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">
                {field.label()}
            </label>
            {control}
            {move || error().map(|msg| view! { <p class="text-sm text-destructive">{msg}</p> })}
        </div>
    }
}
