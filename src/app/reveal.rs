use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::config::PageConfig;
use crate::error::SiteError;
use crate::reveal::{IntersectionSample, RevealObserver};

/// A page section that fades in the first time enough of it scrolls into
/// view. Renders the element carrying the section's anchor `id`.
#[component]
pub fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let threshold = expect_context::<PageConfig>().reveal_threshold;
    let el = NodeRef::<html::Section>::new();
    let latch = StoredValue::new(RevealObserver::new(id, threshold));
    let (revealed, set_revealed) = signal(false);

    let UseIntersectionObserverReturn {
        is_supported, stop, ..
    } = use_intersection_observer_with_options(
        el,
        move |entries, _| {
            for entry in entries {
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if latch.try_update_value(|o| o.observe(sample)) == Some(true) {
                    set_revealed.set(true);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        } else if !is_supported.get()
            && latch.try_update_value(|o| o.fail_open(SiteError::ObservationUnavailable))
                == Some(true)
        {
            set_revealed.set(true);
        }
    });

    on_cleanup(move || {
        latch.try_update_value(|o| o.release());
    });

    view! {
        <section
            id=id
            node_ref=el
            class=move || {
                let state = if revealed.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-10"
                };
                format!("{class} transition-all duration-1000 {state}")
            }
        >
            {children()}
        </section>
    }
}
