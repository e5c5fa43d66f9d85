use gloo_events::EventListener;
use yew::prelude::*;

use crate::preferences::motion::MotionContext;
use crate::utils::dom;

/// Tracks `document.hidden`, re-rendering on `visibilitychange`.
#[hook]
pub fn use_page_visible() -> bool {
    let visible = use_state(|| !dom::document_hidden());
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::document().map(|doc| {
                    EventListener::new(&doc, "visibilitychange", move |_| {
                        visible.set(!dom::document_hidden());
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }
    *visible
}

/// The current reduced-motion flag. Outside a `MotionProvider` motion is on.
#[hook]
pub fn use_reduced_motion() -> bool {
    use_context::<MotionContext>()
        .map(|ctx| ctx.reduced)
        .unwrap_or(false)
}
