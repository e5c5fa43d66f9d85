use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

/// One-shot visibility latch: once revealed, scrolling away never hides it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feeds one intersection report. Returns `true` only on the report that
    /// first reveals the element.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a `[data-reveal]` block that gains `visible` the first
/// time it enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let latch = use_mut_ref(RevealLatch::default);
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let fallback = visible.clone();
                let init = IntersectionObserverInit::new();
                init.set_threshold_f64(REVEAL_THRESHOLD);
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if latch.borrow_mut().observe(entry.is_intersecting()) {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                );
                let observer = match (
                    node.cast::<Element>(),
                    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
                ) {
                    (Some(element), Ok(observer)) => {
                        observer.observe(&element);
                        Some(observer)
                    }
                    (_, Err(e)) => {
                        log::warn!("IntersectionObserver unavailable: {:?}", e);
                        fallback.set(true);
                        None
                    }
                    (None, Ok(_)) => None,
                };
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            data-reveal=""
            class={classes!("reveal", props.class.clone(), (*visible).then_some("visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn scrolling_out_keeps_it_visible() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        latch.observe(false);
        assert!(latch.is_revealed());
    }
}
