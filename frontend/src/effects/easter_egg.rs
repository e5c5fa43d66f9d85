use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::hooks::use_reduced_motion;
use crate::components::toast::use_toast;
use crate::config::EASTER_EGG_SEQUENCE;
use crate::effects::confetti::launch_confetti;

/// Matches typed keys against a fixed sequence. The buffer is always a prefix
/// of the target or the single most recent key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceDetector {
    target: &'static str,
    buffer: String,
}

impl SequenceDetector {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            buffer: String::new(),
        }
    }

    /// Feeds one key. Returns `true` when the sequence completes.
    pub fn push(&mut self, key: &str) -> bool {
        let key = key.to_uppercase();
        self.buffer.push_str(&key);
        if !self.target.starts_with(&self.buffer) {
            self.buffer = key;
        }
        if self.buffer == self.target {
            self.buffer.clear();
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

/// Listens for the secret word anywhere on the page.
#[function_component(EasterEgg)]
pub fn easter_egg() -> Html {
    let detector = use_mut_ref(|| SequenceDetector::new(EASTER_EGG_SEQUENCE));
    let reduced = use_reduced_motion();
    let toast = use_toast();

    use_effect_with_deps(
        move |(reduced, toast)| {
            let reduced = *reduced;
            let toast = toast.clone();
            let listener = crate::utils::dom::document().map(|doc| {
                EventListener::new(&doc, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if detector.borrow_mut().push(&event.key()) {
                        log::info!("Easter egg triggered");
                        launch_confetti(reduced);
                        toast.show("Nebula activated ✨");
                    }
                })
            });
            move || drop(listener)
        },
        (reduced, toast),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(detector: &mut SequenceDetector, keys: &[&str]) -> usize {
        keys.iter().filter(|key| detector.push(key)).count()
    }

    #[test]
    fn full_sequence_fires_once() {
        let mut detector = SequenceDetector::new("NEBULA");
        assert_eq!(type_keys(&mut detector, &["N", "E", "B", "U", "L", "A"]), 1);
        assert_eq!(detector.buffer(), "");
    }

    #[test]
    fn lowercase_keys_count() {
        let mut detector = SequenceDetector::new("NEBULA");
        assert_eq!(type_keys(&mut detector, &["n", "e", "b", "u", "l", "a"]), 1);
    }

    #[test]
    fn mismatch_resets_to_current_key() {
        let mut detector = SequenceDetector::new("NEBULA");
        assert_eq!(type_keys(&mut detector, &["N", "E", "B", "X"]), 0);
        assert_eq!(detector.buffer(), "X");
    }

    #[test]
    fn mismatch_can_start_a_new_attempt() {
        let mut detector = SequenceDetector::new("NEBULA");
        assert_eq!(
            type_keys(&mut detector, &["N", "E", "N", "E", "B", "U", "L", "A"]),
            1
        );
    }

    #[test]
    fn modifier_keys_break_the_sequence() {
        let mut detector = SequenceDetector::new("NEBULA");
        assert_eq!(type_keys(&mut detector, &["N", "E", "Shift", "B", "U", "L", "A"]), 0);
    }
}
