use yew::prelude::*;

use crate::config::MOTION_KEY;
use crate::utils::dom;
use crate::utils::storage::{KeyValueStore, PreferenceStore};

/// Parses a stored reduced-motion value. Older pages wrote booleans.
pub fn parse_motion(value: &str) -> Option<bool> {
    match value {
        "on" | "true" => Some(true),
        "off" | "false" => Some(false),
        _ => None,
    }
}

fn motion_value(reduced: bool) -> &'static str {
    if reduced {
        "on"
    } else {
        "off"
    }
}

/// Owns the reduced-motion flag. With nothing stored, the system preference
/// decides.
pub struct MotionController<S> {
    store: PreferenceStore<S>,
    reduced: bool,
}

impl<S: KeyValueStore> MotionController<S> {
    pub fn load(store: PreferenceStore<S>, system_prefers_reduced: bool) -> Self {
        let reduced = store
            .read_stored(MOTION_KEY)
            .and_then(|value| parse_motion(&value))
            .unwrap_or(system_prefers_reduced);
        Self { store, reduced }
    }

    pub fn reduced(&self) -> bool {
        self.reduced
    }

    pub fn toggle(&mut self) -> bool {
        self.reduced = !self.reduced;
        self.store.write(MOTION_KEY, motion_value(self.reduced));
        self.reduced
    }
}

/// Published to every animated component. A change re-renders consumers,
/// which is how they learn to stop or resume.
#[derive(Clone, PartialEq)]
pub struct MotionContext {
    pub reduced: bool,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct MotionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MotionProvider)]
pub fn motion_provider(props: &MotionProviderProps) -> Html {
    let controller = use_mut_ref(|| {
        MotionController::load(PreferenceStore::browser(), dom::prefers_reduced_motion())
    });
    let reduced = use_state(|| controller.borrow().reduced());

    {
        let reduced = *reduced;
        use_effect_with_deps(
            move |reduced| {
                dom::set_body_class("reduce-motion", *reduced);
                || ()
            },
            reduced,
        );
    }

    let toggle = {
        let controller = controller.clone();
        let reduced = reduced.clone();
        Callback::from(move |_| {
            let next = controller.borrow_mut().toggle();
            log::info!("Reduced motion {}", motion_value(next));
            reduced.set(next);
        })
    };

    let context = MotionContext {
        reduced: *reduced,
        toggle,
    };

    html! {
        <ContextProvider<MotionContext> {context}>
            { for props.children.iter() }
        </ContextProvider<MotionContext>>
    }
}

#[function_component(MotionToggle)]
pub fn motion_toggle() -> Html {
    let context = use_context::<MotionContext>();
    let Some(motion) = context else {
        return html! {};
    };
    let onclick = {
        let toggle = motion.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    html! {
        <button
            class="icon-button"
            data-toggle="motion"
            aria-pressed={motion.reduced.to_string()}
            aria-label="Reduce motion"
            {onclick}
        >
            {"◐"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn parses_both_spellings() {
        assert_eq!(parse_motion("on"), Some(true));
        assert_eq!(parse_motion("true"), Some(true));
        assert_eq!(parse_motion("off"), Some(false));
        assert_eq!(parse_motion("false"), Some(false));
        assert_eq!(parse_motion("maybe"), None);
    }

    #[test]
    fn system_preference_applies_without_stored_value() {
        let store = PreferenceStore::new(MemoryStorage::default());
        assert!(MotionController::load(store, true).reduced());
    }

    #[test]
    fn stored_value_beats_system_preference() {
        let store = PreferenceStore::new(MemoryStorage::with_entry(MOTION_KEY, "off"));
        assert!(!MotionController::load(store, true).reduced());
    }

    #[test]
    fn garbage_falls_back_to_system_preference() {
        let store = PreferenceStore::new(MemoryStorage::with_entry(MOTION_KEY, "sometimes"));
        assert!(MotionController::load(store, true).reduced());
    }

    #[test]
    fn toggle_persists_on_off() {
        let mut controller = MotionController::load(PreferenceStore::new(MemoryStorage::default()), false);
        assert!(controller.toggle());
        assert_eq!(controller.store.read(MOTION_KEY, ""), "on");
        assert!(!controller.toggle());
        assert_eq!(controller.store.read(MOTION_KEY, ""), "off");
    }
}
