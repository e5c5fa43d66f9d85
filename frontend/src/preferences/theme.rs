use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{THEME_KEY, THEME_TRANSITION_MS};
use crate::utils::dom;
use crate::utils::storage::{KeyValueStore, PreferenceStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `"light"` is the dark default.
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Owns the active theme and its persisted copy.
pub struct ThemeController<S> {
    store: PreferenceStore<S>,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn load(store: PreferenceStore<S>) -> Self {
        let theme = Theme::parse(&store.read(THEME_KEY, Theme::Dark.as_str()));
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.write(THEME_KEY, self.theme.as_str());
        self.theme
    }
}

fn apply_theme(theme: Theme) {
    dom::set_root_attribute("data-theme", theme.as_str());
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let controller = use_mut_ref(|| ThemeController::load(PreferenceStore::browser()));
    let theme = use_state(|| controller.borrow().theme());

    {
        let theme = *theme;
        use_effect_with_deps(
            move |theme| {
                apply_theme(*theme);
                || ()
            },
            theme,
        );
    }

    let onclick = {
        let controller = controller.clone();
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            dom::set_body_class("theme-transition", true);
            let next = controller.borrow_mut().toggle();
            theme.set(next);
            Timeout::new(THEME_TRANSITION_MS, || {
                dom::set_body_class("theme-transition", false);
            })
            .forget();
        })
    };

    let dark = *theme == Theme::Dark;
    html! {
        <button
            class="icon-button"
            data-toggle="theme"
            aria-pressed={dark.to_string()}
            aria-label="Toggle dark theme"
            {onclick}
        >
            {if dark { "☾" } else { "☀" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn defaults_to_dark() {
        let controller = ThemeController::load(PreferenceStore::new(MemoryStorage::default()));
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn loads_stored_theme() {
        let store = PreferenceStore::new(MemoryStorage::with_entry(THEME_KEY, "light"));
        assert_eq!(ThemeController::load(store).theme(), Theme::Light);
    }

    #[test]
    fn double_toggle_restores_and_persists() {
        let mut controller = ThemeController::load(PreferenceStore::new(MemoryStorage::default()));
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store.read(THEME_KEY, ""), "light");
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store.read(THEME_KEY, ""), "dark");
    }

    #[test]
    fn toggle_survives_unavailable_storage() {
        let mut controller =
            ThemeController::load(PreferenceStore::new(MemoryStorage::unavailable()));
        assert_eq!(controller.toggle(), Theme::Light);
    }
}
