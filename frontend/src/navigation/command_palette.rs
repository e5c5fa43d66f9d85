use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::components::hooks::use_reduced_motion;
use crate::config::PALETTE_ITEMS;
use crate::utils::dom;

/// What the component has to do in the DOM after a state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteAction {
    None,
    Opened,
    Closed,
    Highlight(usize),
    /// Scroll to the section and close.
    Navigate(String),
}

/// Open/closed state and the highlighted item. The highlighted index always
/// stays inside the item list.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteState {
    items: Vec<String>,
    open: bool,
    active: usize,
}

impl PaletteState {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            open: false,
            active: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn open(&mut self) -> PaletteAction {
        self.open = true;
        self.active = 0;
        PaletteAction::Opened
    }

    pub fn close(&mut self) -> PaletteAction {
        if !self.open {
            return PaletteAction::None;
        }
        self.open = false;
        PaletteAction::Closed
    }

    pub fn toggle(&mut self) -> PaletteAction {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn move_next(&mut self) -> PaletteAction {
        if self.items.is_empty() {
            return PaletteAction::None;
        }
        self.active = (self.active + 1) % self.items.len();
        PaletteAction::Highlight(self.active)
    }

    pub fn move_previous(&mut self) -> PaletteAction {
        if self.items.is_empty() {
            return PaletteAction::None;
        }
        self.active = (self.active + self.items.len() - 1) % self.items.len();
        PaletteAction::Highlight(self.active)
    }

    /// Picks item `index`; its lower-cased label is the section id.
    pub fn activate(&mut self, index: usize) -> PaletteAction {
        let Some(label) = self.items.get(index) else {
            return PaletteAction::None;
        };
        let target = label.to_lowercase();
        self.active = index;
        self.open = false;
        PaletteAction::Navigate(target)
    }

    /// Document-level shortcuts: Ctrl+K toggles, Escape closes.
    pub fn handle_shortcut(&mut self, key: &str, ctrl: bool) -> PaletteAction {
        if ctrl && key.eq_ignore_ascii_case("k") {
            return self.toggle();
        }
        if key == "Escape" && self.open {
            return self.close();
        }
        PaletteAction::None
    }

    /// Keys typed into the palette input.
    pub fn handle_input_key(&mut self, key: &str) -> PaletteAction {
        match key {
            "ArrowDown" => self.move_next(),
            "ArrowUp" => self.move_previous(),
            "Enter" => self.activate(self.active),
            _ => PaletteAction::None,
        }
    }
}

/// Where Tab should move focus to keep it inside the palette, if anywhere.
/// `current` is the index of the focused control among the `count` focusable
/// ones.
pub fn focus_trap_target(count: usize, current: Option<usize>, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (shift, current) {
        (true, Some(0)) => Some(last),
        (false, Some(i)) if i == last => Some(0),
        _ => None,
    }
}

const FOCUSABLE: &str = "input, [tabindex=\"0\"], button";

/// The shortcut listener has to be able to cancel the browser's own Ctrl+K.
fn shortcut_listener_options() -> EventListenerOptions {
    EventListenerOptions::enable_prevent_default()
}

#[function_component(CommandPalette)]
pub fn command_palette() -> Html {
    let state = use_mut_ref(|| PaletteState::new(PALETTE_ITEMS.iter().copied()));
    let trigger = use_force_update();
    let reduced = use_reduced_motion();
    let trigger_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let input_ref = use_node_ref();
    let list_ref = use_node_ref();

    // Runs the DOM side of a transition, then re-renders.
    let apply = {
        let trigger = trigger.clone();
        let trigger_ref = trigger_ref.clone();
        let input_ref = input_ref.clone();
        let list_ref = list_ref.clone();
        use_callback(
            move |action: PaletteAction, reduced| {
                match &action {
                    PaletteAction::None => return,
                    PaletteAction::Opened => {
                        log::info!("Command palette opened");
                        dom::set_body_scroll_locked(true);
                    }
                    PaletteAction::Closed => {
                        dom::set_body_scroll_locked(false);
                        if let Some(button) = trigger_ref.cast::<Element>() {
                            dom::focus(&button);
                        }
                    }
                    PaletteAction::Highlight(index) => {
                        let item = list_ref
                            .cast::<Element>()
                            .and_then(|list| list.children().item(*index as u32));
                        if let Some(item) = item {
                            dom::scroll_into_view_nearest(&item);
                        }
                    }
                    PaletteAction::Navigate(section) => {
                        log::info!("Command palette navigating to {}", section);
                        dom::scroll_to_section(section, *reduced);
                        dom::set_body_scroll_locked(false);
                        if let Some(button) = trigger_ref.cast::<Element>() {
                            dom::focus(&button);
                        }
                    }
                }
                trigger.force_update();
                if matches!(action, PaletteAction::Opened) {
                    // The overlay is still hidden until the re-render lands.
                    let input_ref = input_ref.clone();
                    Timeout::new(0, move || {
                        if let Some(input) = input_ref.cast::<Element>() {
                            dom::focus(&input);
                        }
                    })
                    .forget();
                }
            },
            reduced,
        )
    };

    {
        let state = state.clone();
        let on_action = apply.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::document().map(|doc| {
                    let options = shortcut_listener_options();
                    EventListener::new_with_options(&doc, "keydown", options, move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let ctrl = event.ctrl_key();
                        if ctrl && event.key().eq_ignore_ascii_case("k") {
                            event.prevent_default();
                        }
                        let action = state.borrow_mut().handle_shortcut(&event.key(), ctrl);
                        on_action.emit(action);
                    })
                });
                move || drop(listener)
            },
            apply.clone(),
        );
    }

    let on_trigger = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            let action = state.borrow_mut().open();
            apply.emit(action);
        })
    };

    let on_input_key = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |event: KeyboardEvent| {
            let key = event.key();
            if matches!(key.as_str(), "ArrowDown" | "ArrowUp" | "Enter") {
                event.prevent_default();
            }
            let action = state.borrow_mut().handle_input_key(&key);
            apply.emit(action);
        })
    };

    let on_overlay_click = {
        let state = state.clone();
        let apply = apply.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
            if target.is_some() && target == overlay_ref.cast::<Element>() {
                let action = state.borrow_mut().close();
                apply.emit(action);
            }
        })
    };

    let on_trap = {
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Tab" {
                return;
            }
            let Some(palette) = overlay_ref.cast::<Element>() else {
                return;
            };
            let focusable: Vec<Element> = dom::query_all(FOCUSABLE, Some(&palette))
                .into_iter()
                .filter(|el| !el.has_attribute("disabled"))
                .collect();
            let active = dom::document().and_then(|d| d.active_element());
            let current = active.and_then(|active| focusable.iter().position(|el| *el == active));
            if let Some(index) = focus_trap_target(focusable.len(), current, event.shift_key()) {
                event.prevent_default();
                dom::focus(&focusable[index]);
            }
        })
    };

    let palette = state.borrow();
    let items = palette.items().iter().enumerate().map(|(index, label)| {
        let onclick = {
            let state = state.clone();
            let apply = apply.clone();
            Callback::from(move |_: MouseEvent| {
                let action = state.borrow_mut().activate(index);
                apply.emit(action);
            })
        };
        let active = index == palette.active_index();
        html! {
            <li
                role="option"
                tabindex="0"
                class={classes!("command-item", active.then_some("active"))}
                aria-selected={active.to_string()}
                {onclick}
            >
                {label.clone()}
            </li>
        }
    });

    // Mounted on <body> so no ancestor of the trigger can clip the fixed overlay.
    let overlay = html! {
        <div
            ref={overlay_ref}
            class="command-palette"
            hidden={!palette.is_open()}
            onclick={on_overlay_click}
            onkeydown={on_trap}
        >
            <div class="command-dialog" role="dialog" aria-modal="true" aria-label="Command palette">
                <input
                    ref={input_ref}
                    type="text"
                    data-command-input=""
                    placeholder="Where to?"
                    onkeydown={on_input_key}
                />
                <ul ref={list_ref} data-command-list="" role="listbox">
                    { for items }
                </ul>
            </div>
        </div>
    };
    let overlay = match dom::body() {
        Some(body) => create_portal(overlay, body.into()),
        None => overlay,
    };

    html! {
        <>
            <button
                ref={trigger_ref}
                class="btn btn-ghost"
                data-command-open=""
                aria-expanded={palette.is_open().to_string()}
                onclick={on_trigger}
            >
                {"Jump to… "}<kbd>{"Ctrl K"}</kbd>
            </button>
            {overlay}
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> PaletteState {
        let mut state = PaletteState::new(PALETTE_ITEMS.iter().copied());
        state.open();
        state
    }

    #[test]
    fn arrow_down_cycles_back_to_start() {
        let mut state = palette();
        for _ in 0..PALETTE_ITEMS.len() {
            state.handle_input_key("ArrowDown");
        }
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn arrow_up_wraps_to_last() {
        let mut state = palette();
        assert_eq!(
            state.handle_input_key("ArrowUp"),
            PaletteAction::Highlight(PALETTE_ITEMS.len() - 1)
        );
    }

    #[test]
    fn enter_on_team_navigates_and_closes() {
        let mut state = palette();
        state.handle_input_key("ArrowDown");
        state.handle_input_key("ArrowDown");
        assert_eq!(state.items()[2], "Team");
        assert_eq!(
            state.handle_input_key("Enter"),
            PaletteAction::Navigate("team".to_string())
        );
        assert!(!state.is_open());
    }

    #[test]
    fn opening_resets_highlight() {
        let mut state = palette();
        state.move_next();
        state.close();
        state.open();
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn shortcuts_toggle_and_escape() {
        let mut state = PaletteState::new(["A", "B"]);
        assert_eq!(state.handle_shortcut("k", true), PaletteAction::Opened);
        assert_eq!(state.handle_shortcut("K", true), PaletteAction::Closed);
        assert_eq!(state.handle_shortcut("Escape", false), PaletteAction::None);
        state.open();
        assert_eq!(state.handle_shortcut("Escape", false), PaletteAction::Closed);
        assert_eq!(state.handle_shortcut("k", false), PaletteAction::None);
    }

    #[test]
    fn empty_list_never_moves() {
        let mut state = PaletteState::new(Vec::<String>::new());
        state.open();
        assert_eq!(state.move_next(), PaletteAction::None);
        assert_eq!(state.move_previous(), PaletteAction::None);
        assert_eq!(state.handle_input_key("Enter"), PaletteAction::None);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn focus_trap_wraps_both_ways() {
        assert_eq!(focus_trap_target(3, Some(2), false), Some(0));
        assert_eq!(focus_trap_target(3, Some(0), true), Some(2));
        assert_eq!(focus_trap_target(3, Some(1), false), None);
        assert_eq!(focus_trap_target(3, None, true), None);
        assert_eq!(focus_trap_target(0, None, false), None);
    }

    #[test]
    fn shortcut_listener_can_prevent_default() {
        assert!(!shortcut_listener_options().passive);
    }
}
