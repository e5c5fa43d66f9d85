use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::SECTION_LOOKAHEAD_PX;
use crate::utils::dom;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    fn read() -> Self {
        let document_height = dom::root_element()
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0);
        Self {
            scroll_top: dom::scroll_y(),
            document_height,
            viewport_height: dom::viewport_size().1,
        }
    }

    /// Scroll progress in percent. A page that cannot scroll reports 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// The last section whose top, less the lookahead, has been scrolled past.
/// Falls back to the first section.
pub fn active_section(sections: &[SectionOffset], scroll_top: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_top >= section.top - SECTION_LOOKAHEAD_PX)
        .last()
        .or_else(|| sections.first())
        .map(|section| section.id.as_str())
}

/// The section id to write into the URL hash, if the active section moved.
/// Losing the active section leaves the hash alone.
pub fn hash_update<'a>(previous: Option<&str>, current: Option<&'a str>) -> Option<&'a str> {
    match current {
        Some(id) if previous != Some(id) => Some(id),
        _ => None,
    }
}

fn section_offsets() -> Vec<SectionOffset> {
    dom::query_all("[data-section]", None)
        .into_iter()
        .filter_map(|element| {
            let element = element.dyn_into::<HtmlElement>().ok()?;
            Some(SectionOffset {
                id: element.id(),
                top: element.offset_top() as f64,
            })
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub active: Option<String>,
}

/// Recomputes progress and the active section on every scroll event, and once
/// on mount. The URL hash follows the active section.
#[hook]
pub fn use_scroll_tracker() -> ScrollState {
    let state = use_state(ScrollState::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let last_active: Rc<RefCell<Option<String>>> = Rc::default();
                let update = move || {
                    let metrics = ScrollMetrics::read();
                    let sections = section_offsets();
                    let active = active_section(&sections, metrics.scroll_top).map(str::to_string);
                    let hash = hash_update(last_active.borrow().as_deref(), active.as_deref())
                        .map(str::to_string);
                    if let Some(id) = hash {
                        dom::replace_hash(&id);
                    }
                    *last_active.borrow_mut() = active.clone();
                    state.set(ScrollState {
                        progress: metrics.progress(),
                        active,
                    });
                };
                update();
                let listener = dom::window()
                    .map(|window| EventListener::new(&window, "scroll", move |_| update()));
                move || drop(listener)
            },
            (),
        );
    }
    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            document_height: 3000.0,
            viewport_height: 1000.0,
        }
    }

    fn sections() -> Vec<SectionOffset> {
        [("hero", 0.0), ("features", 800.0), ("pricing", 1600.0)]
            .into_iter()
            .map(|(id, top)| SectionOffset {
                id: id.to_string(),
                top,
            })
            .collect()
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(metrics(0.0).progress(), 0.0);
        assert_eq!(metrics(2000.0).progress(), 100.0);
        assert_eq!(metrics(1000.0).progress(), 50.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=40 {
            let progress = metrics(step as f64 * 50.0).progress();
            assert!(progress >= previous);
            previous = progress;
        }
    }

    #[test]
    fn short_page_reports_zero() {
        let short = ScrollMetrics {
            scroll_top: 10.0,
            document_height: 800.0,
            viewport_height: 900.0,
        };
        assert_eq!(short.progress(), 0.0);
    }

    #[test]
    fn active_section_uses_lookahead() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0), Some("hero"));
        assert_eq!(active_section(&sections, 599.0), Some("hero"));
        assert_eq!(active_section(&sections, 600.0), Some("features"));
        assert_eq!(active_section(&sections, 5000.0), Some("pricing"));
    }

    #[test]
    fn falls_back_to_first_section() {
        let sections = vec![SectionOffset {
            id: "intro".to_string(),
            top: 900.0,
        }];
        assert_eq!(active_section(&sections, 0.0), Some("intro"));
        assert_eq!(active_section(&[], 0.0), None);
    }

    #[test]
    fn hash_follows_section_changes_only() {
        assert_eq!(hash_update(None, Some("hero")), Some("hero"));
        assert_eq!(hash_update(Some("hero"), Some("hero")), None);
        assert_eq!(hash_update(Some("hero"), Some("features")), Some("features"));
        assert_eq!(hash_update(Some("features"), None), None);
        assert_eq!(hash_update(None, None), None);
    }

    #[test]
    fn scrolling_within_a_section_writes_the_hash_once() {
        let sections = sections();
        let mut previous: Option<&str> = None;
        let mut writes = Vec::new();
        for scroll_top in [0.0, 100.0, 300.0, 650.0, 700.0, 1500.0, 1550.0] {
            let active = active_section(&sections, scroll_top);
            if let Some(id) = hash_update(previous, active) {
                writes.push(id);
            }
            previous = active;
        }
        assert_eq!(writes, vec!["hero", "features", "pricing"]);
    }
}
