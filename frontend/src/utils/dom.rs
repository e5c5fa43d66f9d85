use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::error::DomError;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn root_element() -> Option<Element> {
    document().and_then(|d| d.document_element())
}

/// Adds or removes a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = body() {
        if let Err(e) = body.class_list().toggle_with_force(class, enabled) {
            log::warn!("Failed to toggle body class {}: {:?}", class, e);
        }
    }
}

/// Locks page scrolling while a modal is open.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::warn!("Failed to update body overflow: {:?}", e);
        }
    }
}

pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = root_element() {
        if let Err(e) = root.set_attribute(name, value) {
            log::warn!("Failed to set {} on document root: {:?}", name, e);
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn document_hidden() -> bool {
    document().map(|d| d.hidden()).unwrap_or(false)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn device_pixel_ratio() -> f64 {
    window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Every element under `scope` (or the document) matching `selector`.
pub fn query_all(selector: &str, scope: Option<&Element>) -> Vec<Element> {
    let list = match scope {
        Some(scope) => scope.query_selector_all(selector),
        None => match document() {
            Some(doc) => doc.query_selector_all(selector),
            None => return Vec::new(),
        },
    };
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Scrolls the section with `id` into view. Returns `false` when the page has
/// no such section.
pub fn scroll_to_section(id: &str, reduced_motion: bool) -> bool {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("No section with id {}", id);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Brings `element` into view inside its scroll container without moving the
/// page more than needed.
pub fn scroll_into_view_nearest(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Rewrites the URL fragment without adding a history entry.
pub fn replace_hash(id: &str) {
    let Some(window) = window() else {
        return;
    };
    let result = window
        .history()
        .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id))));
    if let Err(e) = result {
        log::warn!("Failed to replace location hash: {:?}", e);
    }
}

pub fn focus(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.focus();
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, DomError> {
    canvas
        .get_context("2d")?
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(DomError::NoCanvasContext)
}

/// `navigator.clipboard.writeText(text)`. The clipboard object is missing
/// outside secure contexts, so that case is checked before calling into it.
pub async fn write_clipboard(text: &str) -> Result<(), DomError> {
    let window = window().ok_or(DomError::NoWindow)?;
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        return Err(DomError::ClipboardUnavailable);
    }
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}
