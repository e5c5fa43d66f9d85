use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::{MAGNETIC_STRENGTH, TILT_MAX_DEG};
use crate::utils::dom;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    fn of(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Pull towards the pointer, as a fraction of the offset from the centre.
pub fn magnetic_offset(pointer_x: f64, pointer_y: f64, rect: Rect) -> (f64, f64) {
    let x = pointer_x - rect.left - rect.width / 2.0;
    let y = pointer_y - rect.top - rect.height / 2.0;
    (x * MAGNETIC_STRENGTH, y * MAGNETIC_STRENGTH)
}

/// `(rotate_x, rotate_y)` in degrees. The edges tilt by half of
/// `TILT_MAX_DEG` each way.
pub fn tilt_angles(pointer_x: f64, pointer_y: f64, rect: Rect) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (pointer_x - rect.left) / rect.width - 0.5;
    let y = (pointer_y - rect.top) / rect.height - 0.5;
    (y * -TILT_MAX_DEG, x * TILT_MAX_DEG)
}

pub fn press_transform(pressed: bool) -> &'static str {
    if pressed {
        "scale(0.97)"
    } else {
        "scale(1)"
    }
}

fn on_mouse<F>(element: &Element, event_type: &'static str, handler: F) -> EventListener
where
    F: Fn(&Element, &MouseEvent) + 'static,
{
    let target = element.clone();
    EventListener::new(element, event_type, move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            handler(&target, event);
        }
    })
}

fn set_transform(element: &Element, value: &str) {
    dom::set_style(element, "transform", value);
}

fn bind_pointer_effects() -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for button in dom::query_all("[data-magnetic]", None) {
        listeners.push(on_mouse(&button, "mousemove", |el, event| {
            let (x, y) = magnetic_offset(event.client_x() as f64, event.client_y() as f64, Rect::of(el));
            set_transform(el, &format!("translate({}px, {}px)", x, y));
        }));
        listeners.push(on_mouse(&button, "mouseleave", |el, _| {
            set_transform(el, "translate(0, 0)");
        }));
    }

    for button in dom::query_all(".btn", None) {
        listeners.push(on_mouse(&button, "pointerdown", |el, _| {
            set_transform(el, press_transform(true));
        }));
        listeners.push(on_mouse(&button, "pointerup", |el, _| {
            set_transform(el, press_transform(false));
        }));
    }

    for card in dom::query_all("[data-tilt]", None) {
        listeners.push(on_mouse(&card, "mousemove", |el, event| {
            let (rx, ry) = tilt_angles(event.client_x() as f64, event.client_y() as f64, Rect::of(el));
            set_transform(el, &format!("rotateX({}deg) rotateY({}deg)", rx, ry));
        }));
        listeners.push(on_mouse(&card, "mouseleave", |el, _| {
            set_transform(el, "rotateX(0) rotateY(0)");
        }));
    }

    listeners
}

/// Binds the hover and press effects to whatever `[data-magnetic]`, `.btn`
/// and `[data-tilt]` elements are on the page once it has mounted.
#[hook]
pub fn use_pointer_effects() {
    use_effect_with_deps(
        move |_| {
            let listeners = bind_pointer_effects();
            move || drop(listeners)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn magnetic_centre_is_neutral() {
        assert_eq!(magnetic_offset(200.0, 100.0, RECT), (0.0, 0.0));
    }

    #[test]
    fn magnetic_pulls_towards_pointer() {
        let (x, y) = magnetic_offset(300.0, 150.0, RECT);
        assert!((x - 15.0).abs() < 1e-9);
        assert!((y - 7.5).abs() < 1e-9);
    }

    #[test]
    fn tilt_is_bounded() {
        let (rx, ry) = tilt_angles(300.0, 150.0, RECT);
        assert_eq!((rx, ry), (-4.0, 4.0));
        assert_eq!(tilt_angles(200.0, 100.0, RECT), (0.0, 0.0));
    }

    #[test]
    fn tilt_ignores_empty_rect() {
        let empty = Rect {
            width: 0.0,
            ..RECT
        };
        assert_eq!(tilt_angles(10.0, 10.0, empty), (0.0, 0.0));
    }
}
