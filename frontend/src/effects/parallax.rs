use web_sys::Element;
use yew::prelude::*;

use crate::components::hooks::{use_page_visible, use_reduced_motion};
use crate::utils::animation::FrameLoop;
use crate::utils::dom;

/// Background layers, slowest first.
const LAYER_DEPTHS: &[f64] = &[0.1, 0.25, 0.4];

/// Vertical offset of a layer for the current scroll position.
pub fn layer_offset(scroll_y: f64, depth: f64) -> f64 {
    scroll_y * depth
}

fn layer_depth(layer: &Element) -> f64 {
    layer
        .get_attribute("data-depth")
        .and_then(|depth| depth.parse().ok())
        .unwrap_or(0.0)
}

fn translate(layer: &Element, offset: f64) {
    dom::set_style(layer, "transform", &format!("translate3d(0, {}px, 0)", offset));
}

/// Translates every `[data-depth]` layer each frame while motion is enabled
/// and the tab is visible.
#[function_component(ParallaxLayers)]
pub fn parallax_layers() -> Html {
    let container = use_node_ref();
    let frames = use_mut_ref(FrameLoop::default);
    let reduced = use_reduced_motion();
    let visible = use_page_visible();

    {
        let container = container.clone();
        let frames = frames.borrow().clone();
        use_effect_with_deps(
            move |(reduced, visible)| {
                let layers = container
                    .cast::<Element>()
                    .map(|root| dom::query_all("[data-depth]", Some(&root)))
                    .unwrap_or_default();
                if *reduced {
                    frames.stop();
                    for layer in &layers {
                        translate(layer, 0.0);
                    }
                } else if *visible {
                    frames.start(move |_| {
                        let scroll_y = dom::scroll_y();
                        for layer in &layers {
                            translate(layer, layer_offset(scroll_y, layer_depth(layer)));
                        }
                        true
                    });
                } else {
                    frames.stop();
                }
                move || frames.stop()
            },
            (reduced, visible),
        );
    }

    let layers = LAYER_DEPTHS.iter().enumerate().map(|(index, depth)| {
        html! {
            <div
                class={format!("parallax-layer parallax-layer-{}", index + 1)}
                data-depth={depth.to_string()}
                aria-hidden="true"
            ></div>
        }
    });

    html! {
        <div ref={container} class="parallax">
            { for layers }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_scales_with_depth() {
        assert_eq!(layer_offset(0.0, 0.4), 0.0);
        assert_eq!(layer_offset(1000.0, 0.25), 250.0);
        assert!(layer_offset(500.0, 0.4) > layer_offset(500.0, 0.1));
    }
}
