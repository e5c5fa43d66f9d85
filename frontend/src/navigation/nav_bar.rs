use yew::prelude::*;

use crate::components::hooks::use_reduced_motion;
use crate::config::SECTIONS;
use crate::navigation::command_palette::CommandPalette;
use crate::navigation::scroll_tracker::use_scroll_tracker;
use crate::preferences::motion::MotionToggle;
use crate::preferences::theme::ThemeToggle;
use crate::utils::dom;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let scroll = use_scroll_tracker();
    let reduced = use_reduced_motion();

    let links = SECTIONS.iter().skip(1).map(|section| {
        let active = scroll.active.as_deref() == Some(section.id);
        let onclick = {
            let id = section.id;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                dom::scroll_to_section(id, reduced);
            })
        };
        html! {
            <a
                class={classes!("nav-link", active.then_some("active"))}
                href={format!("#{}", section.id)}
                {onclick}
            >
                {section.label}
            </a>
        }
    });

    html! {
        <header class="site-header">
            <div
                class="scroll-progress"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={format!("{:.0}", scroll.progress)}
                style={format!("width: {}%;", scroll.progress)}
            ></div>
            <nav class="nav">
                <a class="nav-logo" href="#hero">{"nebula"}</a>
                <div class="nav-links">
                    { for links }
                </div>
                <div class="nav-actions">
                    <CommandPalette />
                    <ThemeToggle />
                    <MotionToggle />
                </div>
            </nav>
        </header>
    }
}
