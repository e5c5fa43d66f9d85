use yew::prelude::*;

mod config;
mod error;
mod utils {
    pub mod animation;
    pub mod dom;
    pub mod storage;
}
mod preferences {
    pub mod motion;
    pub mod theme;
}
mod navigation {
    pub mod command_palette;
    pub mod nav_bar;
    pub mod scroll_tracker;
}
mod effects {
    pub mod confetti;
    pub mod easter_egg;
    pub mod parallax;
    pub mod particles;
    pub mod pointer;
    pub mod reveal;
}
mod sections {
    pub mod contact;
    pub mod faq;
    pub mod gallery;
    pub mod pricing;
    pub mod timeline;
}
mod components {
    pub mod copy;
    pub mod hooks;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::toast::ToastProvider;
use pages::landing::Landing;
use preferences::motion::MotionProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <MotionProvider>
            <ToastProvider>
                <Landing />
            </ToastProvider>
        </MotionProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Mounting landing page");
    yew::Renderer::<App>::new().render();
}
