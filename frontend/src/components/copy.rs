use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Copies `data-copy` to the clipboard and reports the outcome as a toast.
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let toast = use_toast();
    let onclick = {
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            let text = text.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match dom::write_clipboard(&text).await {
                    Ok(()) => toast.show("Link copied"),
                    Err(e) => {
                        log::warn!("Clipboard write failed: {}", e);
                        toast.show("Copy failed");
                    }
                }
            });
        })
    };
    html! {
        <button class="btn btn-ghost" data-copy={props.text.clone()} {onclick}>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastButtonProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Shows its `data-toast` text when clicked.
#[function_component(ToastButton)]
pub fn toast_button(props: &ToastButtonProps) -> Html {
    let toast = use_toast();
    let onclick = {
        let message = props.message.clone();
        Callback::from(move |_: MouseEvent| toast.show(message.to_string()))
    };
    html! {
        <button class="btn btn-ghost" data-toast={props.message.clone()} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
