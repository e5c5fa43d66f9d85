use yew::prelude::*;

pub const QUESTIONS: &[(&str, &str)] = &[
    (
        "Does the page work without JavaScript?",
        "The content does. Toggles, the palette and the effects need WebAssembly.",
    ),
    (
        "What does reduced motion turn off?",
        "Parallax, particles, confetti and animated prices. Scrolling jumps instead of gliding.",
    ),
    (
        "Is anything sent to a server?",
        "No. The contact form validates locally and your theme choice stays in this browser.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))} data-faq="">
            <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                <span class="question-text">{props.question.to_string()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" hidden={!*is_open}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-list">
            { for QUESTIONS.iter().map(|(question, answer)| html! {
                <FaqItem question={*question}>
                    <p>{*answer}</p>
                </FaqItem>
            }) }
        </div>
    }
}
