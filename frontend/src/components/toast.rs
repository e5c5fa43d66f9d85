use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_LIFETIME_MS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(toast) => queue.toasts.push(toast),
            ToastAction::Dismiss(id) => queue.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(queue)
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    push: Callback<String>,
}

impl ToastContext {
    pub fn show(&self, message: impl Into<String>) {
        self.push.emit(message.into());
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| ToastContext {
        push: Callback::from(|message: String| log::info!("toast: {}", message)),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders the toast stack and hands out a stable `show` callback. Each toast
/// is removed after a fixed delay whatever the user does.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let push = {
        let dispatcher = queue.dispatcher();
        // Ids are never reused.
        let next_id = use_mut_ref(|| 0u32);
        use_callback(
            move |message: String, _| {
                let id = {
                    let mut next_id = next_id.borrow_mut();
                    let id = *next_id;
                    *next_id += 1;
                    id
                };
                dispatcher.dispatch(ToastAction::Push(Toast { id, message }));
                let dispatcher = dispatcher.clone();
                Timeout::new(TOAST_LIFETIME_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            },
            (),
        )
    };

    let context = ToastContext { push };

    html! {
        <ContextProvider<ToastContext> {context}>
            { for props.children.iter() }
            <div class="toast-container" aria-live="polite">
                { for queue.toasts().iter().map(|toast| html! {
                    <div key={toast.id} class="toast" role="status">{toast.message.clone()}</div>
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(queue: ToastQueue, action: ToastAction) -> ToastQueue {
        (*Rc::new(queue).reduce(action)).clone()
    }

    fn push(queue: ToastQueue, id: u32, message: &str) -> ToastQueue {
        reduce(
            queue,
            ToastAction::Push(Toast {
                id,
                message: message.to_string(),
            }),
        )
    }

    #[test]
    fn push_appends_in_order() {
        let queue = push(ToastQueue::default(), 0, "one");
        let queue = push(queue, 1, "two");
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = push(ToastQueue::default(), 0, "one");
        let queue = push(queue, 1, "two");
        let queue = reduce(queue, ToastAction::Dismiss(0));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "two");
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let queue = push(ToastQueue::default(), 7, "one");
        let queue = reduce(queue, ToastAction::Dismiss(7));
        let queue = reduce(queue, ToastAction::Dismiss(7));
        assert!(queue.toasts().is_empty());
    }
}
