use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toasts {
    next_id: u32,
    pub items: Vec<Toast>,
}

pub enum ToastAction {
    Push { kind: ToastKind, title: String, description: String },
    Dismiss(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { kind, title, description } => {
                next.items.push(Toast { id: next.next_id, kind, title, description });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => next.items.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

/// Handle for raising notifications from anywhere under [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct Toaster(UseReducerDispatcher<Toasts>);

impl Toaster {
    pub fn success(&self, title: &str, description: &str) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(ToastKind::Error, title, description);
    }

    fn push(&self, kind: ToastKind, title: &str, description: &str) {
        self.0.dispatch(ToastAction::Push {
            kind,
            title: title.to_string(),
            description: description.to_string(),
        });
    }
}

/// `None` when rendered outside a [`ToastProvider`].
#[hook]
pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let toaster = Toaster(toasts.dispatcher());

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { props.children.clone() }
            <div class="toast-stack">
                <style>
                    {r#"
                        .toast-stack {
                            position: fixed;
                            bottom: 1.5rem;
                            left: 50%;
                            transform: translateX(-50%);
                            display: flex;
                            flex-direction: column;
                            gap: 0.75rem;
                            z-index: 3000;
                            width: min(420px, calc(100% - 2rem));
                        }
                        .toast {
                            display: flex;
                            justify-content: space-between;
                            align-items: flex-start;
                            gap: 1rem;
                            padding: 0.875rem 1rem;
                            border-radius: 8px;
                            color: white;
                            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                            animation: toastIn 0.25s ease-out;
                        }
                        .toast.success { background: #38a169; }
                        .toast.error { background: #e53e3e; }
                        .toast-title { font-weight: bold; }
                        .toast-close {
                            background: none;
                            border: none;
                            color: white;
                            cursor: pointer;
                            font-size: 1rem;
                        }
                        @keyframes toastIn {
                            from { opacity: 0; transform: translateY(10px); }
                            to { opacity: 1; transform: translateY(0); }
                        }
                    "#}
                </style>
                { for toasts.items.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        }, id);
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let kind = match props.toast.kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };

    html! {
        <div class={classes!("toast", kind)} role="status">
            <div>
                <div class="toast-title">{ &props.toast.title }</div>
                <div>{ &props.toast.description }</div>
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(toasts: Rc<Toasts>, kind: ToastKind, title: &str) -> Rc<Toasts> {
        toasts.reduce(ToastAction::Push { kind, title: title.to_string(), description: String::new() })
    }

    #[test]
    fn pushes_get_distinct_ids() {
        let toasts = push(Rc::new(Toasts::default()), ToastKind::Success, "Success!");
        let toasts = push(toasts, ToastKind::Error, "Error");
        assert_eq!(toasts.items.len(), 2);
        assert_ne!(toasts.items[0].id, toasts.items[1].id);
        assert_eq!(toasts.items[1].kind, ToastKind::Error);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let toasts = push(Rc::new(Toasts::default()), ToastKind::Success, "first");
        let toasts = push(toasts, ToastKind::Success, "second");
        let first = toasts.items[0].id;
        let toasts = toasts.reduce(ToastAction::Dismiss(first));
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].title, "second");
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let toasts = push(Rc::new(Toasts::default()), ToastKind::Error, "Error");
        let toasts = toasts.reduce(ToastAction::Dismiss(99));
        assert_eq!(toasts.items.len(), 1);
    }
}
