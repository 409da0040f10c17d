use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::viewport::use_layout;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Overlay around the lead form. Nothing is mounted while closed.
#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }
    html! { <ModalDialog on_close={props.on_close.clone()} /> }
}

fn closes_on_key(key: &str) -> bool {
    key == "Escape"
}

#[derive(Properties, PartialEq)]
struct ModalDialogProps {
    on_close: Callback<()>,
}

// Mounted only while open, so the key listener lives exactly as long as the dialog.
#[function_component(ModalDialog)]
fn modal_dialog(props: &ModalDialogProps) -> Html {
    let layout = use_layout();

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if closes_on_key(&e.key()) {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the overlay.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(5px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 2000;
                    }
                    .modal-content {
                        position: relative;
                        background: var(--color-bg, #faf9f7);
                        border-radius: 16px;
                        width: 100%;
                        max-width: 576px;
                        max-height: 100vh;
                        overflow-y: auto;
                        padding: 2rem;
                        box-sizing: border-box;
                    }
                    .modal-content.mobile {
                        border-radius: 0;
                        height: 100vh;
                        max-width: none;
                    }
                    .modal-content h2 {
                        text-align: center;
                        font-size: 1.5rem;
                        font-weight: bold;
                        margin: 0 0 1.5rem;
                        color: var(--color-text-primary, #1a202c);
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div
                class={classes!("modal-content", layout.is_mobile().then(|| "mobile"))}
                role="dialog"
                aria-modal="true"
                onclick={swallow}
            >
                <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                <h2>{"Join the Beta"}</h2>
                <ContactForm layout={layout} is_modal={true} on_success={props.on_close.clone()} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_closes() {
        assert!(closes_on_key("Escape"));
        assert!(!closes_on_key("Enter"));
        assert!(!closes_on_key("Esc "));
        assert!(!closes_on_key("escape"));
    }
}
