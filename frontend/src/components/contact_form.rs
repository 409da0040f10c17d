use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{FORM_HEADING, PRIVACY_NOTE};
use crate::lead::{settle, LeadField, LeadForm, LeadFormAction};
use crate::lead_store::LeadStore;
use crate::toast::{use_toaster, ToastKind};
use crate::viewport::Layout;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub layout: Layout,
    #[prop_or_default]
    pub is_modal: bool,
    /// Fired once per successful submission, and only while the form is still mounted.
    #[prop_or_default]
    pub on_success: Option<Callback<()>>,
}

fn on_input_edit(form: &UseReducerHandle<LeadForm>, field: LeadField) -> Callback<InputEvent> {
    let dispatcher = form.dispatcher();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        dispatcher.dispatch(LeadFormAction::Edit(field, input.value()));
    })
}

fn on_textarea_edit(form: &UseReducerHandle<LeadForm>, field: LeadField) -> Callback<InputEvent> {
    let dispatcher = form.dispatcher();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        dispatcher.dispatch(LeadFormAction::Edit(field, input.value()));
    })
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(LeadForm::default);
    let toaster = use_toaster();
    let is_mounted = use_is_mounted();

    let onsubmit = {
        let form = form.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let lead = match form.pending_lead() {
                Some(lead) => lead,
                None => return,
            };
            form.dispatch(LeadFormAction::Submit);

            let dispatcher = form.dispatcher();
            let toaster = toaster.clone();
            let is_mounted = is_mounted.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                let result = LeadStore::from_config().create(&lead).await;
                if let Err(err) = &result {
                    gloo_console::error!(format!("Lead submission failed: {}", err));
                }

                let settled = settle(result.is_ok(), is_mounted());
                if let Some(toaster) = &toaster {
                    match settled.notice {
                        ToastKind::Success => {
                            toaster.success("Success!", "We'll be in touch soon about early access.")
                        }
                        ToastKind::Error => {
                            toaster.error("Error", "Something went wrong. Please try again.")
                        }
                    }
                }
                if let Some(action) = settled.action {
                    dispatcher.dispatch(action);
                }
                if settled.close {
                    if let Some(on_success) = on_success {
                        on_success.emit(());
                    }
                }
            });
        })
    };

    let draft = &form.draft;
    let submitting = form.submitting;
    let variant = if props.layout.is_mobile() { "mobile" } else { "desktop" };

    html! {
        <section id={(!props.is_modal).then(|| "contact-form")} class={classes!("contact-section", variant, props.is_modal.then(|| "in-modal"))}>
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 1rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 3rem;
                    }
                    .contact-section.mobile {
                        padding: 60px 1rem;
                        gap: 1.5rem;
                    }
                    .contact-section.in-modal {
                        padding: 0;
                    }
                    .contact-section h2 {
                        max-width: 600px;
                        text-align: center;
                        color: var(--color-text-primary, #1a202c);
                        font-size: 2.25rem;
                    }
                    .contact-section.mobile h2 {
                        font-size: 1.25rem;
                        line-height: 1.3;
                    }
                    .lead-form {
                        width: 100%;
                        max-width: 600px;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        background: var(--color-gray-100, #f7fafc);
                        border: 1px solid var(--color-gray-200, #edf2f7);
                        border-radius: 12px;
                        padding: 2rem;
                        box-sizing: border-box;
                    }
                    .contact-section.mobile .lead-form {
                        gap: 1rem;
                        padding: 1.25rem;
                    }
                    .lead-form label {
                        display: block;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                        color: var(--color-text-primary, #1a202c);
                    }
                    .lead-form .required::after {
                        content: " *";
                        color: #e53e3e;
                    }
                    .lead-form input, .lead-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        background: white;
                        border: 1px solid var(--color-gray-300, #e2e8f0);
                        border-radius: 6px;
                        font-size: 1rem;
                    }
                    .lead-form textarea { resize: vertical; }
                    .lead-form input:focus, .lead-form textarea:focus {
                        outline: none;
                        border-color: #2563eb;
                        box-shadow: 0 0 0 1px #2563eb;
                    }
                    .lead-submit {
                        width: 100%;
                        padding: 0.875rem;
                        border: none;
                        border-radius: 6px;
                        background: #ef4444;
                        color: white;
                        font-size: 1.125rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .lead-submit:hover { background: #dc2626; }
                    .lead-submit:disabled { opacity: 0.7; cursor: wait; }
                    .loading-spinner {
                        display: inline-block;
                        width: 16px;
                        height: 16px;
                        margin-right: 0.5rem;
                        border: 3px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                        vertical-align: middle;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .privacy-note {
                        font-size: 0.875rem;
                        text-align: center;
                        color: var(--color-text-secondary, #4a5568);
                    }
                "#}
            </style>
            if !props.is_modal {
                <h2>{ FORM_HEADING }</h2>
            }
            <form class="lead-form" onsubmit={onsubmit}>
                <div>
                    <label for="email" class="required">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        required=true
                        placeholder="your.email@company.com"
                        value={draft.get(LeadField::Email).to_string()}
                        oninput={on_input_edit(&form, LeadField::Email)}
                    />
                </div>
                <div>
                    <label for="companyName" class="required">{"Company Name"}</label>
                    <input
                        id="companyName"
                        type="text"
                        required=true
                        placeholder="Your Company"
                        value={draft.get(LeadField::CompanyName).to_string()}
                        oninput={on_input_edit(&form, LeadField::CompanyName)}
                    />
                </div>
                <div>
                    <label for="phoneNumber">{"Phone Number"}</label>
                    <input
                        id="phoneNumber"
                        type="tel"
                        placeholder="+1 555 000 0000"
                        value={draft.get(LeadField::PhoneNumber).to_string()}
                        oninput={on_input_edit(&form, LeadField::PhoneNumber)}
                    />
                </div>
                <div>
                    <label for="challenge">{"What is your biggest challenge with technical debt in Salesforce?"}</label>
                    <textarea
                        id="challenge"
                        rows={if props.layout.is_mobile() { "3" } else { "4" }}
                        placeholder="Tell us about your biggest technical debt challenge..."
                        value={draft.get(LeadField::Challenges).to_string()}
                        oninput={on_textarea_edit(&form, LeadField::Challenges)}
                    />
                </div>
                <button type="submit" class="lead-submit" disabled={submitting}>
                    if submitting {
                        <><span class="loading-spinner"></span>{"Submitting..."}</>
                    } else {
                        {"Join Beta"}
                    }
                </button>
                <p class="privacy-note">{ PRIVACY_NOTE }</p>
            </form>
        </section>
    }
}
