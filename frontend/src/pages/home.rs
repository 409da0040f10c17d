use log::info;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::contact_modal::ContactModal;
use crate::sections::{
    benefits::Benefits,
    comparison::Comparison,
    footer::Footer,
    header::Header,
    hero::Hero,
    pain_points::PainPoints,
    timeline::WorkflowTimeline,
};
use crate::viewport::use_layout;

#[function_component(Home)]
pub fn home() -> Html {
    let layout = use_layout();
    let modal_open = use_state(|| false);

    let open_contact = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            info!("Opening contact modal");
            modal_open.set(true);
        })
    };

    let close_contact = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <div class="landing" style="min-height: 100vh; background: #faf9f7; display: flex; flex-direction: column;">
            <Header layout={layout} on_contact={open_contact.clone()} />
            <Hero layout={layout} on_contact={open_contact} />
            <PainPoints layout={layout} />
            <WorkflowTimeline layout={layout} />
            <Comparison layout={layout} />
            <Benefits layout={layout} />
            <ContactForm layout={layout} />
            <Footer layout={layout} />
            <ContactModal is_open={*modal_open} on_close={close_contact} />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1>{"Page not found"}</h1>
            <a href="/">{"Back to OrgLookup"}</a>
        </div>
    }
}
