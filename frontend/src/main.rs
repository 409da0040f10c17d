use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod viewport;
mod carousel;
mod walkthrough;
mod lead;
mod lead_store;
mod toast;
mod components {
    pub mod previews;
    pub mod contact_form;
    pub mod contact_modal;
}
mod sections {
    pub mod header;
    pub mod hero;
    pub mod pain_points;
    pub mod timeline;
    pub mod comparison;
    pub mod benefits;
    pub mod footer;
}
mod pages {
    pub mod home;
}

use pages::home::{Home, NotFound};
use toast::ToastProvider;
use viewport::ViewportProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ViewportProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ViewportProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
