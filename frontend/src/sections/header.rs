use yew::prelude::*;

use crate::content::{NAV_LINKS, PRODUCT_NAME};
use crate::viewport::Layout;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub layout: Layout,
    pub on_contact: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { layout, on_contact } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let talk_to_us = {
        let menu_open = menu_open.clone();
        let on_contact = on_contact.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_contact.emit(());
        })
    };

    html! {
        <header class={classes!("site-header", layout.is_mobile().then(|| "mobile"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 20px;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 95%;
                        height: 90px;
                        border-radius: 100px;
                        border: 1px solid var(--color-gray-400, #cbd5e0);
                        background: var(--color-bg-primary, #ffffff);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0 1.25rem;
                        box-sizing: border-box;
                    }
                    .site-header.mobile {
                        top: 12px;
                        height: 64px;
                    }
                    .header-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                        color: var(--color-text-primary, #1a202c);
                        font-family: 'Vend Sans', sans-serif;
                        font-weight: bold;
                        font-size: 1.875rem;
                    }
                    .header-logo:hover { opacity: 0.8; }
                    .header-logo img { width: 60px; height: 60px; }
                    .site-header.mobile .header-logo { font-size: 1.25rem; }
                    .site-header.mobile .header-logo img { width: 40px; height: 40px; }
                    .talk-button {
                        height: 90%;
                        padding: 0 1.5rem;
                        border-radius: 100px;
                        border: 2px solid var(--color-tertiary, #e768e6);
                        background: transparent;
                        color: var(--color-tertiary, #e768e6);
                        font-weight: bold;
                        cursor: pointer;
                        transition: all 0.2s ease-in-out;
                    }
                    .talk-button:hover { transform: scale(1.08); }
                    .burger-menu {
                        background: none;
                        border: none;
                        display: flex;
                        flex-direction: column;
                        gap: 5px;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: var(--color-text-primary, #1a202c);
                    }
                    .menu-drawer-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        z-index: 1500;
                    }
                    .menu-drawer {
                        position: fixed;
                        top: 0;
                        right: 0;
                        height: 100vh;
                        width: 280px;
                        background: white;
                        padding: 1.5rem;
                        box-sizing: border-box;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        z-index: 1600;
                    }
                    .menu-drawer a {
                        padding: 0.75rem 0;
                        color: var(--color-text-primary, #1a202c);
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .menu-divider { height: 1px; background: var(--color-gray-200, #edf2f7); margin: 0.5rem 0; }
                "#}
            </style>
            <a href="#" class="header-logo">
                <img src="./favicon.ico" alt="OrgLookup Logo" />
                { PRODUCT_NAME }
            </a>
            if layout.is_mobile() {
                <>
                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                if *menu_open {
                    <>
                    <div class="menu-drawer-backdrop" onclick={close_menu.clone()}></div>
                    <nav class="menu-drawer">
                        <strong>{"Menu"}</strong>
                        { for NAV_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} onclick={close_menu.clone()}>{ *label }</a>
                        }) }
                        <div class="menu-divider"></div>
                        <button class="talk-button" onclick={talk_to_us}>{"Talk to us"}</button>
                    </nav>
                    </>
                }
                </>
            } else {
                <button class="talk-button" onclick={talk_to_us}>{"Talk to us →"}</button>
            }
        </header>
    }
}
