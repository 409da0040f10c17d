use yew::prelude::*;

use crate::carousel::HeroCarousel;
use crate::viewport::Layout;
use crate::walkthrough::WorkflowWalkthrough;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub layout: Layout,
    pub on_contact: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let join_beta = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    // Wide screens get the clickable carousel, narrow ones the self-playing walkthrough.
    let illustration = match props.layout {
        Layout::Desktop => html! { <HeroCarousel /> },
        Layout::Mobile => html! { <WorkflowWalkthrough /> },
    };

    html! {
        <section class={classes!("hero", props.layout.is_mobile().then(|| "mobile"))}>
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        padding: 140px 2rem 4rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        box-sizing: border-box;
                    }
                    .hero.mobile {
                        grid-template-columns: 1fr;
                        padding: 100px 1rem 3rem;
                        gap: 2rem;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        line-height: 1.15;
                        color: var(--color-text-primary, #1a202c);
                        margin: 0;
                    }
                    .hero.mobile h1 { font-size: 2rem; }
                    .hero-brand {
                        font-weight: bold;
                        color: var(--color-tertiary, #e768e6);
                    }
                    .hero-gradient {
                        display: inline-block;
                        background: linear-gradient(90deg, #e768e6 0%, #ff9b26 50%, #e768e6 100%);
                        background-size: 200% 100%;
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: shimmer 4s ease-in-out infinite;
                    }
                    @keyframes shimmer {
                        0% { background-position: -200% center; }
                        100% { background-position: 200% center; }
                    }
                    .hero-copy {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .hero.mobile .hero-copy { align-items: center; }
                    .hero p {
                        font-size: 1.25rem;
                        color: var(--color-text-secondary, #4a5568);
                        margin: 0;
                    }
                    .join-beta {
                        align-self: flex-start;
                        padding: 1rem 2.5rem;
                        border: none;
                        border-radius: 100px;
                        color: white;
                        font-size: 1.125rem;
                        font-weight: bold;
                        cursor: pointer;
                        background: linear-gradient(90deg, #e768e6 0%, #ff9b26 50%, #e768e6 100%);
                        background-size: 200% 100%;
                        transition: all 0.2s ease-in-out;
                    }
                    .hero.mobile .join-beta { align-self: center; }
                    .join-beta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 20px rgba(231, 104, 230, 0.4);
                    }
                    .hero-visual {
                        border-radius: 24px;
                        padding: 2rem 1rem;
                        background: linear-gradient(135deg, var(--color-primary, #2563eb) 0%, var(--color-accent-1, #7c3aed) 100%);
                        display: flex;
                        justify-content: center;
                    }
                "#}
            </style>
            <div class="hero-copy">
                <h1>
                    {"Turn your "}<span class="hero-brand">{"Salesforce"}</span>
                    {" Technical Debt into a "}<span class="hero-gradient">{"Clear Cleanup Plan ✨"}</span>
                </h1>
                <p>
                    {"Most admins inherit orgs burdened with years of technical debt. OrgLookup transforms complex cleanup into guided, actionable workflows."}
                </p>
                <button class="join-beta" onclick={join_beta}>{"Join Beta →"}</button>
            </div>
            <div class="hero-visual">
                { illustration }
            </div>
        </section>
    }
}
