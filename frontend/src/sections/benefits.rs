use yew::prelude::*;

use crate::content::BENEFITS;
use crate::viewport::Layout;

#[derive(Properties, PartialEq)]
pub struct BenefitsProps {
    pub layout: Layout,
}

#[function_component(Benefits)]
pub fn benefits(props: &BenefitsProps) -> Html {
    html! {
        <section id="features" class={classes!("benefits", props.layout.is_mobile().then(|| "mobile"))}>
            <style>
                {r#"
                    .benefits {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .benefits.mobile { padding: 60px 1rem; }
                    .benefits h2 {
                        text-align: center;
                        font-size: 2.25rem;
                        color: var(--color-text-primary, #1a202c);
                        margin: 0 0 3rem;
                    }
                    .benefits.mobile h2 { font-size: 1.5rem; margin-bottom: 2rem; }
                    .benefit-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .benefits.mobile .benefit-grid { grid-template-columns: 1fr; gap: 1rem; }
                    .benefit-card {
                        padding: 2rem 1.5rem;
                        border-radius: 12px;
                        border: 1px solid var(--color-gray-200, #edf2f7);
                        background: white;
                        text-align: center;
                        transition: transform 0.3s ease-out, box-shadow 0.3s ease-out;
                    }
                    .benefit-card:hover {
                        transform: translateY(-8px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .benefit-icon { font-size: 2rem; }
                    .benefit-card h3 { font-size: 1.125rem; margin: 1rem 0 0.5rem; }
                    .benefit-card p { margin: 0; color: var(--color-text-secondary, #4a5568); }
                "#}
            </style>
            <h2>{"What You Get"}</h2>
            <div class="benefit-grid">
                { for BENEFITS.iter().map(|benefit| html! {
                    <div class="benefit-card">
                        <div class="benefit-icon">{ benefit.icon }</div>
                        <h3>{ benefit.title }</h3>
                        <p>{ benefit.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
