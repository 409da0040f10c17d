use yew::prelude::*;

use crate::content::PAIN_POINTS;
use crate::viewport::Layout;

#[derive(Properties, PartialEq)]
pub struct PainPointsProps {
    pub layout: Layout,
}

#[function_component(PainPoints)]
pub fn pain_points(props: &PainPointsProps) -> Html {
    html! {
        <section class={classes!("pain-points", props.layout.is_mobile().then(|| "mobile"))}>
            <style>
                {r#"
                    .pain-points {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .pain-points.mobile { padding: 60px 1rem; }
                    .pain-points h2 {
                        text-align: center;
                        font-size: 2.25rem;
                        color: var(--color-text-primary, #1a202c);
                        margin-bottom: 4rem;
                    }
                    .pain-points.mobile h2 { font-size: 1.5rem; margin-bottom: 2rem; }
                    .pain-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .pain-points.mobile .pain-grid { grid-template-columns: 1fr; gap: 1rem; }
                    .pain-card {
                        padding: 1.5rem;
                        border-radius: 12px;
                        border: 1px solid var(--color-gray-200, #edf2f7);
                        transition: all 0.2s;
                    }
                    .pain-card:hover {
                        transform: scale(1.02);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .pain-card h3 {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin: 0 0 1rem;
                        font-size: 1.125rem;
                    }
                    .pain-card p {
                        margin: 0;
                        line-height: 1.5;
                        color: var(--color-text-secondary, #4a5568);
                    }
                "#}
            </style>
            <h2>{"The Reality Salesforce Admins Talk About Every Day"}</h2>
            <div class="pain-grid">
                { for PAIN_POINTS.iter().map(|point| html! {
                    <div class="pain-card" style={format!("background: {};", point.tint)}>
                        <h3><span>{ point.icon }</span>{ point.title }</h3>
                        <p>{ point.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
