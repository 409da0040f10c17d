use yew::prelude::*;

use crate::content::{Bullet, MANUAL_PROCESS, ORGLOOKUP_PROCESS};
use crate::sections::timeline::bullet_item;
use crate::viewport::Layout;

#[derive(Properties, PartialEq)]
pub struct ComparisonProps {
    pub layout: Layout,
}

fn column(title: &str, class: &'static str, items: &[Bullet]) -> Html {
    html! {
        <div class={classes!("comparison-column", class)}>
            <h3>{ title }</h3>
            <ul>
                { for items.iter().map(bullet_item) }
            </ul>
        </div>
    }
}

/// Manual cleanup next to the OrgLookup workflow.
#[function_component(Comparison)]
pub fn comparison(props: &ComparisonProps) -> Html {
    html! {
        <section class={classes!("comparison", props.layout.is_mobile().then(|| "mobile"))}>
            <style>
                {r#"
                    .comparison {
                        padding: 5rem 2rem;
                        background: #f8f9fa;
                    }
                    .comparison.mobile { padding: 60px 1rem; }
                    .comparison h2 {
                        text-align: center;
                        font-size: 2.25rem;
                        color: var(--color-text-primary, #1a202c);
                        margin: 0 0 3rem;
                    }
                    .comparison.mobile h2 { font-size: 1.5rem; margin-bottom: 2rem; }
                    .comparison-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .comparison.mobile .comparison-grid { grid-template-columns: 1fr; }
                    .comparison-column {
                        padding: 2rem;
                        border-radius: 12px;
                        background: white;
                        border: 1px solid var(--color-gray-200, #edf2f7);
                    }
                    .comparison-column.manual h3 { color: #e53e3e; }
                    .comparison-column.automated { border-color: var(--color-primary, #2563eb); }
                    .comparison-column.automated h3 { color: var(--color-primary, #2563eb); }
                    .comparison-column li {
                        font-size: 1.125rem;
                        line-height: 1.6;
                        margin-bottom: 0.75rem;
                        color: var(--color-text-primary, #1a202c);
                    }
                "#}
            </style>
            <h2>{"Manual vs Automated Cleanup"}</h2>
            <div class="comparison-grid">
                { column("Manual process", "manual", &MANUAL_PROCESS) }
                { column("With OrgLookup", "automated", &ORGLOOKUP_PROCESS) }
            </div>
        </section>
    }
}
