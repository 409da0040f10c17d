use yew::prelude::*;

use crate::content::{Bullet, TimelineEntry, TIMELINE};
use crate::viewport::Layout;

pub fn bullet_item(bullet: &Bullet) -> Html {
    let (lead_in, rest) = *bullet;
    html! {
        <li><strong>{ lead_in }</strong>{ rest }</li>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkflowTimelineProps {
    pub layout: Layout,
}

#[function_component(WorkflowTimeline)]
pub fn workflow_timeline(props: &WorkflowTimelineProps) -> Html {
    let mobile = props.layout.is_mobile();

    html! {
        <section id="how-it-works" class={classes!("timeline", mobile.then(|| "mobile"))}>
            <style>
                {r#"
                    .timeline {
                        padding: 6rem 2rem;
                        max-width: 1400px;
                        margin: 0 auto;
                    }
                    .timeline.mobile { padding: 60px 1rem; }
                    .timeline-intro { text-align: center; margin-bottom: 4rem; }
                    .timeline-intro h2 {
                        font-size: 2.25rem;
                        color: var(--color-text-primary, #1a202c);
                        margin: 0 0 1rem;
                    }
                    .timeline-intro p {
                        font-size: 1.25rem;
                        color: var(--color-text-secondary, #4a5568);
                        max-width: 600px;
                        margin: 0 auto;
                    }
                    .timeline.mobile .timeline-intro h2 { font-size: 1.5rem; }
                    .timeline.mobile .timeline-intro p { font-size: 1rem; }
                    .timeline-step {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                        padding: 5rem 0;
                    }
                    .timeline-step.reversed { flex-direction: row-reverse; }
                    .timeline.mobile .timeline-step,
                    .timeline.mobile .timeline-step.reversed {
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 2rem 0;
                    }
                    .timeline-text { flex: 1; }
                    .step-badge {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        background: var(--color-primary, #2563eb);
                        color: white;
                        font-weight: bold;
                        margin-bottom: 1rem;
                    }
                    .timeline-text h3 { font-size: 1.75rem; margin: 0 0 0.5rem; }
                    .timeline-text h4 {
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: var(--color-text-secondary, #4a5568);
                        margin: 0 0 1rem;
                    }
                    .timeline-text li { line-height: 1.6; margin-bottom: 0.5rem; }
                    .timeline-image { flex: 1; display: flex; justify-content: center; }
                    .timeline-image img {
                        max-width: 100%;
                        border-radius: 12px;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                    }
                "#}
            </style>
            <div class="timeline-intro">
                <h2>{"How OrgLookup Works"}</h2>
                <p>{"Transform months of listing, cleaning and refacto into minutes"}</p>
            </div>
            { for TIMELINE.iter().enumerate().map(|(i, entry)| render_step(i, entry, mobile)) }
        </section>
    }
}

fn render_step(index: usize, entry: &TimelineEntry, mobile: bool) -> Html {
    // Alternate sides on wide screens.
    let reversed = !mobile && index % 2 == 1;

    html! {
        <div class={classes!("timeline-step", reversed.then(|| "reversed"))}>
            <div class="timeline-text">
                <span class="step-badge">{ (index + 1).to_string() }</span>
                <h3>{ entry.title }</h3>
                <h4>{ entry.subtitle }</h4>
                <ul>
                    { for entry.bullets.iter().map(bullet_item) }
                </ul>
            </div>
            <div class="timeline-image">
                <img src={entry.image_src} alt={format!("Step {}", index + 1)} />
            </div>
        </div>
    }
}
