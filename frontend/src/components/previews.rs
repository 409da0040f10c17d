use yew::prelude::*;

use crate::carousel::Step;
use crate::walkthrough::SceneCues;

/// The fixed illustration shown for each workflow step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preview {
    ObsoleteDetection,
    ImpactAnalysis,
    ExternalCodeScan,
    DeletionQueue,
    SafeExecution,
}

impl Preview {
    pub fn for_step(step: Step) -> Self {
        match step.index() {
            0 => Preview::ObsoleteDetection,
            1 => Preview::ImpactAnalysis,
            2 => Preview::ExternalCodeScan,
            3 => Preview::DeletionQueue,
            _ => Preview::SafeExecution,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Preview::ObsoleteDetection => "Obsolete Metadata",
            Preview::ImpactAnalysis => "Impact Analysis",
            Preview::ExternalCodeScan => "External Code Scan",
            Preview::DeletionQueue => "Deletion Queue",
            Preview::SafeExecution => "Safe Deletion Plan",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StepPreviewProps {
    pub step: Step,
    #[prop_or_default]
    pub cues: SceneCues,
}

#[function_component(StepPreview)]
pub fn step_preview(props: &StepPreviewProps) -> Html {
    let preview = Preview::for_step(props.step);
    let cues = props.cues;

    let body = match preview {
        Preview::ObsoleteDetection => html! { <ObsoleteDetection cues={cues} /> },
        Preview::ImpactAnalysis => html! { <ImpactAnalysis cues={cues} /> },
        Preview::ExternalCodeScan => html! { <ExternalCodeScan cues={cues} /> },
        Preview::DeletionQueue => html! { <DeletionQueue cues={cues} /> },
        Preview::SafeExecution => html! { <SafeExecution cues={cues} /> },
    };

    html! {
        <div class="preview" data-preview={preview.title()}>
            <style>
                {r#"
                    .preview {
                        background: white;
                        width: 100%;
                        height: 380px;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .preview-header {
                        background: var(--color-primary, #2563eb);
                        color: white;
                        font-weight: bold;
                        padding: 0.75rem 1.25rem;
                    }
                    .preview-body {
                        flex: 1;
                        padding: 1rem;
                        overflow: hidden;
                    }
                    .preview-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.75rem 1.25rem;
                        background: #f9fafb;
                        border-top: 1px solid #f3f4f6;
                        font-size: 0.75rem;
                        color: #6b7280;
                    }
                    .preview-action {
                        padding: 0.35rem 0.75rem;
                        border-radius: 6px;
                        background: var(--color-primary, #2563eb);
                        color: white;
                        font-weight: 500;
                    }
                    .preview-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 0.75rem;
                        border-bottom: 1px solid #f3f4f6;
                        animation: rowIn 0.4s ease-out both;
                    }
                    .preview-row.highlight {
                        background: rgba(2, 136, 209, 0.1);
                        box-shadow: inset 0 0 0 1px rgba(129, 212, 250, 0.9);
                    }
                    .preview-row .name { font-size: 0.875rem; font-weight: 500; color: #1f2937; }
                    .preview-row .kind { font-size: 0.75rem; color: #6b7280; }
                    .score-bar { width: 60px; height: 6px; background: #f3f4f6; border-radius: 9999px; overflow: hidden; }
                    .score-bar > div { height: 100%; border-radius: 9999px; }
                    @keyframes rowIn {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>
            <div class="preview-header">{ preview.title() }</div>
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CueProps {
    cues: SceneCues,
}

const SCORED_ITEMS: [(&str, &str, u8); 5] = [
    ("AccountCleanupBatch", "Apex", 92),
    ("Old_Lead_Flow", "Flow", 87),
    ("ContactTrigger", "Trigger", 65),
    ("Status_Field__c", "Field", 45),
    ("Account_Helper", "Apex", 23),
];

fn score_color(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "#ef4444",
        60..=79 => "#f97316",
        40..=59 => "#eab308",
        _ => "#22c55e",
    }
}

#[function_component(ObsoleteDetection)]
fn obsolete_detection(props: &CueProps) -> Html {
    html! {
        <>
            <div class="preview-body">
                { for SCORED_ITEMS.iter().enumerate().map(|(i, (name, kind, score))| {
                    let highlight = props.cues.highlight_legacy_row && i == 0;
                    html! {
                        <div class={classes!("preview-row", highlight.then(|| "highlight"))}
                             style={format!("animation-delay: {}ms;", i * 100)}>
                            <span>{ if i < 3 { "☑" } else { "☐" } }</span>
                            <div style="flex: 1;">
                                <div class="name">{ *name }</div>
                                <div class="kind">{ *kind }</div>
                            </div>
                            <div class="score-bar">
                                <div style={format!("width: {}%; background: {};", score, score_color(*score))}></div>
                            </div>
                            <span style={format!("font-size: 0.75rem; font-weight: bold; width: 28px; color: {};", score_color(*score))}>
                                { format!("{}%", score) }
                            </span>
                        </div>
                    }
                }) }
            </div>
            <div class="preview-footer">
                <span>{"3 selected"}</span>
                <span class="preview-action">{"Add to Queue →"}</span>
            </div>
        </>
    }
}

const GRAPH_NODES: [(&str, u8, u8, &str, u8); 4] = [
    ("Account", 50, 20, "#ef4444", 50),
    ("Trigger", 25, 50, "#f97316", 40),
    ("Flow", 75, 50, "#22c55e", 40),
    ("Helper", 50, 80, "#eab308", 35),
];

#[function_component(ImpactAnalysis)]
fn impact_analysis(props: &CueProps) -> Html {
    html! {
        <div class="preview-body" style="position: relative;">
            <svg width="100%" height="100%" viewBox="0 0 100 100" preserveAspectRatio="none"
                 style="position: absolute; inset: 0;">
                { for GRAPH_NODES.iter().skip(1).map(|(_, x, y, _, _)| html! {
                    <line x1="50" y1="20" x2={x.to_string()} y2={y.to_string()}
                          stroke="#d1d5db" stroke-width="0.5" stroke-dasharray="2 1" />
                }) }
            </svg>
            { for GRAPH_NODES.iter().enumerate().map(|(i, (label, x, y, color, size))| {
                let highlight = props.cues.highlight_legacy_node && i == 0;
                let shadow = if highlight { "0 0 0 3px rgba(129,212,250,0.6), 0 0 14px rgba(129,212,250,0.9)" } else { "0 4px 10px rgba(0,0,0,0.1)" };
                html! {
                    <div style={format!(
                        "position: absolute; left: {x}%; top: {y}%; transform: translate(-50%, -50%); \
                         width: {size}px; height: {size}px; border-radius: 50%; background: {color}; \
                         box-shadow: {shadow}; display: flex; align-items: center; justify-content: center; \
                         color: white; font-size: 10px; font-weight: bold;"
                    )}>
                        { *label }
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(ExternalCodeScan)]
fn external_code_scan(props: &CueProps) -> Html {
    let repo = |name: &'static str, icon: &'static str| html! {
        <div style="display: flex; flex-direction: column; align-items: center; padding: 0.75rem; border: 1px solid #e5e7eb; border-radius: 10px;">
            <span style="font-size: 1.5rem;">{ icon }</span>
            <span style="font-size: 0.75rem; margin-top: 0.25rem; font-weight: 500;">{ name }</span>
        </div>
    };

    html! {
        <>
            <div class="preview-body" style="display: flex; align-items: center; justify-content: space-around; gap: 1rem;">
                <div style="display: flex; flex-direction: column; gap: 0.75rem;">
                    { repo("GitHub", "🐙") }
                    { repo("GitLab", "🦊") }
                </div>
                <div style="font-size: 1.5rem; color: #9ca3af;">{"⇄"}</div>
                <div style="display: flex; flex-direction: column; align-items: center; padding: 1rem; border: 2px solid #3b82f6; border-radius: 12px;">
                    <span style="font-size: 1.75rem;">{"☁️"}</span>
                    <span style="font-size: 0.75rem; margin-top: 0.25rem; font-weight: 500; color: #2563eb;">{"Salesforce"}</span>
                </div>
                if props.cues.show_app_panel {
                    <div style="padding: 0.75rem; border-radius: 10px; background: #eff6ff; font-size: 0.75rem; max-width: 160px;">
                        <div style="font-weight: bold;">{"Web form app"}</div>
                        <div>{"References Lead.Legacy_Score__c in 3 files"}</div>
                    </div>
                }
            </div>
            <div class="preview-footer">
                <span>{"2 external references"}</span>
                <span class="preview-action">{"Add to deletion queue"}</span>
            </div>
        </>
    }
}

const QUEUE_ITEMS: [(&str, &str, bool); 4] = [
    ("AccountCleanupBatch", "Apex Class", true),
    ("Old_Lead_Flow", "Flow", true),
    ("ContactTrigger", "Trigger", false),
    ("Status_Field__c", "Field", true),
];

#[function_component(DeletionQueue)]
fn deletion_queue(props: &CueProps) -> Html {
    let cues = props.cues;
    let count = QUEUE_ITEMS.len() + usize::from(cues.queue_has_legacy);

    html! {
        <>
            <div class="preview-body">
                <div style="display: flex; gap: 0.5rem; margin-bottom: 0.75rem; font-size: 0.75rem;">
                    { for [("📊", "Step 1", 12), ("🔗", "Step 2", 5), ("🌐", "Step 3", 2)].iter().map(|(icon, label, n)| html! {
                        <span style="padding: 0.25rem 0.5rem; border-radius: 9999px; background: #f3f4f6;">
                            { format!("{} {}: {}", icon, label, n) }
                        </span>
                    }) }
                </div>
                if cues.queue_has_legacy {
                    <div class={classes!("preview-row", cues.queue_highlight_new.then(|| "highlight"))}>
                        <span>{"☑"}</span>
                        <div style="flex: 1;">
                            <div class="name">{"Legacy_Score__c"}</div>
                            <div class="kind">{"Field · added from external scan"}</div>
                        </div>
                        <span style="color: #16a34a; font-size: 0.75rem;">{"Safe"}</span>
                    </div>
                }
                { for QUEUE_ITEMS.iter().map(|(name, kind, safe)| html! {
                    <div class="preview-row">
                        <span>{ if *safe { "☑" } else { "☐" } }</span>
                        <div style="flex: 1;">
                            <div class="name">{ *name }</div>
                            <div class="kind">{ *kind }</div>
                        </div>
                        if *safe {
                            <span style="color: #16a34a; font-size: 0.75rem;">{"Safe"}</span>
                        } else {
                            <span style="color: #f97316; font-size: 0.75rem;">{"⚠ Review"}</span>
                        }
                    </div>
                }) }
            </div>
            <div class="preview-footer">
                <span>{ format!("{} items queued", count) }</span>
                <span class="preview-action">{"Generate deletion plan"}</span>
            </div>
        </>
    }
}

const PLAN_ACTIONS: [(&str, &str); 4] = [
    ("🗑️", "Delete AccountCleanupBatch"),
    ("🔧", "Refactor LeadService refs"),
    ("💾", "Backup Opportunity_Flow"),
    ("📧", "Notify stakeholders"),
];

#[function_component(SafeExecution)]
fn safe_execution(props: &CueProps) -> Html {
    let completed = props.cues.plan_completed as usize;

    html! {
        <>
            <div class="preview-body">
                { for PLAN_ACTIONS.iter().enumerate().map(|(i, (icon, label))| {
                    let (status, color) = if i < completed { ("completed", "#16a34a") } else { ("pending", "#6b7280") };
                    html! {
                        <div class="preview-row">
                            <span>{ *icon }</span>
                            <div class="name" style="flex: 1;">{ *label }</div>
                            <span style={format!("font-size: 0.75rem; color: {};", color)}>{ status }</span>
                        </div>
                    }
                }) }
            </div>
            <div class="preview-footer">
                <span>{ format!("{}/{} actions done", completed.min(PLAN_ACTIONS.len()), PLAN_ACTIONS.len()) }</span>
                <span class="preview-action">{"Accept"}</span>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_step_has_its_own_preview() {
        let previews: HashSet<_> = Step::ALL.iter().map(|&s| format!("{:?}", Preview::for_step(s))).collect();
        assert_eq!(previews.len(), Step::ALL.len());
    }

    #[test]
    fn previews_follow_workflow_order() {
        let order: Vec<Preview> = Step::ALL.iter().map(|&s| Preview::for_step(s)).collect();
        assert_eq!(
            order,
            vec![
                Preview::ObsoleteDetection,
                Preview::ImpactAnalysis,
                Preview::ExternalCodeScan,
                Preview::DeletionQueue,
                Preview::SafeExecution,
            ]
        );
    }

    #[test]
    fn score_colors_band_by_risk() {
        assert_eq!(score_color(92), "#ef4444");
        assert_eq!(score_color(65), "#f97316");
        assert_eq!(score_color(45), "#eab308");
        assert_eq!(score_color(23), "#22c55e");
    }
}
