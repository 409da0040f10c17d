use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::carousel::Step;
use crate::components::previews::StepPreview;

/// Highlight state the step previews react to while the walkthrough plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SceneCues {
    pub highlight_legacy_row: bool,
    pub highlight_legacy_node: bool,
    pub show_app_panel: bool,
    pub queue_has_legacy: bool,
    pub queue_highlight_new: bool,
    pub plan_completed: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub step: usize,
    /// Cursor position as a fraction of the window, both axes in `0..=1`.
    pub cursor: (f64, f64),
    pub click: bool,
    pub cues: SceneCues,
    pub duration_ms: u32,
}

const fn scene(step: usize, cursor: (f64, f64), click: bool, cues: SceneCues, duration_ms: u32) -> Scene {
    Scene { step, cursor, click, cues, duration_ms }
}

const IDLE: SceneCues = SceneCues {
    highlight_legacy_row: false,
    highlight_legacy_node: false,
    show_app_panel: false,
    queue_has_legacy: false,
    queue_highlight_new: false,
    plan_completed: 0,
};
const LEGACY_ROW: SceneCues = SceneCues { highlight_legacy_row: true, ..IDLE };
const LEGACY_NODE: SceneCues = SceneCues { highlight_legacy_node: true, ..IDLE };
const APP_PANEL: SceneCues = SceneCues { show_app_panel: true, ..IDLE };
const QUEUED: SceneCues = SceneCues { show_app_panel: true, queue_has_legacy: true, ..IDLE };
const QUEUE_REVIEW: SceneCues = SceneCues { queue_has_legacy: true, queue_highlight_new: true, ..IDLE };
const fn plan(completed: u8) -> SceneCues {
    SceneCues { plan_completed: completed, ..IDLE }
}

pub const SCENES: [Scene; 21] = [
    scene(0, (0.9, 0.18), false, IDLE, 700),
    scene(0, (0.75, 0.6), false, LEGACY_ROW, 900),
    scene(0, (0.75, 0.6), true, LEGACY_ROW, 450),
    scene(1, (0.5, 0.32), false, LEGACY_NODE, 1000),
    scene(1, (0.3, 0.68), false, LEGACY_NODE, 900),
    scene(1, (0.3, 0.68), true, LEGACY_NODE, 450),
    scene(2, (0.22, 0.4), false, IDLE, 700),
    scene(2, (0.22, 0.4), true, APP_PANEL, 950),
    scene(2, (0.5, 0.4), false, APP_PANEL, 850),
    scene(2, (0.5, 0.4), true, APP_PANEL, 450),
    scene(2, (0.85, 0.9), false, APP_PANEL, 800),
    scene(2, (0.85, 0.9), true, QUEUED, 500),
    scene(3, (0.4, 0.45), false, QUEUE_REVIEW, 1000),
    scene(3, (0.85, 0.9), false, QUEUE_REVIEW, 850),
    scene(3, (0.85, 0.9), true, QUEUE_REVIEW, 500),
    scene(4, (0.4, 0.45), false, plan(0), 1000),
    scene(4, (0.82, 0.9), false, plan(0), 800),
    scene(4, (0.82, 0.9), true, plan(0), 450),
    scene(4, (0.82, 0.9), false, plan(1), 650),
    scene(4, (0.82, 0.9), false, plan(2), 650),
    scene(4, (0.82, 0.9), false, plan(3), 650),
];

pub fn next_scene(index: usize) -> usize {
    (index + 1) % SCENES.len()
}

impl Scene {
    pub fn preview_step(&self) -> Step {
        Step::new(self.step).unwrap_or_default()
    }

    fn cursor_style(&self) -> String {
        let press = if self.click { "scale(0.9)" } else { "scale(1)" };
        format!(
            "left: {}%; top: {}%; transform: translate(-20%, -10%) {};",
            self.cursor.0 * 100.0,
            self.cursor.1 * 100.0,
            press
        )
    }
}

/// Self-playing walkthrough: a fake cursor clicks its way through the five steps.
#[function_component(WorkflowWalkthrough)]
pub fn workflow_walkthrough() -> Html {
    let scene_index = use_state(|| 0usize);

    {
        let scene_setter = scene_index.setter();
        use_effect_with_deps(move |index| {
            let next = next_scene(*index);
            let timeout = Timeout::new(SCENES[*index].duration_ms, move || {
                scene_setter.set(next);
            });
            move || drop(timeout)
        }, *scene_index);
    }

    let scene = SCENES[*scene_index];

    html! {
        <div class="walkthrough-window">
            <style>
                {r#"
                    .walkthrough-window {
                        position: relative;
                        width: 100%;
                        max-width: 800px;
                        height: 400px;
                        border: 1px solid #333;
                        border-radius: 16px;
                        background: rgba(15, 15, 20, 0.9);
                        overflow: hidden;
                        box-sizing: border-box;
                    }
                    .walkthrough-cursor {
                        position: absolute;
                        width: 0;
                        height: 0;
                        border-left: 8px solid transparent;
                        border-right: 2px solid transparent;
                        border-bottom: 14px solid #ffffff;
                        filter: drop-shadow(0 0 4px rgba(0, 0, 0, 0.6));
                        transition: left 0.6s ease, top 0.6s ease, transform 0.15s ease;
                        pointer-events: none;
                        z-index: 10;
                    }
                "#}
            </style>
            <StepPreview step={scene.preview_step()} cues={scene.cues} />
            <div class="walkthrough-cursor" style={scene.cursor_style()}></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::STEP_COUNT;

    #[test]
    fn scenes_visit_steps_in_order() {
        let mut last = 0;
        for scene in SCENES.iter() {
            assert!(scene.step < STEP_COUNT);
            assert!(scene.step == last || scene.step == last + 1);
            last = scene.step;
        }
        assert_eq!(SCENES[0].step, 0);
        assert_eq!(last, STEP_COUNT - 1);
    }

    #[test]
    fn cursor_stays_inside_window() {
        for scene in SCENES.iter() {
            assert!((0.0..=1.0).contains(&scene.cursor.0));
            assert!((0.0..=1.0).contains(&scene.cursor.1));
            assert!(scene.duration_ms > 0);
        }
    }

    #[test]
    fn timeline_loops_back_to_first_scene() {
        assert_eq!(next_scene(SCENES.len() - 1), 0);
        assert_eq!(next_scene(0), 1);
    }

    #[test]
    fn legacy_item_is_queued_before_queue_review() {
        let queued = SCENES.iter().position(|s| s.cues.queue_has_legacy).unwrap();
        let review = SCENES.iter().position(|s| s.step == 3).unwrap();
        assert!(queued < review);
    }

    #[test]
    fn plan_progress_never_goes_backwards() {
        let counts: Vec<u8> = SCENES.iter().filter(|s| s.step == 4).map(|s| s.cues.plan_completed).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    }
}
