use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::previews::StepPreview;
use crate::content::STEP_LABELS;
use crate::walkthrough::SceneCues;

pub const STEP_COUNT: usize = 5;
pub const STEP_INTERVAL_MS: u32 = 4_000;

/// One of the five workflow steps, always in `0..STEP_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Step(usize);

impl Step {
    pub const ALL: [Step; STEP_COUNT] = [Step(0), Step(1), Step(2), Step(3), Step(4)];

    pub fn new(index: usize) -> Option<Self> {
        (index < STEP_COUNT).then_some(Step(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based, for display.
    pub fn number(self) -> usize {
        self.0 + 1
    }

    pub fn next(self) -> Self {
        Step((self.0 + 1) % STEP_COUNT)
    }

    pub fn label(self) -> &'static str {
        STEP_LABELS[self.0]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub step: Step,
}

pub enum CarouselAction {
    Advance,
    Select(Step),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let step = match action {
            CarouselAction::Advance => self.step.next(),
            CarouselAction::Select(step) => step,
        };
        Rc::new(CarouselState { step })
    }
}

/// Intrinsic size of the preview content in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const PREVIEW: Frame = Frame { width: 600.0, height: 380.0 };

    pub fn scaled(self, scale: f64) -> Frame {
        Frame { width: self.width * scale, height: self.height * scale }
    }
}

/// Shrinks content to fit `container_width`, never enlarging it.
/// An unmeasured (zero, negative or NaN) container keeps the content at 1x.
pub fn fit_scale(container_width: f64, intrinsic_width: f64) -> f64 {
    if !(container_width > 0.0) || !(intrinsic_width > 0.0) {
        return 1.0;
    }
    (container_width / intrinsic_width).min(1.0)
}

fn measure_scale(container: &NodeRef) -> f64 {
    container
        .cast::<HtmlElement>()
        .map(|el| fit_scale(el.offset_width() as f64, Frame::PREVIEW.width))
        .unwrap_or(1.0)
}

#[function_component(HeroCarousel)]
pub fn hero_carousel() -> Html {
    let carousel = use_reducer(CarouselState::default);
    let container = use_node_ref();
    let scale = use_state(|| 1.0_f64);

    // Selecting a dot leaves this schedule untouched.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(STEP_INTERVAL_MS, move || {
                dispatcher.dispatch(CarouselAction::Advance);
            });
            move || drop(interval)
        }, ());
    }

    let (observed_width, _) = use_size(container.clone());
    {
        let container = container.clone();
        let scale = scale.clone();
        use_effect_with_deps(move |_| {
            scale.set(measure_scale(&container));
            || ()
        }, observed_width);
    }
    {
        let container = container.clone();
        let scale = scale.clone();
        use_event_with_window("resize", move |_: Event| {
            scale.set(measure_scale(&container));
        });
    }

    let step = carousel.step;
    let frame = Frame::PREVIEW.scaled(*scale);

    html! {
        <div ref={container} class="hero-carousel">
            <style>
                {r#"
                    .hero-carousel {
                        width: 100%;
                        max-width: 630px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .hero-carousel h2 {
                        color: white;
                        text-align: center;
                        font-weight: bold;
                        padding: 0 1rem;
                    }
                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .carousel-dot {
                        width: 8px;
                        height: 8px;
                        border: none;
                        padding: 0;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.4);
                        transition: all 0.3s ease;
                        cursor: pointer;
                    }
                    .carousel-dot.active {
                        width: 24px;
                        background: white;
                    }
                    .carousel-frame {
                        position: relative;
                        overflow: hidden;
                        border-radius: 12px;
                        box-shadow: 0px 20px 40px rgba(0, 0, 0, 0.2);
                        background: white;
                        margin: 0 auto;
                        transition: all 0.2s ease-out;
                    }
                    .carousel-slide {
                        width: 100%;
                        height: 100%;
                        animation: slideInRight 0.4s ease-in-out;
                    }
                    @keyframes slideInRight {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>
            <h2>{ format!("Step {}: {}", step.number(), step.label()) }</h2>
            <div class="carousel-dots">
                { for Step::ALL.iter().map(|&dot| {
                    let onclick = {
                        let dispatcher = carousel.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Select(dot)))
                    };
                    html! {
                        <button
                            key={dot.index()}
                            class={classes!("carousel-dot", (dot == step).then(|| "active"))}
                            aria-label={format!("Show step {}", dot.number())}
                            onclick={onclick}
                        />
                    }
                }) }
            </div>
            <div class="carousel-frame" style={format!("width: {}px; height: {}px;", frame.width, frame.height)}>
                <div style={format!(
                    "transform: scale({}); transform-origin: top left; width: {}px; height: {}px;",
                    *scale, Frame::PREVIEW.width, Frame::PREVIEW.height
                )}>
                    <div key={step.index()} class="carousel-slide">
                        <StepPreview step={step} cues={SceneCues::default()} />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: CarouselState, action: CarouselAction) -> CarouselState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn five_advances_return_to_start() {
        for start in Step::ALL {
            let mut state = CarouselState { step: start };
            for _ in 0..STEP_COUNT {
                state = reduce(state, CarouselAction::Advance);
            }
            assert_eq!(state.step, start);
        }
    }

    #[test]
    fn advance_wraps_after_last_step() {
        let last = Step::new(4).unwrap();
        assert_eq!(last.next(), Step::new(0).unwrap());
        assert_eq!(Step::new(2).unwrap().next().index(), 3);
    }

    #[test]
    fn select_jumps_directly() {
        let state = CarouselState::default();
        for target in Step::ALL {
            assert_eq!(reduce(state, CarouselAction::Select(target)).step, target);
        }
    }

    #[test]
    fn out_of_range_step_is_rejected() {
        assert_eq!(Step::new(5), None);
        assert_eq!(Step::new(usize::MAX), None);
    }

    #[test]
    fn labels_are_numbered_from_one() {
        let first = Step::new(0).unwrap();
        assert_eq!(first.number(), 1);
        assert_eq!(first.label(), "Detect obsolete components of your org");
    }

    #[test]
    fn narrow_container_scales_down_proportionally() {
        assert_eq!(fit_scale(300.0, 600.0), 0.5);
        assert_eq!(fit_scale(450.0, 600.0), 0.75);
        let scale = fit_scale(1.0, 600.0);
        assert!(scale > 0.0 && scale < 1.0);
    }

    #[test]
    fn wide_container_never_scales_up() {
        assert_eq!(fit_scale(600.0, 600.0), 1.0);
        assert_eq!(fit_scale(1200.0, 600.0), 1.0);
    }

    #[test]
    fn unmeasured_container_keeps_full_size() {
        assert_eq!(fit_scale(0.0, 600.0), 1.0);
        assert_eq!(fit_scale(-10.0, 600.0), 1.0);
        assert_eq!(fit_scale(f64::NAN, 600.0), 1.0);
    }

    #[test]
    fn frame_follows_scale() {
        let frame = Frame::PREVIEW.scaled(0.5);
        assert_eq!(frame, Frame { width: 300.0, height: 190.0 });
    }
}
