use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Viewports strictly narrower than this render the mobile tree.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

impl Layout {
    /// `None` means the window could not be measured yet, which counts as wide.
    pub fn from_width(width: Option<f64>) -> Self {
        match width {
            Some(w) if w < MOBILE_BREAKPOINT as f64 => Layout::Mobile,
            _ => Layout::Desktop,
        }
    }

    pub fn from_matches(matches: bool) -> Self {
        if matches { Layout::Mobile } else { Layout::Desktop }
    }

    pub fn is_mobile(self) -> bool {
        self == Layout::Mobile
    }
}

pub fn mobile_media_query() -> String {
    format!("(max-width: {}px)", MOBILE_BREAKPOINT - 1)
}

fn current_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

#[hook]
fn use_media_layout() -> UseStateHandle<Layout> {
    let layout = use_state(|| Layout::from_width(current_width()));

    {
        let layout = layout.clone();
        use_effect_with_deps(move |_| {
            let media = window()
                .and_then(|w| w.match_media(&mobile_media_query()).ok())
                .flatten();

            let cleanup: Box<dyn FnOnce()> = match media {
                Some(media) => {
                    layout.set(Layout::from_matches(media.matches()));

                    let media_clone = media.clone();
                    let change_callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                        layout.set(Layout::from_matches(media_clone.matches()));
                    }) as Box<dyn FnMut(web_sys::Event)>);

                    if media
                        .add_event_listener_with_callback("change", change_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not subscribe to viewport changes");
                    }

                    Box::new(move || {
                        let _ = media.remove_event_listener_with_callback(
                            "change",
                            change_callback.as_ref().unchecked_ref(),
                        );
                    })
                }
                None => Box::new(|| ()),
            };

            cleanup
        }, ());
    }

    layout
}

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    pub children: Children,
}

/// Broadcasts the current [`Layout`] to everything below it.
#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let layout = use_media_layout();

    html! {
        <ContextProvider<Layout> context={*layout}>
            { props.children.clone() }
        </ContextProvider<Layout>>
    }
}

/// Reads the layout broadcast by [`ViewportProvider`], wide if there is none.
#[hook]
pub fn use_layout() -> Layout {
    use_context::<Layout>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_exact_at_threshold() {
        assert_eq!(Layout::from_width(Some(767.0)), Layout::Mobile);
        assert_eq!(Layout::from_width(Some(768.0)), Layout::Desktop);
        assert!(Layout::from_width(Some(320.0)).is_mobile());
        assert!(!Layout::from_width(Some(1920.0)).is_mobile());
    }

    #[test]
    fn unmeasured_viewport_is_wide() {
        assert_eq!(Layout::from_width(None), Layout::Desktop);
        assert_eq!(Layout::default(), Layout::Desktop);
    }

    #[test]
    fn media_query_matches_below_threshold_only() {
        assert_eq!(mobile_media_query(), "(max-width: 767px)");
        assert_eq!(Layout::from_matches(true), Layout::Mobile);
        assert_eq!(Layout::from_matches(false), Layout::Desktop);
    }
}
