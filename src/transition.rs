// Page transition choreographer.
//
// Route changes are remove-old-node / insert-new-node, keyed by route
// identity: the outlet keeps its own "displayed" page, runs the exit
// keyframes on it, swaps, then runs the enter keyframes on the new page.
// A navigation that lands mid-transition supersedes it - last one wins,
// stale timers check a generation counter and bail.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{AboutPage, ContactPage, HomePage, ProjectsPage};
use crate::routes::{Page, Resolution, resolve};

/// One end of a transition: where the element sits and how visible it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f64,
    /// Vertical offset in px, positive is down.
    pub y: f64,
}

/// Declarative description of the enter/exit pair. Purely cosmetic
/// defaults - the exit-then-enter ordering is the actual contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub initial: Keyframe,
    pub enter: Keyframe,
    pub exit: Keyframe,
    pub duration_ms: u64,
    /// CSS easing function.
    pub easing: &'static str,
}

/// Anticipation-style curve, close to framer-motion's "anticipate".
pub const EASE_ANTICIPATE: &str = "cubic-bezier(0.68, -0.55, 0.265, 1.55)";

impl Default for TransitionSpec {
    fn default() -> Self {
        TransitionSpec {
            initial: Keyframe { opacity: 0.0, y: 20.0 },
            enter: Keyframe { opacity: 1.0, y: 0.0 },
            exit: Keyframe { opacity: 0.0, y: -20.0 },
            duration_ms: 500,
            easing: EASE_ANTICIPATE,
        }
    }
}

/// Where the displayed page currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly swapped in, parked at the initial keyframe (no transition).
    Entering,
    /// At rest at the enter keyframe.
    Settled,
    /// Animating out towards the exit keyframe.
    Exiting,
}

fn transition_css(spec: &TransitionSpec) -> String {
    format!(
        "opacity {dur}ms {ease}, transform {dur}ms {ease}",
        dur = spec.duration_ms,
        ease = spec.easing,
    )
}

/// Inline style for a phase. Pure - the outlet feeds it to the DOM,
/// the browser does the tweening.
pub fn style_for(spec: &TransitionSpec, phase: Phase) -> String {
    match phase {
        Phase::Entering => format!(
            "opacity: {}; transform: translateY({}px);",
            spec.initial.opacity, spec.initial.y,
        ),
        Phase::Settled => format!(
            "opacity: {}; transform: translateY({}px); transition: {};",
            spec.enter.opacity,
            spec.enter.y,
            transition_css(spec),
        ),
        Phase::Exiting => format!(
            "opacity: {}; transform: translateY({}px); transition: {};",
            spec.exit.opacity,
            spec.exit.y,
            transition_css(spec),
        ),
    }
}

/// Mounts the page matching the URL and choreographs the handoff when it
/// changes. Also owns path canonicalization: any unknown path is rewritten
/// to `/` (replace, so Back does not loop).
#[component]
pub fn TransitionOutlet() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let spec = TransitionSpec::default();

    let initial = match resolve(&location.pathname.get_untracked()) {
        Resolution::Current(page) => page,
        Resolution::RedirectHome => Page::Home,
    };

    let (displayed, set_displayed) = signal(initial);
    let (phase, set_phase) = signal(Phase::Settled);
    let generation = StoredValue::new(0u64);

    Effect::new(move || {
        let target = match resolve(&location.pathname.get()) {
            Resolution::Current(page) => page,
            Resolution::RedirectHome => {
                navigate(
                    Page::Home.path(),
                    NavigateOptions { replace: true, ..Default::default() },
                );
                Page::Home
            }
        };
        if target == displayed.get_untracked() && phase.get_untracked() == Phase::Settled {
            return;
        }

        let generation_at_start = generation.with_value(|g| g + 1);
        generation.set_value(generation_at_start);
        set_phase.set(Phase::Exiting);

        let swap = move || {
            if generation.get_value() != generation_at_start {
                return;
            }
            set_displayed.set(target);
            set_phase.set(Phase::Entering);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            // One frame at the initial keyframe, then let CSS tween to rest.
            let settle = move || {
                if generation.get_value() == generation_at_start {
                    set_phase.set(Phase::Settled);
                }
            };
            if set_timeout_with_handle(settle, Duration::from_millis(30)).is_err() {
                settle();
            }
        };

        // No timer facility means no animation: swap instantly, never block.
        if set_timeout_with_handle(swap, Duration::from_millis(spec.duration_ms)).is_err() {
            swap();
        }
    });

    view! {
        <div class="page-outlet" style=move || style_for(&spec, phase.get())>
            {move || match displayed.get() {
                Page::Home => view! { <HomePage/> }.into_any(),
                Page::About => view! { <AboutPage/> }.into_any(),
                Page::Projects => view! { <ProjectsPage/> }.into_any(),
                Page::Contact => view! { <ContactPage/> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_matches_the_shipped_choreography() {
        let spec = TransitionSpec::default();
        assert_eq!(spec.initial, Keyframe { opacity: 0.0, y: 20.0 });
        assert_eq!(spec.enter, Keyframe { opacity: 1.0, y: 0.0 });
        assert_eq!(spec.exit, Keyframe { opacity: 0.0, y: -20.0 });
        assert_eq!(spec.duration_ms, 500);
    }

    #[test]
    fn entering_parks_at_initial_without_tweening() {
        let style = style_for(&TransitionSpec::default(), Phase::Entering);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(20px)"));
        assert!(!style.contains("transition:"));
    }

    #[test]
    fn settled_rests_at_enter_with_tweening() {
        let style = style_for(&TransitionSpec::default(), Phase::Settled);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0px)"));
        assert!(style.contains("transition:"));
        assert!(style.contains(EASE_ANTICIPATE));
    }

    #[test]
    fn exiting_heads_for_the_exit_keyframe() {
        let style = style_for(&TransitionSpec::default(), Phase::Exiting);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(-20px)"));
        assert!(style.contains("500ms"));
    }
}
