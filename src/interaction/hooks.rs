use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom::{self, WindowListener};
use crate::error::DomError;
use crate::interaction::pointer::PointerPosition;
use crate::motion::parallax::scroll_progress;
use crate::signal::Signal;

/// Publishes the scroll progress of `container` into `progress` on every
/// scroll and resize. While the container is not mounted nothing is
/// published and the last value stands.
#[hook]
pub fn use_scroll_progress(container: NodeRef, progress: Signal<f64>) {
    use_effect_with_deps(
        move |(container, progress)| {
            let container = container.clone();
            let progress = progress.clone();
            let recompute = move || {
                let measured = container.cast::<Element>().map(|element| {
                    dom::window().and_then(|window| {
                        let bounds = dom::element_bounds(&window, &element)?;
                        Ok(scroll_progress(window.scroll_y()?, bounds))
                    })
                });
                publish_progress(&progress, measured);
            };
            recompute();

            let listener = match WindowListener::new(&["scroll", "resize"], recompute) {
                Ok(listener) => Some(listener),
                Err(err) => {
                    warn!("not tracking scroll: {}", err);
                    None
                }
            };
            move || drop(listener)
        },
        (container, progress),
    );
}

/// Applies one scroll measurement to `progress`. `None` means the container
/// is not mounted, so the last published value stands.
pub fn publish_progress(progress: &Signal<f64>, measured: Option<Result<f64, DomError>>) {
    match measured {
        Some(Ok(value)) => progress.set(value),
        Some(Err(err)) => warn!("scroll progress unavailable: {}", err),
        None => {}
    }
}

/// Records every window `mousemove` into `pointer` for as long as the calling
/// component is mounted.
#[hook]
pub fn use_pointer_tracking(pointer: Signal<PointerPosition>) {
    use_event_with_window("mousemove", move |event: MouseEvent| {
        pointer.set(PointerPosition::new(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
        ));
    });
}

/// Whether an element spanning `top..bottom` (viewport coordinates) is inside
/// a viewport of `viewport_height` grown by `margin` on every side. Negative
/// margins shrink it.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height + margin && bottom > -margin
}

/// Becomes `true` the first time the referenced element enters the viewport
/// (shrunk or grown by `margin` px) and stays `true` afterwards.
#[hook]
pub fn use_in_view(node: NodeRef, margin: f64) -> bool {
    let in_view = use_state_eq(|| false);
    {
        let handle = in_view.clone();
        use_effect_with_deps(
            move |(node, seen, margin)| {
                let mut guards = None;
                if !*seen {
                    let margin = *margin;
                    let check: Rc<dyn Fn()> = {
                        let node = node.clone();
                        let handle = handle.clone();
                        Rc::new(move || {
                            let Some(element) = node.cast::<Element>() else {
                                return;
                            };
                            match dom::window().and_then(|window| dom::viewport_height(&window)) {
                                Ok(viewport_height) => {
                                    let rect = element.get_bounding_client_rect();
                                    if intersects_viewport(rect.top(), rect.bottom(), viewport_height, margin) {
                                        handle.set(true);
                                    }
                                }
                                Err(err) => {
                                    warn!("visibility unknown, revealing: {}", err);
                                    handle.set(true);
                                }
                            }
                        })
                    };

                    // Checked after the first paint so the hidden pose is on
                    // screen before transitioning away from it.
                    let first_check = {
                        let check = check.clone();
                        Timeout::new(config::FIRST_REVEAL_CHECK_MS, move || check())
                    };
                    match WindowListener::new(&["scroll", "resize"], move || check()) {
                        Ok(listener) => guards = Some((listener, first_check)),
                        Err(err) => {
                            debug!("no scroll events, revealing immediately: {}", err);
                            handle.set(true);
                        }
                    }
                }
                move || drop(guards)
            },
            (node, *in_view, margin),
        );
    }
    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counted(progress: &Signal<f64>) -> (Rc<Cell<u32>>, crate::signal::Subscription) {
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = calls.clone();
            progress.subscribe(move |_| calls.set(calls.get() + 1))
        };
        (calls, subscription)
    }

    #[test]
    fn unmounted_container_keeps_last_progress() {
        let progress = Signal::new(0.4);
        let (calls, _sub) = counted(&progress);

        publish_progress(&progress, None);

        assert_eq!(progress.get(), 0.4);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn unmounted_before_first_measurement_stays_at_zero() {
        let progress = Signal::<f64>::default();
        publish_progress(&progress, None);
        assert_eq!(progress.get(), 0.0);
    }

    #[test]
    fn measured_progress_is_published() {
        let progress = Signal::new(0.0);
        let (calls, _sub) = counted(&progress);

        publish_progress(&progress, Some(Ok(0.75)));

        assert_eq!(progress.get(), 0.75);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failed_measurement_keeps_last_progress() {
        let progress = Signal::new(0.3);
        let (calls, _sub) = counted(&progress);

        publish_progress(&progress, Some(Err(DomError::NoWindow)));

        assert_eq!(progress.get(), 0.3);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn element_inside_viewport_intersects() {
        assert!(intersects_viewport(100.0, 400.0, 800.0, 0.0));
    }

    #[test]
    fn element_below_fold_does_not() {
        assert!(!intersects_viewport(900.0, 1300.0, 800.0, 0.0));
        assert!(!intersects_viewport(-600.0, -10.0, 800.0, 0.0));
    }

    #[test]
    fn negative_margin_requires_deeper_entry() {
        // Top edge 150px above the fold: visible with no margin, not yet with -200px.
        assert!(intersects_viewport(650.0, 1200.0, 800.0, 0.0));
        assert!(!intersects_viewport(650.0, 1200.0, 800.0, -200.0));
        assert!(intersects_viewport(550.0, 1200.0, 800.0, -200.0));
    }

    #[test]
    fn positive_margin_reveals_early() {
        assert!(intersects_viewport(850.0, 1200.0, 800.0, 100.0));
    }
}
