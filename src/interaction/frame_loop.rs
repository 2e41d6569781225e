use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::error::DomError;

/// Runs a tick callback once per display frame via `requestAnimationFrame`
/// until it reports that nothing is moving. [`AnimationLoop::wake`] starts it
/// again; dropping the loop cancels any pending frame.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

struct LoopState {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
    last_timestamp: Cell<Option<f64>>,
}

impl AnimationLoop {
    /// `tick` receives the seconds elapsed since the previous frame (0 on the
    /// first frame after waking) and returns whether to keep running.
    pub fn new(mut tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(LoopState {
            callback: RefCell::new(None),
            pending: Cell::new(None),
            last_timestamp: Cell::new(None),
        });

        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            let dt = state
                .last_timestamp
                .replace(Some(timestamp))
                .map(|last| (timestamp - last) / 1000.0)
                .unwrap_or(0.0);
            if tick(dt) {
                state.request();
            } else {
                state.last_timestamp.set(None);
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(callback);

        Self { state }
    }

    pub fn wake(&self) {
        if self.state.pending.get().is_none() {
            self.state.request();
        }
    }
}

impl LoopState {
    fn request(&self) {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        let scheduled = dom::window().and_then(|window| {
            window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .map_err(DomError::from)
        });
        match scheduled {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => warn!("animation frame unavailable: {}", err),
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.state.pending.take() {
            if let Ok(window) = dom::window() {
                if let Err(err) = window.cancel_animation_frame(handle) {
                    warn!("failed to cancel animation frame: {}", DomError::from(err));
                }
            }
        }
        self.state.callback.borrow_mut().take();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counting_loop(frames_wanted: u32) -> (AnimationLoop, Rc<Cell<u32>>) {
        let ticks = Rc::new(Cell::new(0));
        let animation = {
            let ticks = ticks.clone();
            AnimationLoop::new(move |_dt| {
                ticks.set(ticks.get() + 1);
                ticks.get() < frames_wanted
            })
        };
        (animation, ticks)
    }

    #[wasm_bindgen_test]
    async fn stops_once_tick_reports_rest() {
        let (animation, ticks) = counting_loop(3);
        animation.wake();

        TimeoutFuture::new(500).await;

        assert_eq!(ticks.get(), 3);
        assert!(animation.state.pending.get().is_none());
    }

    #[wasm_bindgen_test]
    async fn dropping_cancels_pending_frame() {
        let (animation, ticks) = counting_loop(u32::MAX);
        animation.wake();
        assert!(animation.state.pending.get().is_some());

        drop(animation);
        TimeoutFuture::new(200).await;

        assert_eq!(ticks.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn wake_while_running_schedules_one_frame() {
        let (animation, ticks) = counting_loop(1);
        animation.wake();
        animation.wake();

        TimeoutFuture::new(200).await;

        assert_eq!(ticks.get(), 1);
    }
}
