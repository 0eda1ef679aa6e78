//! Browser frame loop for the Discover slide
//!
//! Wires [`AnimationLoop`] to `requestAnimationFrame`. Each slide instance owns
//! its own loop, start reference and JS closure; all of them are released when
//! the owning reactive scope is cleaned up.

use leptos::prelude::*;

use crate::core::{LoopStatus, SequencerState};

#[cfg(not(feature = "ssr"))]
use crate::core::{AnimationLoop, FrameScheduler};
#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::{JsCast, closure::Closure};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use std::cell::RefCell;
#[cfg(not(feature = "ssr"))]
use std::rc::Rc;

#[cfg(not(feature = "ssr"))]
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame`-backed scheduler
#[cfg(not(feature = "ssr"))]
pub struct RafScheduler {
    callback: FrameCallback,
}

#[cfg(not(feature = "ssr"))]
impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = self.callback.try_borrow().ok()?;
        let closure = callback.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Owns one running loop; dropping it stops the loop and frees the closure
#[cfg(not(feature = "ssr"))]
struct FrameLoopGuard {
    anim: Rc<RefCell<AnimationLoop<RafScheduler>>>,
    callback: FrameCallback,
}

#[cfg(not(feature = "ssr"))]
impl Drop for FrameLoopGuard {
    fn drop(&mut self) {
        if let Ok(mut anim) = self.anim.try_borrow_mut() {
            anim.stop();
        }
        // breaks the closure -> loop -> scheduler -> closure cycle
        if let Ok(mut callback) = self.callback.try_borrow_mut() {
            callback.take();
        }
    }
}

/// Run the Discover sequence for the calling component
///
/// Returns the latest snapshot and the loop status. The loop starts once the
/// component is mounted in the browser; with reduced motion it never starts
/// and the status becomes [`LoopStatus::Static`].
pub fn use_discover_sequence() -> (ReadSignal<SequencerState>, ReadSignal<LoopStatus>) {
    let (state, set_state) = signal(SequencerState::idle());
    let (status, set_status) = signal(LoopStatus::Idle);

    // Suppress unused warnings for SSR builds
    #[cfg(feature = "ssr")]
    let _ = (&set_state, &set_status);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::reduced_motion::detect_motion_preference;
        use leptos::logging::warn;

        Effect::new(move |_| {
            let callback: FrameCallback = Rc::new(RefCell::new(None));
            let anim = Rc::new(RefCell::new(AnimationLoop::new(RafScheduler {
                callback: callback.clone(),
            })));

            let anim_frame = anim.clone();
            *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                let (next, current) = {
                    let mut anim = anim_frame.borrow_mut();
                    (anim.on_frame(timestamp), anim.status())
                };
                if let Some(next) = next {
                    set_state.set(next);
                }
                if current == LoopStatus::Degraded {
                    warn!("requestAnimationFrame unavailable, showing static Discover slide");
                    set_status.set(current);
                }
            }));

            let mounted = anim.borrow_mut().mount(detect_motion_preference());
            if mounted == LoopStatus::Degraded {
                warn!("requestAnimationFrame unavailable, showing static Discover slide");
            }
            set_status.set(mounted);

            let guard = StoredValue::new_local(FrameLoopGuard { anim, callback });
            on_cleanup(move || guard.dispose());
        });
    }

    (state, status)
}
