use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::{CURSOR_SPRING, CURSOR_START};
use crate::error::SiteResult;
use crate::motion::frame::FrameLoop;
use crate::motion::listener::WindowListener;
use crate::motion::media::MotionPolicy;
use crate::motion::spring::PointSpring;

// Field order is drop order: stop taking pointer input before the frame loop goes.
struct PointerTracking {
    _listener: WindowListener,
    _frames: Rc<FrameLoop>,
}

fn track_pointer(ring: NodeRef) -> SiteResult<PointerTracking> {
    let spring = Rc::new(RefCell::new(PointSpring::new(CURSOR_SPRING, CURSOR_START)));

    let frames = {
        let spring = spring.clone();
        Rc::new(FrameLoop::new(move |dt| {
            let mut spring = spring.borrow_mut();
            let (x, y) = spring.step(dt);
            if let Some(element) = ring.cast::<Element>() {
                let style = format!(
                    "transform: translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%);",
                    x, y
                );
                if let Err(err) = element.set_attribute("style", &style) {
                    log::warn!("failed to move cursor ring: {:?}", err);
                }
            }
            !spring.is_at_rest()
        })?)
    };

    let listener = {
        let frames = frames.clone();
        WindowListener::new("mousemove", move |event| {
            if let Some(pointer) = event.dyn_ref::<MouseEvent>() {
                spring
                    .borrow_mut()
                    .set_target(f64::from(pointer.client_x()), f64::from(pointer.client_y()));
                frames.wake();
            }
        })?
    };

    Ok(PointerTracking {
        _listener: listener,
        _frames: frames,
    })
}

/// Runs `start` only when the policy allows a cursor follower, so touch
/// devices and reduced-motion visitors never get a listener.
fn start_if_enabled<T>(policy: MotionPolicy, start: impl FnOnce() -> SiteResult<T>) -> Option<T> {
    if !policy.cursor_enabled() {
        log::debug!("cursor follower disabled for this device");
        return None;
    }
    start()
        .map_err(|err| log::warn!("cursor follower unavailable: {}", err))
        .ok()
}

/// Ring that trails the mouse pointer. Renders nothing, and listens to
/// nothing, on touch devices or when reduced motion is requested.
#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let policy = use_state(MotionPolicy::detect);
    let ring = use_node_ref();
    let enabled = policy.cursor_enabled();

    {
        let ring = ring.clone();
        use_effect_with_deps(
            move |policy| {
                let tracking = start_if_enabled(*policy, || track_pointer(ring));
                move || drop(tracking)
            },
            *policy,
        );
    }

    if !enabled {
        return html! {};
    }

    html! {
        <div ref={ring} class="cursor-ring" aria-hidden="true">
            <div class="cursor-dot"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    fn policy(reduced_motion: bool, fine_pointer: bool) -> MotionPolicy {
        MotionPolicy {
            reduced_motion,
            fine_pointer,
        }
    }

    #[test]
    fn reduced_motion_never_starts_tracking() {
        let mut started = false;
        let tracking = start_if_enabled(policy(true, true), || {
            started = true;
            Ok(())
        });
        assert_eq!(tracking, None);
        assert!(!started);
    }

    #[test]
    fn touch_devices_never_start_tracking() {
        let mut started = false;
        let tracking = start_if_enabled(policy(false, false), || {
            started = true;
            Ok(())
        });
        assert_eq!(tracking, None);
        assert!(!started);
    }

    #[test]
    fn desktop_starts_tracking() {
        assert_eq!(start_if_enabled(policy(false, true), || Ok(7)), Some(7));
    }

    #[test]
    fn failed_start_degrades_to_nothing() {
        let tracking: Option<()> = start_if_enabled(policy(false, true), || Err(SiteError::NoWindow));
        assert_eq!(tracking, None);
    }
}
