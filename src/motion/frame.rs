use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{SiteError, SiteResult};

/// Turns `requestAnimationFrame` timestamps into frame durations.
/// Forgets the previous timestamp whenever the loop goes idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub const FIRST_FRAME_SECS: f64 = 1.0 / 60.0;

    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => (now_ms - last) / 1000.0,
            Some(_) => 0.0,
            None => Self::FIRST_FRAME_SECS,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

struct FrameInner {
    window: Window,
    pending: Cell<Option<i32>>,
    clock: Cell<FrameClock>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameInner {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {:?}", err),
        }
    }
}

/// Runs a step function once per animation frame while it reports more work,
/// then idles until `wake` is called. Cancels any pending frame when dropped.
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

impl FrameLoop {
    /// `step` receives the frame duration in seconds and returns whether
    /// another frame is needed.
    pub fn new<F>(mut step: F) -> SiteResult<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let inner = Rc::new(FrameInner {
            window,
            pending: Cell::new(None),
            clock: Cell::new(FrameClock::default()),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |now_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            let mut clock = inner.clock.get();
            let dt = clock.tick(now_ms);
            if step(dt) {
                inner.clock.set(clock);
                inner.request();
            } else {
                clock.reset();
                inner.clock.set(clock);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);

        Ok(Self { inner })
    }

    pub fn wake(&self) {
        self.inner.request();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.inner.pending.take() {
            if let Err(err) = self.inner.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        self.inner.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_uses_nominal_duration() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(1000.0), FrameClock::FIRST_FRAME_SECS);
        assert_eq!(clock.tick(1020.0), 0.02);
    }

    #[test]
    fn reset_forgets_idle_gap() {
        let mut clock = FrameClock::default();
        clock.tick(0.0);
        clock.reset();
        assert_eq!(clock.tick(60_000.0), FrameClock::FIRST_FRAME_SECS);
    }

    #[test]
    fn non_increasing_timestamps_give_zero() {
        let mut clock = FrameClock::default();
        clock.tick(500.0);
        assert_eq!(clock.tick(500.0), 0.0);
        assert_eq!(clock.tick(400.0), 0.0);
    }
}
