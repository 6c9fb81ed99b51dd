use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteResult;

/// Fires at most once; later triggers are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns true only for the first call.
    pub fn trigger(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

/// Calls `on_visible` the first time `element` scrolls into view, then stops
/// observing. Dropping the latch disconnects the observer.
pub struct VisibilityLatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityLatch {
    pub fn observe<F>(element: &Element, root_margin: &str, mut on_visible: F) -> SiteResult<Self>
    where
        F: FnMut() + 'static,
    {
        let mut latch = OneShot::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if intersecting && latch.trigger() {
                observer.disconnect();
                on_visible();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityLatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once() {
        let mut latch = OneShot::default();
        assert_eq!(latch, OneShot { fired: false });
        assert!(latch.trigger());
        assert_eq!(latch, OneShot { fired: true });
        assert!(!latch.trigger());
        assert!(!latch.trigger());
    }
}
