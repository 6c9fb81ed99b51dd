use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::error::{SiteError, SiteResult};

/// A `window` event listener that is removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> SiteResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        log::debug!("listening for window `{}`", event);
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove `{}` listener: {:?}", self.event, err);
        } else {
            log::debug!("stopped listening for window `{}`", self.event);
        }
    }
}
