use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::error::{SiteError, SiteResult};

fn window() -> SiteResult<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn scroll_y() -> SiteResult<f64> {
    Ok(window()?.scroll_y()?)
}

pub fn scroll_to_top() -> SiteResult<()> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Current scroll offset, full document height and viewport height.
pub fn scroll_metrics() -> SiteResult<(f64, f64, f64)> {
    let window = window()?;
    let offset = window.scroll_y()?;
    let viewport = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| SiteError::Dom("innerHeight is not a number".to_string()))?;
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .ok_or_else(|| SiteError::Dom("document element missing".to_string()))?;
    Ok((offset, document_height, viewport))
}
