use crate::config::{NAV_COMPACT_THRESHOLD_PX, SCROLL_TOP_THRESHOLD_PX};

pub fn nav_is_compact(offset: f64) -> bool {
    offset > NAV_COMPACT_THRESHOLD_PX
}

pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD_PX
}

/// Fraction of the document scrolled past, in [0, 1].
pub fn progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_nav_is_strictly_above_threshold() {
        assert!(!nav_is_compact(0.0));
        assert!(!nav_is_compact(50.0));
        assert!(nav_is_compact(51.0));
        assert!(nav_is_compact(50.5));
    }

    #[test]
    fn back_to_top_is_strictly_above_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(800.0));
        assert!(scroll_top_visible(801.0));
    }

    #[test]
    fn thresholds_are_independent() {
        assert!(nav_is_compact(400.0));
        assert!(!scroll_top_visible(400.0));
    }

    #[test]
    fn progress_is_clamped_ratio() {
        assert_eq!(progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(progress(2000.0, 3000.0, 1000.0), 1.0);
        // Rubber-band overscroll on some browsers.
        assert_eq!(progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_document_has_no_progress() {
        assert_eq!(progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress(10.0, 1000.0, 1000.0), 0.0);
    }
}
