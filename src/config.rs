use log::Level;

use crate::motion::spring::SpringConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose widget lifecycle logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Navigation bar switches to its compact style strictly above this offset.
pub const NAV_COMPACT_THRESHOLD_PX: f64 = 50.0;
/// Back-to-top button shows strictly above this offset.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 800.0;

pub const CURSOR_SPRING: SpringConfig = SpringConfig::new(150.0, 25.0);
/// Parked off screen until the first pointer move arrives.
pub const CURSOR_START: (f64, f64) = (-100.0, -100.0);

pub const PROGRESS_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0).with_rest_delta(0.001);

pub const COUNTER_DURATION_SECS: f64 = 2.0;
pub const COUNTER_STEP_FLOOR_MS: u32 = 10;

pub const HERO_WORD_PERIOD_MS: u32 = 2800;

pub const TILT_INPUT_RANGE: (f64, f64) = (-100.0, 100.0);
pub const TILT_MAX_DEG: f64 = 10.0;

pub const REVEAL_ROOT_MARGIN: &str = "-100px";
pub const COUNTER_ROOT_MARGIN: &str = "0px";
pub const SECTION_HEADER_ROOT_MARGIN: &str = "0px";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margins_are_pixel_lengths() {
        for margin in [REVEAL_ROOT_MARGIN, COUNTER_ROOT_MARGIN, SECTION_HEADER_ROOT_MARGIN] {
            let number = margin.strip_suffix("px").expect("margin in px");
            assert!(number.parse::<f64>().is_ok(), "bad margin {margin}");
        }
    }
}
