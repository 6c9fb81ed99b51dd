use crate::config::{TILT_INPUT_RANGE, TILT_MAX_DEG};

/// Card geometry in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TiltState {
    #[default]
    Idle,
    /// Pointer offset from the card centre.
    Tracking { dx: f64, dy: f64 },
}

impl TiltState {
    pub fn track(pointer_x: f64, pointer_y: f64, bounds: Bounds) -> Self {
        let (cx, cy) = bounds.center();
        TiltState::Tracking {
            dx: pointer_x - cx,
            dy: pointer_y - cy,
        }
    }

    pub fn rotation(&self) -> Rotation {
        match *self {
            TiltState::Idle => Rotation::default(),
            TiltState::Tracking { dx, dy } => Rotation {
                x_deg: map_range(dy, TILT_INPUT_RANGE, (TILT_MAX_DEG, -TILT_MAX_DEG)),
                y_deg: map_range(dx, TILT_INPUT_RANGE, (-TILT_MAX_DEG, TILT_MAX_DEG)),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Rotation {
    pub fn to_css(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d;",
            self.x_deg, self.y_deg
        )
    }
}

/// Linear interpolation from one range onto another, clamped to the output.
pub fn map_range(value: f64, (in_lo, in_hi): (f64, f64), (out_lo, out_hi): (f64, f64)) -> f64 {
    if in_hi == in_lo {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 200.0,
        width: 300.0,
        height: 400.0,
    };

    #[test]
    fn idle_card_is_flat() {
        assert_eq!(TiltState::Idle.rotation(), Rotation::default());
    }

    #[test]
    fn pointer_at_centre_is_flat() {
        let state = TiltState::track(250.0, 400.0, CARD);
        assert_eq!(state, TiltState::Tracking { dx: 0.0, dy: 0.0 });
        assert_eq!(state.rotation(), Rotation { x_deg: 0.0, y_deg: 0.0 });
    }

    #[test]
    fn pointer_bottom_right_tilts_toward_it() {
        let rotation = TiltState::track(300.0, 450.0, CARD).rotation();
        assert_eq!(rotation.x_deg, -5.0);
        assert_eq!(rotation.y_deg, 5.0);
    }

    #[test]
    fn rotation_is_clamped_outside_input_range() {
        let rotation = TiltState::track(-500.0, -500.0, CARD).rotation();
        assert_eq!(rotation.x_deg, 10.0);
        assert_eq!(rotation.y_deg, -10.0);
    }

    #[test]
    fn map_range_handles_reversed_output() {
        assert_eq!(map_range(-100.0, (-100.0, 100.0), (10.0, -10.0)), 10.0);
        assert_eq!(map_range(100.0, (-100.0, 100.0), (10.0, -10.0)), -10.0);
        assert_eq!(map_range(3.0, (1.0, 1.0), (4.0, 8.0)), 4.0);
    }
}
