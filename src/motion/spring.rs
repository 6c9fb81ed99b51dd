/// Damped spring pulling a displayed value toward a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    pub const fn with_rest_delta(self, rest_delta: f64) -> Self {
        Self { rest_delta, ..self }
    }
}

// Long gaps (background tab, first frame after idling) are treated as one short frame.
const MAX_FRAME_SECS: f64 = 1.0 / 15.0;
const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advances the simulation by `dt` seconds and returns the new position.
    pub fn step(&mut self, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.position();
        }
        let dt = dt.min(MAX_FRAME_SECS);
        let substeps = (dt / MAX_SUBSTEP_SECS).ceil().max(1.0) as u32;
        let h = dt / f64::from(substeps);

        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        for _ in 0..substeps {
            let displacement = self.position - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
        }

        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position()
    }
}

/// Two independent springs driving an (x, y) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSpring {
    x: Spring,
    y: Spring,
}

impl PointSpring {
    pub fn new(config: SpringConfig, (x, y): (f64, f64)) -> Self {
        Self {
            x: Spring::new(config, x),
            y: Spring::new(config, y),
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn step(&mut self, dt: f64) -> (f64, f64) {
        (self.x.step(dt), self.y.step(dt))
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CURSOR_SPRING, PROGRESS_SPRING};

    const FRAME: f64 = 1.0 / 60.0;

    // 1.0 is critical damping; above it the spring never overshoots.
    fn damping_ratio(config: &SpringConfig) -> f64 {
        config.damping / (2.0 * (config.stiffness * config.mass).sqrt())
    }

    #[test]
    fn cursor_spring_is_close_to_critically_damped() {
        let ratio = damping_ratio(&CURSOR_SPRING);
        assert!(ratio > 0.95 && ratio < 1.1, "ratio was {ratio}");
    }

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(CURSOR_SPRING, 0.0);
        spring.set_target(100.0);
        for _ in 0..180 {
            spring.step(FRAME);
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 100.0);
    }

    #[test]
    fn approaches_without_meaningful_overshoot() {
        let mut spring = Spring::new(CURSOR_SPRING, 0.0);
        spring.set_target(100.0);
        let mut last = 0.0;
        for _ in 0..180 {
            let now = spring.step(FRAME);
            assert!(now <= 100.5, "overshot to {now}");
            assert!(now >= last - 0.5, "moved away from the target: {last} -> {now}");
            last = now;
        }
    }

    #[test]
    fn zero_and_invalid_steps_do_nothing() {
        let mut spring = Spring::new(CURSOR_SPRING, 5.0);
        spring.set_target(50.0);
        assert_eq!(spring.step(0.0), 5.0);
        assert_eq!(spring.step(-1.0), 5.0);
        assert_eq!(spring.step(f64::NAN), 5.0);
    }

    #[test]
    fn long_pause_counts_as_one_short_frame() {
        let mut paused = Spring::new(CURSOR_SPRING, 0.0);
        paused.set_target(100.0);
        let mut capped = paused.clone();

        paused.step(10.0);
        capped.step(MAX_FRAME_SECS);
        assert_eq!(paused, capped);
    }

    #[test]
    fn progress_spring_uses_fine_rest_delta() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.0);
        spring.set_target(0.5);
        spring.step(FRAME);
        assert!(!spring.is_at_rest());
        for _ in 0..300 {
            spring.step(FRAME);
        }
        assert_eq!(spring.position(), 0.5);
    }

    #[test]
    fn point_spring_rests_only_when_both_axes_do() {
        let mut point = PointSpring::new(CURSOR_SPRING, (0.0, 0.0));
        assert!(point.is_at_rest());
        point.set_target(10.0, 0.0);
        assert!(!point.is_at_rest());
        for _ in 0..180 {
            point.step(FRAME);
        }
        assert!(point.is_at_rest());
        assert_eq!(point.step(FRAME), (10.0, 0.0));
    }
}
