/// A statistic label such as `"250+"`, split into the number to count up to
/// and the text that stays put.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterLabel {
    target: Option<u32>,
    affix: String,
}

impl CounterLabel {
    pub fn parse(label: &str) -> Self {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        let affix: String = label.chars().filter(|c| !c.is_ascii_digit()).collect();
        Self {
            target: digits.parse().ok(),
            affix,
        }
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn affix(&self) -> &str {
        &self.affix
    }

    /// Text for the given count. Labels without a number only show their text.
    pub fn display(&self, value: u32) -> String {
        match self.target() {
            Some(_) => format!("{}{}", value, self.affix()),
            None => self.affix().to_string(),
        }
    }

    pub fn plan(&self, duration_secs: f64, floor_ms: u32) -> Option<CounterPlan> {
        self.target()
            .map(|target| CounterPlan::new(target, duration_secs, floor_ms))
    }
}

/// Tick schedule for counting from zero to `target` within a duration.
/// Values are spread evenly over the ticks, so a floored step still ends
/// close to the full duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterPlan {
    target: u32,
    step_ms: u32,
    ticks: u32,
}

impl CounterPlan {
    pub fn new(target: u32, duration_secs: f64, floor_ms: u32) -> Self {
        let duration_ms = if duration_secs.is_finite() && duration_secs > 0.0 {
            (duration_secs * 1000.0).round() as u64
        } else {
            0
        };
        let floor_ms = u64::from(floor_ms.max(1));
        let step_ms = (duration_ms / u64::from(target.max(1))).max(floor_ms);
        let ticks = if target == 0 {
            0
        } else {
            (duration_ms / step_ms).clamp(1, u64::from(target))
        };

        Self {
            target,
            step_ms: u32::try_from(step_ms).unwrap_or(u32::MAX),
            ticks: ticks as u32,
        }
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_done(&self, tick: u32) -> bool {
        tick >= self.ticks
    }

    /// Count shown after `tick` ticks.
    pub fn value_at(&self, tick: u32) -> u32 {
        if self.is_done(tick) {
            return self.target;
        }
        (u64::from(self.target) * u64::from(tick) / u64::from(self.ticks)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COUNTER_DURATION_SECS, COUNTER_STEP_FLOOR_MS};

    fn run(label: &CounterLabel) -> (Vec<String>, u64) {
        let plan = label
            .plan(COUNTER_DURATION_SECS, COUNTER_STEP_FLOOR_MS)
            .expect("label has a number");
        let mut tick = 0;
        let mut frames = vec![label.display(plan.value_at(tick))];
        let mut elapsed = 0u64;
        while !plan.is_done(tick) {
            tick += 1;
            elapsed += u64::from(plan.step_ms());
            frames.push(label.display(plan.value_at(tick)));
        }
        (frames, elapsed)
    }

    #[test]
    fn splits_number_and_suffix() {
        let label = CounterLabel::parse("250+");
        assert_eq!(label.target(), Some(250));
        assert_eq!(label.affix(), "+");

        let label = CounterLabel::parse("99%");
        assert_eq!(label.target(), Some(99));
        assert_eq!(label.affix(), "%");
    }

    #[test]
    fn counts_up_to_250_plus() {
        let label = CounterLabel::parse("250+");
        let (frames, elapsed) = run(&label);

        assert_eq!(frames.first().map(String::as_str), Some("0+"));
        assert_eq!(frames.last().map(String::as_str), Some("250+"));
        assert!(elapsed <= 2000, "took {elapsed}ms");

        let values: Vec<u32> = frames
            .iter()
            .map(|frame| {
                assert!(frame.ends_with('+'));
                assert_eq!(frame.matches('+').count(), 1);
                frame.trim_end_matches('+').parse().unwrap()
            })
            .collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn floored_counters_still_use_the_whole_duration() {
        for label in ["250+", "300+", "5000", "120+"] {
            let (_, elapsed) = run(&CounterLabel::parse(label));
            assert!(
                (1900..=2000).contains(&elapsed),
                "{label} finished after {elapsed}ms"
            );
        }
    }

    #[test]
    fn small_targets_tick_one_at_a_time() {
        let plan = CounterPlan::new(99, 2.0, 10);
        assert_eq!(plan.step_ms(), 20);
        assert_eq!(plan.ticks(), 99);
        assert_eq!(plan.value_at(1), 1);
        assert_eq!(plan.value_at(98), 98);
        assert_eq!(plan.value_at(99), 99);
        assert!(plan.is_done(99));
    }

    #[test]
    fn floor_limits_tick_rate_for_large_targets() {
        let plan = CounterPlan::new(5000, 2.0, 10);
        assert_eq!(plan.step_ms(), 10);
        assert_eq!(plan.ticks(), 200);
        assert_eq!(plan.value_at(1), 25);
        assert_eq!(plan.value_at(200), 5000);
        assert_eq!(plan.value_at(500), 5000);
    }

    #[test]
    fn zero_target_is_already_done() {
        let plan = CounterPlan::new(0, 2.0, 10);
        assert!(plan.is_done(0));
        assert_eq!(plan.value_at(0), 0);
        assert_eq!(CounterLabel::parse("0%").display(0), "0%");
    }

    #[test]
    fn zero_duration_finishes_in_one_tick() {
        let plan = CounterPlan::new(40, 0.0, 10);
        assert_eq!(plan.step_ms(), 10);
        assert_eq!(plan.ticks(), 1);
        assert_eq!(plan.value_at(0), 0);
        assert_eq!(plan.value_at(1), 40);
    }

    #[test]
    fn unparseable_label_has_no_animation() {
        let label = CounterLabel::parse("abc");
        assert_eq!(label.target(), None);
        assert!(label.plan(2.0, 10).is_none());
        assert_eq!(label.display(0), "abc");
        assert_eq!(label.display(7), "abc");
    }

    #[test]
    fn overflowing_digits_are_treated_as_unparseable() {
        let label = CounterLabel::parse("99999999999+");
        assert_eq!(label.target(), None);
        assert_eq!(label.display(0), "+");
    }
}
