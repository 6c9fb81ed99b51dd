use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::reveal::use_reveal;
use crate::config::{COUNTER_DURATION_SECS, COUNTER_ROOT_MARGIN, COUNTER_STEP_FLOOR_MS};
use crate::motion::counter::CounterLabel;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    /// Label such as `"250+"`; the digits are counted up, the rest stays.
    pub value: AttrValue,
    #[prop_or(COUNTER_DURATION_SECS)]
    pub duration_secs: f64,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let seen = use_reveal(node.clone(), COUNTER_ROOT_MARGIN);
    let tick = use_state_eq(|| 0u32);
    let label = CounterLabel::parse(&props.value);
    let plan = label.plan(props.duration_secs, COUNTER_STEP_FLOOR_MS);
    let current = *tick;

    // One timeout per tick; each new tick re-runs the effect and schedules the next.
    {
        let tick = tick.clone();
        let value = props.value.clone();
        use_effect_with_deps(
            move |(seen, current, _, _)| {
                let timeout = match plan {
                    Some(plan) if *seen && !plan.is_done(*current) => {
                        let next = *current + 1;
                        Some(Timeout::new(plan.step_ms(), move || tick.set(next)))
                    }
                    None if *seen => {
                        log::warn!("counter label `{}` has no number, not animating", value);
                        None
                    }
                    _ => None,
                };
                move || drop(timeout)
            },
            (seen, current, props.value.clone(), props.duration_secs),
        );
    }

    let shown = plan.map(|plan| plan.value_at(current)).unwrap_or(0);

    html! {
        <span ref={node} class="counter">{ label.display(shown) }</span>
    }
}
