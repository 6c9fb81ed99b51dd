use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::motion::media::MotionPolicy;
use crate::motion::tilt::{Bounds, TiltState};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Leans toward the pointer while hovered and settles flat when it leaves.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let policy = use_state(MotionPolicy::detect);
    let tilt = use_state_eq(TiltState::default);
    let card = use_node_ref();
    let enabled = policy.tilt_enabled();

    let onmousemove = {
        let tilt = tilt.clone();
        let card = card.clone();
        Callback::from(move |e: MouseEvent| {
            if !enabled {
                return;
            }
            if let Some(element) = card.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let bounds = Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                };
                tilt.set(TiltState::track(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    bounds,
                ));
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            if enabled {
                tilt.set(TiltState::Idle);
            }
        })
    };

    let (card_style, depth_style) = if enabled {
        (
            Some(AttrValue::from(tilt.rotation().to_css())),
            Some(AttrValue::from("transform: translateZ(50px);")),
        )
    } else {
        (None, None)
    };

    html! {
        <div
            ref={card}
            class={classes!("tilt-card", props.class.clone())}
            style={card_style}
            {onmousemove}
            {onmouseleave}
        >
            <div class="tilt-card-depth" style={depth_style}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
