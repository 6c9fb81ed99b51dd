use web_sys::MouseEvent;
use yew::prelude::*;

use crate::icons::Icon;
use crate::motion::dom;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = dom::scroll_to_top() {
            log::warn!("scroll to top failed: {}", err);
        }
    });

    html! {
        <button class="back-to-top visible" {onclick} aria-label="Back to top">
            { Icon::ChevronUp.render(32) }
        </button>
    }
}
