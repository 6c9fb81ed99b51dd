use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, SECTION_HEADER_ROOT_MARGIN};
use crate::error::SiteError;
use crate::motion::visibility::VisibilityLatch;

/// True once `node` has been on screen. Never goes back to false.
#[hook]
pub fn use_reveal(node: NodeRef, root_margin: &'static str) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let latch = node
                    .cast::<Element>()
                    .ok_or_else(|| SiteError::Dom("reveal target is not mounted".to_string()))
                    .and_then(|element| {
                        let revealed = revealed.clone();
                        VisibilityLatch::observe(&element, root_margin, move || revealed.set(true))
                    });
                let latch = match latch {
                    Ok(latch) => Some(latch),
                    Err(err) => {
                        // Without an observer the content would never show up.
                        log::warn!("visibility tracking unavailable, showing content: {}", err);
                        revealed.set(true);
                        None
                    }
                };
                move || drop(latch)
            },
            (),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children up into place the first time they scroll into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_ROOT_MARGIN);

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then_some("revealed"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub subtitle: AttrValue,
    pub title: AttrValue,
    #[prop_or(true)]
    pub centered: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), SECTION_HEADER_ROOT_MARGIN);

    html! {
        <div
            ref={node}
            class={classes!(
                "section-header",
                props.centered.then_some("centered"),
                revealed.then_some("revealed")
            )}
        >
            <div class="section-subtitle-mask">
                <span class="section-subtitle">{ props.subtitle.clone() }</span>
            </div>
            <h2 class="section-title">{ props.title.clone() }</h2>
            <div class="section-rule"></div>
        </div>
    }
}
