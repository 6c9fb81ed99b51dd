use web_sys::MouseEvent;
use yew::prelude::*;

use super::reveal::SectionHeader;
use super::tilt_card::TiltCard;
use crate::content::{self, TEAM};
use crate::icons::Icon;
use crate::state::TeamDisclosure;

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    index: usize,
    expanded: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let Some(member) = TEAM.get(props.index) else {
        return html! {};
    };

    html! {
        <div class={classes!("team-member", props.expanded.then(|| "expanded"))}>
            <TiltCard class={classes!("team-card-tilt")}>
                <button type="button" class="team-card" onclick={props.on_toggle.clone()}>
                    <div class="team-photo">
                        <img src={member.photo} alt={member.name} loading="lazy" />
                    </div>
                    <div class="team-name">{ member.name }</div>
                    <div class="team-role">{ member.role }</div>
                    <div class="team-hint">
                        {"Hover / Tap for intro "}{ Icon::ArrowRight.render(14) }
                    </div>
                    // Desktop: revealed by :hover in CSS.
                    <div class="team-hover-intro">
                        <div class="team-intro-title">{"Introduction"}</div>
                        <div class="team-intro-text">{ member.intro }</div>
                    </div>
                </button>
            </TiltCard>
            {
                if props.expanded {
                    html! {
                        <div class="team-tap-intro">
                            <div class="team-intro-title">{"Introduction"}</div>
                            <div class="team-intro-text">{ member.intro }</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let disclosure = use_state_eq(TeamDisclosure::default);

    html! {
        <div class="team-section">
            <SectionHeader subtitle="Core Operators" title="Meet The Team" />
            <div class="team-grid">
                { for TEAM.iter().enumerate().map(|(index, member)| {
                    let id = member.id;
                    let on_toggle = {
                        let disclosure = disclosure.clone();
                        Callback::from(move |_: MouseEvent| {
                            let next = disclosure.toggle(id);
                            log::debug!(
                                "expanded team member: {:?}",
                                next.expanded().and_then(content::member).map(|m| m.name)
                            );
                            disclosure.set(next);
                        })
                    };
                    html! {
                        <MemberCard
                            key={member.name}
                            {index}
                            expanded={disclosure.is_expanded(id)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
            <div class="team-tagline">
                { Icon::Users.render(16) }{" Your requirements are our profession"}
            </div>
        </div>
    }
}
