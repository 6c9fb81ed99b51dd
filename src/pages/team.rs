use yew::prelude::*;

use crate::components::team::TeamSection;

#[function_component(TeamPage)]
pub fn team_page() -> Html {
    html! {
        <section class="page-section">
            <TeamSection />
        </section>
    }
}
