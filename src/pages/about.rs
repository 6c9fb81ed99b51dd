use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::reveal::SectionHeader;
use crate::content::{ABOUT_PILLARS, ABOUT_STATS};
use crate::icons::Icon;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <section class="page-section about-page">
            <div class="about-copy slide-in-left">
                <SectionHeader subtitle="Company Profile" title="Matrix Core Software Solutions" centered={false} />
                <div class="about-text">
                    <p>
                        {"MCSS is a global engineering hub specializing in the fusion of behavioral design and advanced computational logic."}
                    </p>
                    <p>
                        {"From our command center in Sri Lanka, we orchestrate digital transformations for high-growth startups and established global enterprises."}
                    </p>
                </div>
                <div class="about-pillars">
                    { for ABOUT_PILLARS.iter().map(|pillar| html! {
                        <div class="about-pillar">
                            <div class="about-pillar-icon">{ pillar.icon.render(24) }</div>
                            <h4>{ pillar.title }</h4>
                            <p>{ pillar.text }</p>
                        </div>
                    }) }
                </div>
            </div>

            <div class="about-stats-panel zoom-in">
                <div class="about-stats">
                    { for ABOUT_STATS.iter().map(|stat| html! {
                        <div class="about-stat">
                            <div class="about-stat-value">
                                <AnimatedCounter value={stat.value} />
                            </div>
                            <div class="about-stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
                <div class="about-orbit"></div>
                <div class="about-award">{ Icon::Award.render(40) }</div>
            </div>
        </section>
    }
}
