use yew::prelude::*;

use crate::components::reveal::{RevealSection, SectionHeader};
use crate::content::PROJECTS;
use crate::icons::Icon;

#[function_component(PortfolioGrid)]
pub fn portfolio_grid() -> Html {
    html! {
        <RevealSection class={classes!("portfolio-grid", "stagger")}>
            { for PROJECTS.iter().map(|project| html! {
                <div class="project-card">
                    <div class="project-media">
                        <img src={project.image} alt={project.title} loading="lazy" />
                        <div class="project-open">{ Icon::ExternalLink.render(24) }</div>
                    </div>
                    <div class="project-body">
                        <div class="project-category">{ project.category }</div>
                        <h3>{ project.title }</h3>
                        <div class="project-tech">
                            { for project.tech.iter().map(|tech| html! {
                                <span key={*tech} class="tech-chip">{ *tech }</span>
                            }) }
                        </div>
                    </div>
                </div>
            }) }
        </RevealSection>
    }
}

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    html! {
        <section class="page-section">
            <SectionHeader subtitle="Visual Archive" title="Case Studies in Excellence" />
            <PortfolioGrid />
        </section>
    }
}
