use yew::prelude::*;

use crate::components::reveal::{RevealSection, SectionHeader};
use crate::components::tilt_card::TiltCard;
use crate::content::SERVICES;
use crate::icons::Icon;

#[function_component(ServicesGrid)]
pub fn services_grid() -> Html {
    html! {
        <RevealSection class={classes!("services-grid", "stagger")}>
            { for SERVICES.iter().map(|service| html! {
                <TiltCard class={classes!("service-tilt")}>
                    <div class="service-card">
                        <div class={classes!("service-icon", service.accent)}>
                            { service.icon.render(32) }
                        </div>
                        <h3>{ service.title }</h3>
                        <p>{ service.description }</p>
                        <div class="service-link">
                            {"Deploy Protocol "}{ Icon::ArrowRight.render(14) }
                        </div>
                    </div>
                </TiltCard>
            }) }
        </RevealSection>
    }
}

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <section class="page-section">
            <SectionHeader subtitle="Operational Capabilities" title="The MCSS Technology Protocol" />
            <ServicesGrid />
        </section>
    }
}
