use yew::prelude::*;

use crate::components::reveal::SectionHeader;
use crate::content::PROCESS_STEPS;

#[function_component(ProcessSteps)]
pub fn process_steps() -> Html {
    html! {
        <div class="process-steps">
            <div class="process-line"></div>
            { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                <div class="process-step" style={format!("animation-delay: {}ms;", i * 100)}>
                    <div class="process-icon">
                        { step.icon.render(28) }
                        <span class="process-index">{ format!("0{}", i + 1) }</span>
                    </div>
                    <span class="process-label">{ step.label }</span>
                </div>
            }) }
        </div>
    }
}

#[function_component(ProcessPage)]
pub fn process_page() -> Html {
    html! {
        <section class="page-section">
            <SectionHeader subtitle="Operational Logic" title="The Development Cycle" />
            <ProcessSteps />
        </section>
    }
}
