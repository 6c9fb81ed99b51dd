use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::SectionHeader;
use crate::content::PRICING;
use crate::icons::Icon;
use crate::page::{NavigateProps, PageId};

#[function_component(PricingPage)]
pub fn pricing_page(props: &NavigateProps) -> Html {
    html! {
        <section class="page-section">
            <SectionHeader subtitle="Investment Structure" title="Deploy Your Strategic Asset" />
            <div class="pricing-grid">
                { for PRICING.iter().map(|tier| {
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(PageId::Contact);
                        })
                    };
                    html! {
                        <div class={classes!("pricing-card", tier.recommended.then(|| "recommended"))}>
                            {
                                if tier.recommended {
                                    html! { <div class="pricing-badge">{"Most Deployed"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                            <h3>{ tier.name }</h3>
                            <div class="pricing-price">{ tier.price }</div>
                            <ul class="pricing-features">
                                { for tier.features.iter().map(|feature| html! {
                                    <li>{ Icon::CheckCircle.render(18) }<span>{ *feature }</span></li>
                                }) }
                            </ul>
                            <button class="pricing-cta" {onclick}>{"Initiate Setup"}</button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
