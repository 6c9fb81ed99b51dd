use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::components::reveal::SectionHeader;
use crate::content::{CONTACT_CHANNELS, DEPLOYMENT_TYPES};
use crate::icons::Icon;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    // Inquiries are not sent anywhere yet; keep the browser from reloading the page.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log::debug!("contact form submitted, nothing to send it to");
    });

    html! {
        <section class="page-section contact-page">
            <div class="contact-info slide-in-left">
                <SectionHeader subtitle="Communication Protocol" title="Connect With The Matrix" centered={false} />
                <p class="contact-lead">
                    {"Submit your project requirements to initiate an engineering audit."}
                </p>
                <div class="contact-channels">
                    { for CONTACT_CHANNELS.iter().map(|channel| html! {
                        <div class="contact-channel">
                            <div class="contact-icon">{ channel.icon.render(24) }</div>
                            <div>
                                <div class="contact-label">{ channel.label }</div>
                                <div class="contact-value">{ channel.value }</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="contact-form-wrap slide-in-right">
                <form class="contact-form" {onsubmit}>
                    <div class="form-row">
                        <div class="form-field">
                            <label>{"Operator Name"}</label>
                            <input type="text" placeholder="Your name" />
                        </div>
                        <div class="form-field">
                            <label>{"Return Channel"}</label>
                            <input type="text" placeholder="Email / WhatsApp" />
                        </div>
                    </div>
                    <div class="form-field">
                        <label>{"Deployment Type"}</label>
                        <select>
                            { for DEPLOYMENT_TYPES.iter().map(|kind| html! { <option>{ *kind }</option> }) }
                        </select>
                    </div>
                    <div class="form-field">
                        <label>{"Mission Parameters"}</label>
                        <textarea rows="4" placeholder="Provide technical scope..." />
                    </div>
                    <button type="submit" class="contact-submit">
                        {"Deploy Inquiry "}{ Icon::Rocket.render(20) }
                    </button>
                </form>
            </div>
        </section>
    }
}
