use web_sys::MouseEvent;
use yew::prelude::*;

use crate::icons::Icon;
use crate::page::PageId;

const CORE_LINKS: [(&str, PageId); 5] = [
    ("Bio Protocol", PageId::About),
    ("Active Stacks", PageId::Services),
    ("Team Node", PageId::Team),
    ("Digital Archive", PageId::Portfolio),
    ("Pricing Nodes", PageId::Pricing),
];

const PROTOCOL_LINKS: [(&str, PageId); 2] = [
    ("Process", PageId::Process),
    ("Client Portal", PageId::Contact),
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<PageId>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let link = |(name, page): &(&'static str, PageId)| {
        let page = *page;
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        });
        html! { <li class="footer-link" {onclick}>{ *name }</li> }
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <div class="footer-logo-mark">{"M"}</div>
                        <span class="footer-logo-text">{"MCSS"}</span>
                    </div>
                    <p>{"Synthesizing behavior and logic to build the backbone of the next-generation global digital economy."}</p>
                    <div class="footer-socials">
                        { for [Icon::Globe, Icon::Mail, Icon::Smartphone, Icon::Database]
                            .iter()
                            .map(|icon| html! { <div class="footer-social">{ icon.render(24) }</div> }) }
                    </div>
                </div>
                <div class="footer-column">
                    <h4>{"The Core"}</h4>
                    <ul>{ for CORE_LINKS.iter().map(link) }</ul>
                </div>
                <div class="footer-column">
                    <h4>{"Protocol"}</h4>
                    <ul>
                        { for PROTOCOL_LINKS.iter().map(link) }
                        <li class="footer-link muted">{"Neural Hub"}</li>
                        <li class="footer-link muted">{"Data Privacy"}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <div>{"© 2026 Matrix Core Software Solutions"}</div>
                <div class="footer-status">
                    <span class="status-dot"></span>
                    <span>{"All Nodes Healthy"}</span>
                    <span class="footer-country">{"SRI LANKA 🇱🇰"}</span>
                </div>
            </div>
        </footer>
    }
}
