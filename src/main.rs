use log::info;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

mod config;
mod content;
mod error;
mod icons;
mod page;
mod state;
mod motion {
    pub mod counter;
    pub mod dom;
    pub mod frame;
    pub mod listener;
    pub mod media;
    pub mod scroll;
    pub mod spring;
    pub mod tilt;
    pub mod visibility;
}
mod components {
    pub mod back_to_top;
    pub mod counter;
    pub mod cursor;
    pub mod footer;
    pub mod nav;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod team;
    pub mod tilt_card;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod portfolio;
    pub mod pricing;
    pub mod process;
    pub mod services;
    pub mod team;
}

use components::{
    back_to_top::BackToTop,
    cursor::CursorFollower,
    footer::Footer,
    nav::Nav,
    scroll_progress::ScrollProgress,
};
use motion::dom;
use motion::listener::WindowListener;
use motion::scroll::scroll_top_visible;
use page::PageId;
use pages::{
    about::AboutPage,
    contact::ContactPage,
    home::HomePage,
    portfolio::PortfolioPage,
    pricing::PricingPage,
    process::ProcessPage,
    services::ServicesPage,
    team::TeamPage,
};
use state::{action_for_key, SiteAction, SiteState};

fn switch(page: PageId, on_navigate: Callback<PageId>) -> Html {
    match page {
        PageId::Home => {
            info!("Rendering Home page");
            html! { <HomePage {on_navigate} /> }
        }
        PageId::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        }
        PageId::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        PageId::Team => {
            info!("Rendering Team page");
            html! { <TeamPage /> }
        }
        PageId::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <PortfolioPage /> }
        }
        PageId::Process => {
            info!("Rendering Process page");
            html! { <ProcessPage /> }
        }
        PageId::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingPage {on_navigate} /> }
        }
        PageId::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let site = use_reducer(SiteState::default);
    let show_scroll_top = use_state_eq(|| false);

    // Every page change starts at the top of the viewport.
    use_effect_with_deps(
        move |page| {
            info!("Showing {} page", page);
            if let Err(err) = dom::scroll_to_top() {
                log::warn!("could not reset scroll position: {}", err);
            }
            || ()
        },
        site.page,
    );

    {
        let show_scroll_top = show_scroll_top.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move |_| {
                    if let Ok(offset) = dom::scroll_y() {
                        show_scroll_top.set(scroll_top_visible(offset));
                    }
                })
                .map_err(|err| log::warn!("back-to-top tracking unavailable: {}", err))
                .ok();
                move || drop(listener)
            },
            (),
        );
    }

    {
        let dispatcher = site.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("keydown", move |event| {
                    if let Some(action) = event
                        .dyn_ref::<KeyboardEvent>()
                        .and_then(|key| action_for_key(&key.key()))
                    {
                        dispatcher.dispatch(action);
                    }
                })
                .map_err(|err| log::warn!("keyboard shortcuts unavailable: {}", err))
                .ok();
                move || drop(listener)
            },
            (),
        );
    }

    let on_navigate = {
        let site = site.clone();
        Callback::from(move |page: PageId| {
            log::debug!("navigation requested: {}", page);
            site.dispatch(SiteAction::Navigate(page));
        })
    };

    let on_toggle_menu = {
        let site = site.clone();
        Callback::from(move |_: ()| site.dispatch(SiteAction::ToggleMobileMenu))
    };

    html! {
        <div class="site">
            <CursorFollower />
            <ScrollProgress />
            <Nav
                current_page={site.page}
                menu_open={site.mobile_menu_open}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
            />
            <div class="page-host">
                // Keyed so each navigation remounts the block and replays its entrance.
                <main key={site.page.slug()} class="page-transition">
                    { switch(site.page, on_navigate.clone()) }
                </main>
            </div>
            <Footer {on_navigate} />
            <BackToTop visible={*show_scroll_top} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting MCSS site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn every_page_renders_a_single_page_component() {
        for page in PageId::ALL {
            let block = switch(page, Callback::from(|_: PageId| ()));
            assert!(matches!(block, VNode::VComp(_)), "{} rendered no component", page);
        }
    }
}
