use web_sys::MouseEvent;
use yew::prelude::*;

use crate::icons::Icon;
use crate::motion::dom;
use crate::motion::listener::WindowListener;
use crate::motion::scroll::nav_is_compact;
use crate::page::PageId;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current_page: PageId,
    pub menu_open: bool,
    pub on_navigate: Callback<PageId>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        current_page,
        menu_open,
        on_navigate,
        on_toggle_menu,
    } = props;
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move |_| {
                    if let Ok(offset) = dom::scroll_y() {
                        is_scrolled.set(nav_is_compact(offset));
                    }
                })
                .map_err(|err| log::warn!("compact navigation unavailable: {}", err))
                .ok();
                move || drop(listener)
            },
            (),
        );
    }

    let go = |page: PageId| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        })
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go(PageId::Home)}>
                    <span class="nav-logo-mark">{ Icon::Layers.render(24) }</span>
                    <span class="nav-logo-text">{"MCSS"}</span>
                </button>

                <div class="nav-links">
                    { for PageId::ALL.iter().map(|&page| html! {
                        <button
                            class={classes!("nav-link", (page == *current_page).then(|| "active"))}
                            onclick={go(page)}
                        >
                            { page.label() }
                            {
                                if page == *current_page {
                                    html! { <span class="nav-underline"></span> }
                                } else {
                                    html! {}
                                }
                            }
                        </button>
                    }) }
                    <button class="nav-cta" onclick={go(PageId::Contact)}>
                        {"Start Project"}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { Icon::X.render(28) } else { Icon::Menu.render(28) } }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for PageId::ALL.iter().enumerate().map(|(i, &page)| html! {
                                <button
                                    class={classes!("mobile-link", (page == *current_page).then(|| "active"))}
                                    style={format!("animation-delay: {}ms;", i * 100)}
                                    onclick={go(page)}
                                >
                                    { page.label() }
                                </button>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
