use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::portfolio::PortfolioGrid;
use super::process::ProcessSteps;
use super::services::ServicesGrid;
use crate::components::counter::AnimatedCounter;
use crate::components::reveal::{RevealSection, SectionHeader};
use crate::components::team::TeamSection;
use crate::config::HERO_WORD_PERIOD_MS;
use crate::content::{HERO_STATS, HERO_WORDS, MARQUEE_TAGS};
use crate::icons::Icon;
use crate::page::{NavigateProps, PageId};

pub fn next_word(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

fn navigate_to(on_navigate: &Callback<PageId>, page: PageId) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(page);
    })
}

#[function_component(Hero)]
fn hero(props: &NavigateProps) -> Html {
    let word = use_state(|| 0usize);

    {
        let word = word.setter();
        use_effect_with_deps(
            move |_| {
                let mut index = 0;
                let interval = Interval::new(HERO_WORD_PERIOD_MS, move || {
                    index = next_word(index, HERO_WORDS.len());
                    word.set(index);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div class="hero-background" aria-hidden="true">
                <div class="hero-grid"></div>
                <div class="hero-orb hero-orb-blue"></div>
                <div class="hero-orb hero-orb-purple"></div>
                { for (0..5).map(|i| html! {
                    <div
                        class="hero-streak"
                        style={format!("top: {}%; animation-duration: {}s; animation-delay: {}s;", 20 * i, 8 + i * 2, i)}
                    ></div>
                }) }
            </div>

            <div class="hero-content">
                <div class="hero-badge">{"Digital Protocol: Active"}</div>
                <h1 class="hero-title">
                    {"Matrix"}<br />
                    <span class="gradient-text">{"Core"}</span>
                </h1>
                <div class="hero-subtitle">
                    {"Engineering high-performance "}
                    <span class="hero-word-slot">
                        <span key={*word} class="hero-word">{ HERO_WORDS[*word % HERO_WORDS.len()] }</span>
                    </span>
                </div>
                <div class="hero-actions">
                    <button class="hero-cta" onclick={navigate_to(&props.on_navigate, PageId::Contact)}>
                        {"Initiate Project "}{ Icon::Rocket.render(20) }
                    </button>
                    <button class="hero-secondary" onclick={navigate_to(&props.on_navigate, PageId::Portfolio)}>
                        {"The Archive "}{ Icon::ArrowRight.render(20) }
                    </button>
                </div>
            </div>

            <div class="hero-stats stagger">
                { for HERO_STATS.iter().map(|stat| html! {
                    <div class="hero-stat">
                        <div class="hero-stat-value"><AnimatedCounter value={stat.value} /></div>
                        <div class="hero-stat-label">{ stat.label }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Marquee)]
fn marquee() -> Html {
    // Two identical rows so the loop can wrap at -50% without a seam.
    let row = || {
        MARQUEE_TAGS
            .iter()
            .map(|tag| html! { <span class="marquee-tag">{ *tag }</span> })
            .collect::<Html>()
    };

    html! {
        <section class="marquee" aria-hidden="true">
            <div class="marquee-track">
                { row() }
                { row() }
            </div>
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page(props: &NavigateProps) -> Html {
    html! {
        <>
            <Hero on_navigate={props.on_navigate.clone()} />

            <RevealSection class={classes!("home-block")}>
                <SectionHeader subtitle="Technology Stacks" title="Hyper-Performant Digital Infrastructure" />
                <ServicesGrid />
            </RevealSection>

            <RevealSection class={classes!("home-block")}>
                <TeamSection />
            </RevealSection>

            <RevealSection class={classes!("home-block")}>
                <div class="home-archive-header">
                    <SectionHeader subtitle="Selected Archive" title="Precision Engineering" centered={false} />
                    <button class="archive-link" onclick={navigate_to(&props.on_navigate, PageId::Portfolio)}>
                        {"Access Full Archive "}{ Icon::ArrowRight.render(24) }
                    </button>
                </div>
                <PortfolioGrid />
            </RevealSection>

            <Marquee />

            <RevealSection class={classes!("home-block")}>
                <SectionHeader subtitle="Operational Logic" title="The Development Cycle" />
                <ProcessSteps />
            </RevealSection>

            <RevealSection class={classes!("home-block")}>
                <div class="home-cta">
                    <div class="home-cta-ring" aria-hidden="true"></div>
                    <h2>{"INITIATE"}<br />{"PROTOCOL."}</h2>
                    <p>{"Deploy your next digital asset with the world's most precise software engineers."}</p>
                    <button class="home-cta-button" onclick={navigate_to(&props.on_navigate, PageId::Contact)}>
                        {"Start Deployment"}
                    </button>
                </div>
            </RevealSection>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_words_cycle_in_order() {
        let mut index = 0;
        let mut seen = vec![HERO_WORDS[index]];
        for _ in 0..HERO_WORDS.len() {
            index = next_word(index, HERO_WORDS.len());
            seen.push(HERO_WORDS[index]);
        }
        assert_eq!(
            seen,
            vec!["Websites", "POS Systems", "Mobile Apps", "AI Automation", "Websites"]
        );
    }

    #[test]
    fn empty_word_list_stays_put() {
        assert_eq!(next_word(3, 0), 0);
    }
}
