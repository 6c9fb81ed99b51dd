use std::fmt;

use yew::{Callback, Properties};

/// Which content block the site is showing. The session starts on `Home`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Home,
    About,
    Services,
    Team,
    Portfolio,
    Process,
    Pricing,
    Contact,
}

impl PageId {
    /// Navigation order used by the nav bar and the mobile overlay.
    pub const ALL: [PageId; 8] = [
        PageId::Home,
        PageId::About,
        PageId::Services,
        PageId::Team,
        PageId::Portfolio,
        PageId::Process,
        PageId::Pricing,
        PageId::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Services => "services",
            PageId::Team => "team",
            PageId::Portfolio => "portfolio",
            PageId::Process => "process",
            PageId::Pricing => "pricing",
            PageId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Services => "Services",
            PageId::Team => "Team",
            PageId::Portfolio => "Portfolio",
            PageId::Process => "Process",
            PageId::Pricing => "Pricing",
            PageId::Contact => "Contact",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Props for any block that can ask the root to switch pages.
#[derive(Properties, PartialEq)]
pub struct NavigateProps {
    pub on_navigate: Callback<PageId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(PageId::default(), PageId::Home);
    }

    #[test]
    fn slugs_are_distinct() {
        let mut slugs: Vec<&str> = PageId::ALL.iter().map(|page| page.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), PageId::ALL.len());
    }

    #[test]
    fn display_uses_slug() {
        assert_eq!(PageId::Portfolio.to_string(), "portfolio");
        assert_eq!(PageId::Contact.label(), "Contact");
    }
}
