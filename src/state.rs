use std::rc::Rc;

use yew::Reducible;

use crate::content::MemberId;
use crate::page::PageId;

/// Site-wide UI state owned by the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteState {
    pub page: PageId,
    pub mobile_menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteAction {
    Navigate(PageId),
    ToggleMobileMenu,
    CloseMobileMenu,
}

impl SiteState {
    pub fn apply(&self, action: SiteAction) -> SiteState {
        match action {
            // Any page may follow any page. Navigating always closes the overlay.
            SiteAction::Navigate(page) => SiteState {
                page,
                mobile_menu_open: false,
            },
            SiteAction::ToggleMobileMenu => SiteState {
                mobile_menu_open: !self.mobile_menu_open,
                ..self.clone()
            },
            SiteAction::CloseMobileMenu => SiteState {
                mobile_menu_open: false,
                ..self.clone()
            },
        }
    }
}

/// Keyboard shortcuts handled at the root. Only Escape does anything.
pub fn action_for_key(key: &str) -> Option<SiteAction> {
    match key {
        "Escape" | "Esc" => Some(SiteAction::CloseMobileMenu),
        _ => None,
    }
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            log::debug!("{:?} left state unchanged", action);
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Tap-to-reveal state for the team roster: at most one open card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeamDisclosure {
    expanded: Option<MemberId>,
}

impl TeamDisclosure {
    pub fn toggle(self, id: MemberId) -> TeamDisclosure {
        let expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
        TeamDisclosure { expanded }
    }

    pub fn expanded(&self) -> Option<MemberId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: MemberId) -> bool {
        self.expanded == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TEAM;

    #[test]
    fn navigation_reaches_every_page() {
        for page in PageId::ALL {
            let state = SiteState::default().apply(SiteAction::Navigate(page));
            assert_eq!(state.page, page);
        }
    }

    #[test]
    fn navigating_to_current_page_is_a_no_op() {
        let state = SiteState::default().apply(SiteAction::Navigate(PageId::Pricing));
        let again = state.apply(SiteAction::Navigate(PageId::Pricing));
        assert_eq!(state, again);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(SiteState::default());
        let next = state.clone().reduce(SiteAction::Navigate(PageId::Home));
        assert!(Rc::ptr_eq(&state, &next));

        let moved = state.clone().reduce(SiteAction::Navigate(PageId::Team));
        assert!(!Rc::ptr_eq(&state, &moved));
        assert_eq!(moved.page, PageId::Team);
    }

    #[test]
    fn contact_link_closes_open_menu() {
        let state = SiteState::default();
        assert_eq!(state.page, PageId::Home);

        let state = state.apply(SiteAction::ToggleMobileMenu);
        assert!(state.mobile_menu_open);

        let state = state.apply(SiteAction::Navigate(PageId::Contact));
        assert_eq!(state.page, PageId::Contact);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn menu_toggle_flips_and_close_is_idempotent() {
        let state = SiteState::default().apply(SiteAction::ToggleMobileMenu);
        assert!(state.mobile_menu_open);
        let state = state.apply(SiteAction::ToggleMobileMenu);
        assert!(!state.mobile_menu_open);
        let state = state.apply(SiteAction::CloseMobileMenu);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn escape_closes_menu_and_other_keys_do_nothing() {
        assert_eq!(action_for_key("Escape"), Some(SiteAction::CloseMobileMenu));
        assert_eq!(action_for_key("Enter"), None);
        assert_eq!(action_for_key("e"), None);

        let open = SiteState::default().apply(SiteAction::ToggleMobileMenu);
        let closed = action_for_key("Escape").map(|action| open.apply(action));
        assert_eq!(closed.map(|state| state.mobile_menu_open), Some(false));
    }

    #[test]
    fn escape_with_menu_closed_keeps_same_rc() {
        let state = Rc::new(SiteState::default());
        let next = state.clone().reduce(SiteAction::CloseMobileMenu);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn last_navigation_wins() {
        let state = SiteState::default()
            .apply(SiteAction::Navigate(PageId::About))
            .apply(SiteAction::Navigate(PageId::Portfolio));
        assert_eq!(state.page, PageId::Portfolio);
    }

    #[test]
    fn opening_another_member_collapses_the_first() {
        let a = TEAM[0].id;
        let b = TEAM[1].id;

        let disclosure = TeamDisclosure::default().toggle(a).toggle(b);
        assert!(disclosure.is_expanded(b));
        assert!(!disclosure.is_expanded(a));
        assert_eq!(disclosure.expanded(), Some(b));
    }

    #[test]
    fn tapping_twice_collapses() {
        let a = TEAM[2].id;
        let disclosure = TeamDisclosure::default().toggle(a).toggle(a);
        assert_eq!(disclosure.expanded(), None);
    }
}
