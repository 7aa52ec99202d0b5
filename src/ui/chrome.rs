//! Page chrome state: navigation menu, active tab, lightbox, theme.
//!
//! One value owns what used to be scattered flags toggled through DOM
//! classes; every transition is a pure function of the previous state.

use crate::prefs::Theme;

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Fleet,
    Booking,
}

impl NavTab {
    /// Tab that reads as active for a request path.
    pub fn for_path(path: &str) -> NavTab {
        if path.starts_with("/book") {
            NavTab::Booking
        } else if path.starts_with("/fleet") {
            NavTab::Fleet
        } else {
            NavTab::Home
        }
    }
}

/// Everything the shared page chrome renders from
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeState {
    pub menu_open: bool,
    pub active_tab: NavTab,
    /// Image shown in the lightbox overlay, if any
    pub lightbox: Option<String>,
    pub theme: Theme,
}

impl ChromeState {
    pub fn new(theme: Theme, active_tab: NavTab) -> Self {
        Self {
            menu_open: false,
            active_tab,
            lightbox: None,
            theme,
        }
    }
}

/// Chrome interaction events
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeEvent {
    MenuToggled,
    /// Following a nav link also closes the mobile menu
    NavLinkFollowed(NavTab),
    LightboxOpened(String),
    LightboxClosed,
    ThemeToggled,
}

/// Pure chrome transition.
pub fn apply(state: ChromeState, event: ChromeEvent) -> ChromeState {
    match event {
        ChromeEvent::MenuToggled => ChromeState {
            menu_open: !state.menu_open,
            ..state
        },
        ChromeEvent::NavLinkFollowed(tab) => ChromeState {
            menu_open: false,
            active_tab: tab,
            ..state
        },
        ChromeEvent::LightboxOpened(src) => ChromeState {
            lightbox: Some(src),
            ..state
        },
        ChromeEvent::LightboxClosed => ChromeState {
            lightbox: None,
            ..state
        },
        ChromeEvent::ThemeToggled => ChromeState {
            theme: state.theme.flipped(),
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> ChromeState {
        ChromeState::new(Theme::Dark, NavTab::Home)
    }

    #[test]
    fn test_tab_for_path() {
        assert_eq!(NavTab::for_path("/"), NavTab::Home);
        assert_eq!(NavTab::for_path("/fleet"), NavTab::Fleet);
        assert_eq!(NavTab::for_path("/book/apex-gt"), NavTab::Booking);
        assert_eq!(NavTab::for_path("/anything-else"), NavTab::Home);
    }

    #[test]
    fn test_menu_toggle_flips() {
        let open = apply(initial(), ChromeEvent::MenuToggled);
        assert!(open.menu_open);
        let closed = apply(open, ChromeEvent::MenuToggled);
        assert!(!closed.menu_open);
    }

    #[test]
    fn test_following_a_link_closes_the_menu() {
        let open = apply(initial(), ChromeEvent::MenuToggled);
        let after = apply(open, ChromeEvent::NavLinkFollowed(NavTab::Fleet));
        assert!(!after.menu_open);
        assert_eq!(after.active_tab, NavTab::Fleet);
    }

    #[test]
    fn test_lightbox_open_close() {
        let open = apply(
            initial(),
            ChromeEvent::LightboxOpened("apex-gt.jpg".to_string()),
        );
        assert_eq!(open.lightbox.as_deref(), Some("apex-gt.jpg"));
        let closed = apply(open, ChromeEvent::LightboxClosed);
        assert_eq!(closed.lightbox, None);
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        let light = apply(initial(), ChromeEvent::ThemeToggled);
        assert_eq!(light.theme, Theme::Light);
        let dark = apply(light, ChromeEvent::ThemeToggled);
        assert_eq!(dark.theme, Theme::Dark);
    }

    #[test]
    fn test_transitions_leave_unrelated_state_alone() {
        let open = apply(initial(), ChromeEvent::MenuToggled);
        let after = apply(open, ChromeEvent::ThemeToggled);
        assert!(after.menu_open);
        assert_eq!(after.active_tab, NavTab::Home);
    }
}
