//! Catalogue nav search toggle.
//!
//! A two-state machine: the nav menu is visible initially; clicking the
//! catalogue link swaps it for the search form (and focuses the input), and
//! blurring the input swaps back. The machine drives a [`Surfaces`]
//! abstraction rather than concrete UI nodes, so the transition logic is
//! testable without a rendered page; the page runtime supplies a DOM-backed
//! implementation.
//!
//! Both handlers are bound once at setup. Re-registering the blur handler on
//! every click (as the original page script did) would stack listeners
//! across click/blur cycles and break the visibility invariant.

use thiserror::Error;

/// Setup failure: the page markup does not provide a required node.
///
/// This is a violated markup contract, not a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("nav toggle target not found: `{selector}`")]
    MissingTarget { selector: String },
}

/// Toggle state. Exactly one of the two surfaces is visible in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Nav menu shown, search form hidden. Initial state.
    MenuVisible,
    /// Search form shown and focused, nav menu hidden.
    SearchVisible,
}

/// Minimal capability the toggle needs from the page: two surfaces with a
/// visibility switch, and a focusable search field.
pub trait Surfaces {
    fn set_menu_hidden(&mut self, hidden: bool);
    fn set_search_hidden(&mut self, hidden: bool);
    fn focus_search(&mut self);
}

/// The nav toggle state machine.
#[derive(Debug)]
pub struct NavToggle {
    state: NavState,
}

impl Default for NavToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl NavToggle {
    pub fn new() -> Self {
        Self {
            state: NavState::MenuVisible,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Catalogue-link click. Returns `true`: default navigation is always
    /// suppressed, whatever the current state.
    pub fn click(&mut self, surfaces: &mut impl Surfaces) -> bool {
        if self.state == NavState::MenuVisible {
            surfaces.set_menu_hidden(true);
            surfaces.set_search_hidden(false);
            surfaces.focus_search();
            self.state = NavState::SearchVisible;
        }
        true
    }

    /// Search-input blur. A blur while the menu is already visible has no
    /// modeled effect.
    pub fn blur(&mut self, surfaces: &mut impl Surfaces) {
        if self.state == NavState::SearchVisible {
            surfaces.set_menu_hidden(false);
            surfaces.set_search_hidden(true);
            self.state = NavState::MenuVisible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surfaces double tracking visibility and focus.
    struct FakeSurfaces {
        menu_hidden: bool,
        search_hidden: bool,
        focus_count: usize,
    }

    impl FakeSurfaces {
        fn new() -> Self {
            // markup initial state: menu shown, form hidden
            Self {
                menu_hidden: false,
                search_hidden: true,
                focus_count: 0,
            }
        }

        /// Exactly one surface hidden at any time.
        fn invariant_holds(&self) -> bool {
            self.menu_hidden != self.search_hidden
        }
    }

    impl Surfaces for FakeSurfaces {
        fn set_menu_hidden(&mut self, hidden: bool) {
            self.menu_hidden = hidden;
        }
        fn set_search_hidden(&mut self, hidden: bool) {
            self.search_hidden = hidden;
        }
        fn focus_search(&mut self) {
            self.focus_count += 1;
        }
    }

    #[test]
    fn click_shows_search_and_focuses() {
        let mut toggle = NavToggle::new();
        let mut ui = FakeSurfaces::new();

        let prevented = toggle.click(&mut ui);
        assert!(prevented);
        assert_eq!(toggle.state(), NavState::SearchVisible);
        assert!(ui.menu_hidden);
        assert!(!ui.search_hidden);
        assert_eq!(ui.focus_count, 1);
    }

    #[test]
    fn blur_restores_menu() {
        let mut toggle = NavToggle::new();
        let mut ui = FakeSurfaces::new();

        toggle.click(&mut ui);
        toggle.blur(&mut ui);
        assert_eq!(toggle.state(), NavState::MenuVisible);
        assert!(!ui.menu_hidden);
        assert!(ui.search_hidden);
    }

    #[test]
    fn blur_before_click_is_inert() {
        let mut toggle = NavToggle::new();
        let mut ui = FakeSurfaces::new();

        toggle.blur(&mut ui);
        assert_eq!(toggle.state(), NavState::MenuVisible);
        assert!(!ui.menu_hidden);
        assert!(ui.search_hidden);
    }

    #[test]
    fn repeated_click_keeps_search_visible() {
        let mut toggle = NavToggle::new();
        let mut ui = FakeSurfaces::new();

        toggle.click(&mut ui);
        assert!(toggle.click(&mut ui));
        assert_eq!(toggle.state(), NavState::SearchVisible);
        assert_eq!(ui.focus_count, 1);
        assert!(ui.invariant_holds());
    }

    #[test]
    fn invariant_over_alternating_cycles() {
        let mut toggle = NavToggle::new();
        let mut ui = FakeSurfaces::new();

        for _ in 0..50 {
            toggle.click(&mut ui);
            assert!(ui.invariant_holds());
            toggle.blur(&mut ui);
            assert!(ui.invariant_holds());
        }
        assert_eq!(toggle.state(), NavState::MenuVisible);
        assert_eq!(ui.focus_count, 50);
    }
}
