//! Platform-independent visibility model behind [`super::PopupToggle`].
//!
//! Every handler is an unconditional set, never a toggle: opening an open
//! popup leaves it open, closing a closed one leaves it closed.

use std::fmt;

/// The two values the popup container's inline `display` style takes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    Block,
    #[default]
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }

    /// Interprets an inline `display` value read back from the DOM.
    ///
    /// Only `"block"` counts as visible; an empty value means the markup left
    /// it to the stylesheet, which hides the popup.
    pub fn from_css(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("block") {
            Display::Block
        } else {
            Display::None
        }
    }

    pub fn is_visible(self) -> bool {
        self == Display::Block
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Where a click that reached the window landed, relative to the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The container element itself, i.e. its backdrop.
    Container,
    /// Inner content of the container.
    Descendant,
    /// Anywhere else in the document.
    Outside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupEvent {
    TriggerClicked,
    CloseClicked,
    WindowClicked(ClickTarget),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopupState {
    display: Display,
}

impl PopupState {
    pub fn new(display: Display) -> Self {
        Self { display }
    }

    pub fn display(&self) -> Display {
        self.display
    }

    /// Applies `event` and returns the value to write to the container's
    /// `display` style, or `None` when the event leaves the style untouched.
    pub fn handle(&mut self, event: PopupEvent) -> Option<Display> {
        let next = match event {
            PopupEvent::TriggerClicked => Display::Block,
            PopupEvent::CloseClicked => Display::None,
            PopupEvent::WindowClicked(ClickTarget::Container) => Display::None,
            PopupEvent::WindowClicked(_) => return None,
        };
        self.display = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_values() {
        assert_eq!(Display::Block.as_css(), "block");
        assert_eq!(Display::None.as_css(), "none");
        assert_eq!(Display::from_css("block"), Display::Block);
        assert_eq!(Display::from_css(" BLOCK "), Display::Block);
        assert_eq!(Display::from_css("none"), Display::None);
        assert_eq!(Display::from_css(""), Display::None);
        assert_eq!(Display::Block.to_string(), "block");
    }

    #[test]
    fn test_starts_hidden() {
        assert_eq!(PopupState::default().display(), Display::None);
    }

    #[test]
    fn test_trigger_always_shows() {
        for initial in [Display::None, Display::Block] {
            let mut state = PopupState::new(initial);
            assert_eq!(state.handle(PopupEvent::TriggerClicked), Some(Display::Block));
            assert_eq!(state.handle(PopupEvent::TriggerClicked), Some(Display::Block));
            assert!(state.display().is_visible());
        }
    }

    #[test]
    fn test_close_always_hides() {
        for initial in [Display::None, Display::Block] {
            let mut state = PopupState::new(initial);
            assert_eq!(state.handle(PopupEvent::CloseClicked), Some(Display::None));
            assert_eq!(state.handle(PopupEvent::CloseClicked), Some(Display::None));
            assert!(!state.display().is_visible());
        }
    }

    #[test]
    fn test_backdrop_click_hides() {
        let mut state = PopupState::new(Display::Block);
        assert_eq!(
            state.handle(PopupEvent::WindowClicked(ClickTarget::Container)),
            Some(Display::None)
        );
        assert_eq!(state.display(), Display::None);
    }

    #[test]
    fn test_content_and_outside_clicks_are_ignored() {
        let mut state = PopupState::new(Display::Block);
        assert_eq!(
            state.handle(PopupEvent::WindowClicked(ClickTarget::Descendant)),
            None
        );
        assert_eq!(
            state.handle(PopupEvent::WindowClicked(ClickTarget::Outside)),
            None
        );
        assert_eq!(state.display(), Display::Block);
    }

    #[test]
    fn test_open_close_backdrop_scenario() {
        let mut state = PopupState::new(Display::None);
        let steps = [
            (PopupEvent::TriggerClicked, Display::Block),
            (PopupEvent::CloseClicked, Display::None),
            (PopupEvent::TriggerClicked, Display::Block),
            (PopupEvent::WindowClicked(ClickTarget::Container), Display::None),
        ];
        for (event, expected) in steps {
            state.handle(event);
            assert_eq!(state.display(), expected, "after {event:?}");
        }
    }

    #[test]
    fn test_trigger_click_also_reaching_window() {
        // A trigger click bubbles to the window too; the window handler sees
        // it as an outside click and must not undo the open.
        let mut state = PopupState::new(Display::None);
        state.handle(PopupEvent::TriggerClicked);
        state.handle(PopupEvent::WindowClicked(ClickTarget::Outside));
        assert_eq!(state.display(), Display::Block);
    }
}
