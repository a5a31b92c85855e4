//! Declarative page transition table.
//!
//! Every navigation the user can trigger is one row: the control (if any)
//! and key action that fire it, the page it is valid on, an optional guard,
//! a side effect, and the target page. Anything not listed is inert.

use crate::application::dto::Control;
use crate::domain::entities::Page;
use crate::domain::keybinding::Action;

/// Condition that must hold for a transition to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Always allowed.
    None,
    /// Only once the proceed control is visible.
    AllGiftsOpened,
}

/// Work done before switching pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Navigation only.
    None,
    /// Close every gift and start a new round.
    ResetGifts,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Clickable control, `None` for key-only transitions.
    pub control: Option<Control>,
    /// Key action that fires the same transition.
    pub action: Action,
    /// Page on which the transition is valid.
    pub from: Page,
    /// Condition checked before firing.
    pub guard: Guard,
    /// Applied before navigating.
    pub effect: SideEffect,
    /// Destination page.
    pub to: Page,
}

const fn row(
    control: Option<Control>,
    action: Action,
    from: Page,
    guard: Guard,
    effect: SideEffect,
    to: Page,
) -> Transition {
    Transition {
        control,
        action,
        from,
        guard,
        effect,
        to,
    }
}

/// All transitions.
pub const TRANSITIONS: &[Transition] = &[
    row(Some(Control::OpenNow), Action::OpenNow, Page::Welcome, Guard::None, SideEffect::None, Page::Gifts),
    row(Some(Control::OpenLater), Action::OpenLater, Page::Welcome, Guard::None, SideEffect::None, Page::Surprise),
    row(Some(Control::BackFromGifts), Action::Back, Page::Gifts, Guard::None, SideEffect::None, Page::Welcome),
    row(Some(Control::BackFromSurprise), Action::Back, Page::Surprise, Guard::None, SideEffect::None, Page::Welcome),
    row(Some(Control::BackFromComplete), Action::Back, Page::Complete, Guard::None, SideEffect::ResetGifts, Page::Welcome),
    row(Some(Control::ProceedToComplete), Action::Proceed, Page::Gifts, Guard::AllGiftsOpened, SideEffect::None, Page::Complete),
    row(None, Action::GoHome, Page::Gifts, Guard::None, SideEffect::None, Page::Welcome),
    row(None, Action::GoHome, Page::Surprise, Guard::None, SideEffect::None, Page::Welcome),
    row(None, Action::GoHome, Page::Complete, Guard::None, SideEffect::ResetGifts, Page::Welcome),
];

/// Finds the transition fired by clicking `control` while on `page`.
#[must_use]
pub fn for_control(control: Control, page: Page) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.control == Some(control) && t.from == page)
}

/// Finds the transition fired by `action` while on `page`.
#[must_use]
pub fn for_action(action: Action, page: Page) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.action == action && t.from == page)
}

/// Controls rendered on `page`, in table order.
pub fn controls_on(page: Page) -> impl Iterator<Item = Control> {
    TRANSITIONS
        .iter()
        .filter(move |t| t.from == page)
        .filter_map(|t| t.control)
}
