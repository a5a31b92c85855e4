//! Session state and input dispatch.

use tracing::{debug, trace};

use crate::application::dto::{InputEvent, StateSnapshot};
use crate::application::services::{GiftTracker, Navigator, OpenOutcome};
use crate::application::transitions::{self, Guard, SideEffect, Transition};
use crate::domain::entities::{GiftId, Page};
use crate::domain::keybinding::Action;

/// What a dispatched input changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The active page changed (or was re-shown after a reset).
    Navigated {
        /// Page before the transition.
        from: Page,
        /// Page after the transition.
        to: Page,
        /// Whether the gifts were reset on the way.
        reset: bool,
    },
    /// A gift opened.
    GiftOpened(GiftId),
    /// The last gift of the round opened.
    AllGiftsOpened(GiftId),
    /// Hover lift moved.
    HoverChanged,
    /// Nothing changed.
    Ignored,
}

impl DispatchOutcome {
    /// Returns whether session state changed.
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Owns the navigator and the gift tracker. All input goes through
/// [`Session::dispatch`].
#[derive(Debug, Clone)]
pub struct Session {
    navigator: Navigator,
    tracker: GiftTracker,
}

impl Session {
    /// Creates a session on the welcome page with `gift_count` closed gifts.
    #[must_use]
    pub fn new(gift_count: usize) -> Self {
        Self {
            navigator: Navigator::new(),
            tracker: GiftTracker::new(gift_count),
        }
    }

    /// Returns the navigator.
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Returns the gift tracker.
    #[must_use]
    pub const fn tracker(&self) -> &GiftTracker {
        &self.tracker
    }

    /// Returns the active page.
    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.navigator.current()
    }

    /// Applies one input event.
    pub fn dispatch(&mut self, input: InputEvent) -> DispatchOutcome {
        let page = self.current_page();
        let outcome = match input {
            InputEvent::Click(control) => transitions::for_control(control, page)
                .map_or(DispatchOutcome::Ignored, |t| self.apply(t)),
            InputEvent::Key(action) => self.handle_action(action, page),
            InputEvent::ClickGift(id) if page == Page::Gifts => self.open(id),
            InputEvent::Digit(n) if page == Page::Gifts => {
                GiftId::new(n).map_or(DispatchOutcome::Ignored, |id| self.open(id))
            }
            InputEvent::PointerEnter(id) if page == Page::Gifts => {
                Self::hover(self.tracker.hover_enter(id))
            }
            InputEvent::PointerLeave(id) => Self::hover(self.tracker.hover_leave(id)),
            InputEvent::ClickGift(_) | InputEvent::Digit(_) | InputEvent::PointerEnter(_) => {
                DispatchOutcome::Ignored
            }
        };

        if outcome.changed() {
            trace!(?input, ?outcome, snapshot = ?self.snapshot(), "Dispatched");
        } else {
            debug!(?input, %page, "Input ignored");
        }
        outcome
    }

    /// Read-only view of the session for the debug surface.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            current_page: self.current_page(),
            opened_gifts: self.tracker.opened_ids().map(GiftId::get).collect(),
            all_gifts_opened: self.tracker.all_opened(),
            proceed_visible: self.tracker.proceed_visible(),
            total_gifts: self.tracker.total(),
        }
    }

    fn handle_action(&mut self, action: Action, page: Page) -> DispatchOutcome {
        transitions::for_action(action, page).map_or(DispatchOutcome::Ignored, |t| self.apply(t))
    }

    fn apply(&mut self, transition: &Transition) -> DispatchOutcome {
        let allowed = match transition.guard {
            Guard::None => true,
            Guard::AllGiftsOpened => self.tracker.proceed_visible(),
        };
        if !allowed {
            return DispatchOutcome::Ignored;
        }

        let reset = match transition.effect {
            SideEffect::None => false,
            SideEffect::ResetGifts => {
                self.tracker.reset_gifts();
                true
            }
        };

        let from = self.navigator.current();
        self.navigator.show_page(transition.to);
        DispatchOutcome::Navigated {
            from,
            to: transition.to,
            reset,
        }
    }

    fn open(&mut self, id: GiftId) -> DispatchOutcome {
        match self.tracker.open_gift(id) {
            OpenOutcome::Opened => DispatchOutcome::GiftOpened(id),
            OpenOutcome::AllOpened => DispatchOutcome::AllGiftsOpened(id),
            OpenOutcome::AlreadyOpened | OpenOutcome::UnknownGift => DispatchOutcome::Ignored,
        }
    }

    const fn hover(changed: bool) -> DispatchOutcome {
        if changed {
            DispatchOutcome::HoverChanged
        } else {
            DispatchOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::Control;

    fn gift(n: u8) -> GiftId {
        GiftId::new(n).unwrap()
    }

    fn session_on_gifts() -> Session {
        let mut session = Session::new(4);
        session.dispatch(InputEvent::Click(Control::OpenNow));
        session
    }

    fn open_all(session: &mut Session) {
        for n in 1..=4 {
            session.dispatch(InputEvent::ClickGift(gift(n)));
        }
    }

    #[test]
    fn test_full_round_reaches_complete() {
        let mut session = Session::new(4);
        assert_eq!(session.current_page(), Page::Welcome);

        session.dispatch(InputEvent::Click(Control::OpenNow));
        assert_eq!(session.current_page(), Page::Gifts);
        assert!(session.snapshot().opened_gifts.is_empty());

        for n in 1..=3 {
            assert_eq!(
                session.dispatch(InputEvent::ClickGift(gift(n))),
                DispatchOutcome::GiftOpened(gift(n))
            );
        }
        assert!(!session.tracker().all_opened());
        assert!(!session.tracker().proceed_visible());

        assert_eq!(
            session.dispatch(InputEvent::ClickGift(gift(4))),
            DispatchOutcome::AllGiftsOpened(gift(4))
        );
        let snapshot = session.snapshot();
        assert_eq!(snapshot.opened_gifts, vec![1, 2, 3, 4]);
        assert!(snapshot.all_gifts_opened);
        assert!(snapshot.proceed_visible);

        session.dispatch(InputEvent::Click(Control::ProceedToComplete));
        assert_eq!(session.current_page(), Page::Complete);
    }

    #[test]
    fn test_proceed_is_inert_until_all_opened() {
        let mut session = session_on_gifts();
        session.dispatch(InputEvent::ClickGift(gift(1)));

        assert_eq!(
            session.dispatch(InputEvent::Click(Control::ProceedToComplete)),
            DispatchOutcome::Ignored
        );
        assert_eq!(
            session.dispatch(InputEvent::Key(Action::Proceed)),
            DispatchOutcome::Ignored
        );
        assert_eq!(session.current_page(), Page::Gifts);
    }

    #[test]
    fn test_escape_from_complete_resets_and_goes_home() {
        let mut session = session_on_gifts();
        open_all(&mut session);
        session.dispatch(InputEvent::Click(Control::ProceedToComplete));

        let outcome = session.dispatch(InputEvent::Key(Action::GoHome));

        assert_eq!(
            outcome,
            DispatchOutcome::Navigated {
                from: Page::Complete,
                to: Page::Welcome,
                reset: true
            }
        );
        let snapshot = session.snapshot();
        assert!(snapshot.opened_gifts.is_empty());
        assert!(!snapshot.all_gifts_opened);
        assert!(!snapshot.proceed_visible);
        assert!((1..=4).all(|n| !session.tracker().is_opened(gift(n))));
    }

    #[test]
    fn test_back_from_complete_resets() {
        let mut session = session_on_gifts();
        open_all(&mut session);
        session.dispatch(InputEvent::Click(Control::ProceedToComplete));

        session.dispatch(InputEvent::Click(Control::BackFromComplete));

        assert_eq!(session.current_page(), Page::Welcome);
        assert_eq!(session.tracker().opened_count(), 0);
    }

    #[test]
    fn test_escape_from_gifts_keeps_progress() {
        let mut session = session_on_gifts();
        session.dispatch(InputEvent::ClickGift(gift(2)));

        session.dispatch(InputEvent::Key(Action::GoHome));
        assert_eq!(session.current_page(), Page::Welcome);
        assert!(session.tracker().is_opened(gift(2)));

        session.dispatch(InputEvent::Click(Control::OpenNow));
        assert!(session.tracker().is_opened(gift(2)));
    }

    #[test]
    fn test_escape_on_welcome_is_inert() {
        let mut session = Session::new(4);
        assert_eq!(
            session.dispatch(InputEvent::Key(Action::GoHome)),
            DispatchOutcome::Ignored
        );
        assert_eq!(session.current_page(), Page::Welcome);
    }

    #[test]
    fn test_escape_from_surprise() {
        let mut session = Session::new(4);
        session.dispatch(InputEvent::Click(Control::OpenLater));
        assert_eq!(session.current_page(), Page::Surprise);

        session.dispatch(InputEvent::Key(Action::GoHome));
        assert_eq!(session.current_page(), Page::Welcome);
    }

    #[test]
    fn test_digit_opens_gift_on_gifts_page() {
        let mut session = session_on_gifts();
        assert_eq!(
            session.dispatch(InputEvent::Digit(3)),
            DispatchOutcome::GiftOpened(gift(3))
        );
        assert!(session.tracker().is_opened(gift(3)));
    }

    #[test]
    fn test_digit_without_matching_gift_is_ignored() {
        let mut session = session_on_gifts();
        let before = session.snapshot();

        assert_eq!(session.dispatch(InputEvent::Digit(5)), DispatchOutcome::Ignored);
        assert_eq!(session.dispatch(InputEvent::Digit(0)), DispatchOutcome::Ignored);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_digit_outside_gifts_page_is_ignored() {
        let mut session = Session::new(4);
        assert_eq!(session.dispatch(InputEvent::Digit(1)), DispatchOutcome::Ignored);
        assert_eq!(session.tracker().opened_count(), 0);
    }

    #[test]
    fn test_clicking_opened_gift_is_inert() {
        let mut session = session_on_gifts();
        session.dispatch(InputEvent::ClickGift(gift(1)));
        let before = session.snapshot();

        assert_eq!(
            session.dispatch(InputEvent::ClickGift(gift(1))),
            DispatchOutcome::Ignored
        );
        assert_eq!(session.snapshot(), before);
        assert!(session.tracker().is_opened(gift(1)));
    }

    #[test]
    fn test_controls_of_other_pages_are_inert() {
        let mut session = Session::new(4);
        assert_eq!(
            session.dispatch(InputEvent::Click(Control::BackFromComplete)),
            DispatchOutcome::Ignored
        );
        assert_eq!(
            session.dispatch(InputEvent::ClickGift(gift(1))),
            DispatchOutcome::Ignored
        );
        assert_eq!(session.current_page(), Page::Welcome);
    }

    #[test]
    fn test_hover_lift_on_gifts_page() {
        let mut session = session_on_gifts();
        assert_eq!(
            session.dispatch(InputEvent::PointerEnter(gift(2))),
            DispatchOutcome::HoverChanged
        );
        assert_eq!(session.tracker().lifted(), Some(gift(2)));

        session.dispatch(InputEvent::ClickGift(gift(2)));
        assert_eq!(session.tracker().lifted(), None);
        assert_eq!(
            session.dispatch(InputEvent::PointerEnter(gift(2))),
            DispatchOutcome::Ignored
        );
    }

    #[test]
    fn test_all_opened_matches_set_size_in_every_state() {
        let mut session = Session::new(4);
        let inputs = [
            InputEvent::Click(Control::OpenNow),
            InputEvent::Digit(1),
            InputEvent::Key(Action::GoHome),
            InputEvent::Click(Control::OpenNow),
            InputEvent::Digit(2),
            InputEvent::ClickGift(gift(2)),
            InputEvent::Digit(3),
            InputEvent::Digit(4),
            InputEvent::Key(Action::Proceed),
            InputEvent::Key(Action::GoHome),
            InputEvent::Click(Control::OpenNow),
            InputEvent::Digit(4),
        ];

        for input in inputs {
            session.dispatch(input);
            let snapshot = session.snapshot();
            assert_eq!(
                snapshot.all_gifts_opened,
                snapshot.opened_gifts.len() == snapshot.total_gifts
            );
            assert_eq!(session.navigator().regions().filter(|(_, a)| *a).count(), 1);
        }
    }

    #[test]
    fn test_snapshot_json() {
        let mut session = session_on_gifts();
        session.dispatch(InputEvent::Digit(2));
        let json = session.snapshot().to_json_pretty();
        assert!(json.contains("\"current_page\": \"gifts\""));
        assert!(json.contains("\"all_gifts_opened\": false"));
    }
}
