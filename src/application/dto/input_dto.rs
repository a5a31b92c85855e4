//! Input events consumed by the session.

use crate::domain::entities::{GiftId, Page};
use crate::domain::keybinding::Action;

/// Named navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// "Open now" on the welcome page.
    OpenNow,
    /// "Open later" on the welcome page.
    OpenLater,
    /// Back button on the gifts page.
    BackFromGifts,
    /// Back button on the surprise page.
    BackFromSurprise,
    /// Back button on the complete page.
    BackFromComplete,
    /// "See all gifts", shown once every gift is open.
    ProceedToComplete,
}

impl Control {
    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenNow => "Open now",
            Self::OpenLater => "Open later",
            Self::BackFromGifts | Self::BackFromSurprise | Self::BackFromComplete => "Back home",
            Self::ProceedToComplete => "See all gifts",
        }
    }

    /// Page the control lives on.
    #[must_use]
    pub const fn page(self) -> Page {
        match self {
            Self::OpenNow | Self::OpenLater => Page::Welcome,
            Self::BackFromGifts | Self::ProceedToComplete => Page::Gifts,
            Self::BackFromSurprise => Page::Surprise,
            Self::BackFromComplete => Page::Complete,
        }
    }
}

/// A user input, already resolved to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer click on a navigation control.
    Click(Control),
    /// Pointer click on a gift tile.
    ClickGift(GiftId),
    /// Pointer entered a gift tile.
    PointerEnter(GiftId),
    /// Pointer left a gift tile.
    PointerLeave(GiftId),
    /// A bound key was pressed.
    Key(Action),
    /// A digit key was pressed.
    Digit(u8),
}
