//! Gift opening progress for the current round.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::domain::entities::GiftId;

/// Result of [`GiftTracker::open_gift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The gift was opened; others remain closed.
    Opened,
    /// The gift was opened and it was the last one of the round.
    AllOpened,
    /// The gift was already open. Nothing changed.
    AlreadyOpened,
    /// No gift with this id exists. Nothing changed.
    UnknownGift,
}

impl OpenOutcome {
    /// Returns whether the call changed tracker state.
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Opened | Self::AllOpened)
    }
}

/// Tracks which gifts are open and whether the completion page is unlocked.
///
/// The opened set is the single source of truth for a tile's opened look.
#[derive(Debug, Clone)]
pub struct GiftTracker {
    total: usize,
    opened: BTreeSet<GiftId>,
    all_opened: bool,
    proceed_visible: bool,
    lifted: Option<GiftId>,
}

impl GiftTracker {
    /// Creates a tracker for gifts `1..=total`.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            opened: BTreeSet::new(),
            all_opened: false,
            proceed_visible: false,
            lifted: None,
        }
    }

    /// Number of gifts in a round.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns whether `id` names a gift of this round.
    #[must_use]
    pub fn contains(&self, id: GiftId) -> bool {
        usize::from(id.get()) <= self.total
    }

    /// Returns whether `id` is open.
    #[must_use]
    pub fn is_opened(&self, id: GiftId) -> bool {
        self.opened.contains(&id)
    }

    /// Number of open gifts.
    #[must_use]
    pub fn opened_count(&self) -> usize {
        self.opened.len()
    }

    /// Open gift ids in ascending order.
    pub fn opened_ids(&self) -> impl Iterator<Item = GiftId> + '_ {
        self.opened.iter().copied()
    }

    /// True once every gift of the round is open.
    #[must_use]
    pub const fn all_opened(&self) -> bool {
        self.all_opened
    }

    /// Whether the "proceed to completion" control is shown.
    #[must_use]
    pub const fn proceed_visible(&self) -> bool {
        self.proceed_visible
    }

    /// The tile currently lifted by pointer hover, if any.
    #[must_use]
    pub const fn lifted(&self) -> Option<GiftId> {
        self.lifted
    }

    /// Opens `id`, clearing its hover lift.
    pub fn open_gift(&mut self, id: GiftId) -> OpenOutcome {
        if !self.contains(id) {
            debug!(gift = %id, total = self.total, "Ignoring unknown gift");
            return OpenOutcome::UnknownGift;
        }
        if !self.opened.insert(id) {
            return OpenOutcome::AlreadyOpened;
        }

        if self.lifted == Some(id) {
            self.lifted = None;
        }

        let was_all_opened = self.all_opened;
        self.all_opened = self.opened.len() == self.total;
        debug!(gift = %id, opened = self.opened.len(), total = self.total, "Gift opened");

        if self.all_opened && !was_all_opened {
            self.proceed_visible = true;
            info!(total = self.total, "All gifts opened");
            return OpenOutcome::AllOpened;
        }
        OpenOutcome::Opened
    }

    /// Closes every gift and starts a new round.
    pub fn reset_gifts(&mut self) {
        debug!(opened = self.opened.len(), "Resetting gifts");
        self.opened.clear();
        self.all_opened = false;
        self.proceed_visible = false;
        self.lifted = None;
    }

    /// Lifts an unopened tile under the pointer.
    ///
    /// Returns whether the lift changed.
    pub fn hover_enter(&mut self, id: GiftId) -> bool {
        if !self.contains(id) || self.is_opened(id) || self.lifted == Some(id) {
            return false;
        }
        self.lifted = Some(id);
        true
    }

    /// Drops the lift when the pointer leaves `id`.
    ///
    /// Returns whether the lift changed.
    pub fn hover_leave(&mut self, id: GiftId) -> bool {
        if self.lifted == Some(id) {
            self.lifted = None;
            true
        } else {
            false
        }
    }
}
