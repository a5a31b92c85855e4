//! Screen regions that react to the pointer.

use ratatui::layout::{Position, Rect};

use crate::application::Control;
use crate::domain::entities::GiftId;

/// What a click on a region activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A navigation control.
    Control(Control),
    /// A gift tile.
    Gift(GiftId),
    /// An overlay drawn above the page; absorbs clicks meant for what it hides.
    Overlay,
}

/// Clickable regions recorded while rendering the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Records `target` at `area`. Later regions sit on top of earlier ones.
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.area() > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the cell at `column`, `row`.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    /// Gift tile under the cell at `column`, `row`.
    #[must_use]
    pub fn gift_at(&self, column: u16, row: u16) -> Option<GiftId> {
        match self.target_at(column, row) {
            Some(HitTarget::Gift(id)) => Some(id),
            _ => None,
        }
    }

    /// Area recorded for `target`, if it was drawn.
    #[must_use]
    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
