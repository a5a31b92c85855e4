//! Exclusive page navigation.

use tracing::debug;

use crate::domain::entities::Page;
use crate::domain::errors::NavigationError;

/// Tracks which page is visible. Exactly one page is active at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    /// Creates a navigator on the welcome page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active page.
    #[must_use]
    pub const fn current(&self) -> Page {
        self.current
    }

    /// Returns whether `page` is the active one.
    #[must_use]
    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    /// Activates `target`, deactivating every other page.
    ///
    /// Returns `false` when `target` was already active.
    pub fn show_page(&mut self, target: Page) -> bool {
        if self.current == target {
            return false;
        }
        debug!(from = %self.current, to = %target, "Showing page");
        self.current = target;
        true
    }

    /// Activates the page named `name`.
    ///
    /// # Errors
    /// Returns `NavigationError::UnknownPage` for names outside the page set.
    /// The active page is left unchanged in that case.
    pub fn show_named(&mut self, name: &str) -> Result<Page, NavigationError> {
        let page = name.parse::<Page>().inspect_err(|e| {
            debug!(error = %e, current = %self.current, "Ignoring navigation request");
        })?;
        self.show_page(page);
        Ok(page)
    }

    /// Every page paired with its activation state.
    pub fn regions(&self) -> impl Iterator<Item = (Page, bool)> + '_ {
        Page::ALL.into_iter().map(|page| (page, page == self.current))
    }
}
