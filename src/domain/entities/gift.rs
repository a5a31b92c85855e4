//! Gift entities and the per-run gift catalog.

use serde::{Deserialize, Serialize};

use crate::domain::errors::GiftError;

/// 1-based gift identifier, matching the digit-key shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GiftId(u8);

impl GiftId {
    /// Creates an id; zero is not a valid gift id.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based position in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for GiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single gift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gift {
    id: GiftId,
    title: String,
    message: String,
}

impl Gift {
    /// Creates a gift.
    #[must_use]
    pub fn new(id: GiftId, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Returns the gift id.
    #[must_use]
    pub const fn id(&self) -> GiftId {
        self.id
    }

    /// Returns the title shown on the closed tile.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message revealed once opened.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ordered, fixed set of gifts for a run. Ids are assigned `1..=N` in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftCatalog {
    gifts: Vec<Gift>,
}

impl GiftCatalog {
    /// Largest catalog addressable with a single digit key.
    pub const MAX_GIFTS: usize = 9;

    /// Builds a catalog from `(title, message)` pairs.
    ///
    /// # Errors
    /// Returns `GiftError` if there are no gifts or more than [`Self::MAX_GIFTS`].
    pub fn new<I, T, M>(entries: I) -> Result<Self, GiftError>
    where
        I: IntoIterator<Item = (T, M)>,
        T: Into<String>,
        M: Into<String>,
    {
        let entries: Vec<(T, M)> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(GiftError::Empty);
        }
        if entries.len() > Self::MAX_GIFTS {
            return Err(GiftError::TooMany {
                count: entries.len(),
                max: Self::MAX_GIFTS,
            });
        }

        let gifts = (1u8..)
            .zip(entries)
            .filter_map(|(n, (title, message))| GiftId::new(n).map(|id| Gift::new(id, title, message)))
            .collect();

        Ok(Self { gifts })
    }

    /// Number of gifts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    /// Always false; a catalog holds at least one gift.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }

    /// Looks up a gift by id.
    #[must_use]
    pub fn get(&self, id: GiftId) -> Option<&Gift> {
        self.gifts.get(id.index())
    }

    /// Iterates gifts in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Gift> {
        self.gifts.iter()
    }
}

impl Default for GiftCatalog {
    fn default() -> Self {
        let gifts = (1u8..)
            .zip(DEFAULT_GIFTS)
            .filter_map(|(n, (title, message))| GiftId::new(n).map(|id| Gift::new(id, *title, *message)))
            .collect();
        Self { gifts }
    }
}

impl<'a> IntoIterator for &'a GiftCatalog {
    type Item = &'a Gift;
    type IntoIter = std::slice::Iter<'a, Gift>;

    fn into_iter(self) -> Self::IntoIter {
        self.gifts.iter()
    }
}

/// Gifts used when the config does not list any.
pub const DEFAULT_GIFTS: &[(&str, &str)] = &[
    (
        "Warm Wishes",
        "May your days be merry and bright, and your nights full of quiet snow.",
    ),
    (
        "A Cup of Cocoa",
        "Redeemable any evening for cocoa, marshmallows and a long chat.",
    ),
    (
        "Starlight",
        "The first star you see tonight is yours. Make a wish on it.",
    ),
    (
        "Next Year",
        "Here's to twelve new months of adventures together.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_id_rejects_zero() {
        assert!(GiftId::new(0).is_none());
        assert_eq!(GiftId::new(3).map(GiftId::index), Some(2));
    }

    #[test]
    fn test_catalog_assigns_sequential_ids() {
        let catalog = GiftCatalog::new([("a", "1"), ("b", "2"), ("c", "3")]).unwrap();
        let ids: Vec<u8> = catalog.iter().map(|g| g.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.get(GiftId::new(2).unwrap()).unwrap().title(), "b");
        assert!(catalog.get(GiftId::new(4).unwrap()).is_none());
    }

    #[test]
    fn test_catalog_rejects_empty() {
        let entries: Vec<(String, String)> = Vec::new();
        assert!(matches!(GiftCatalog::new(entries), Err(GiftError::Empty)));
    }

    #[test]
    fn test_catalog_rejects_more_than_digit_keys() {
        let entries = vec![("t", "m"); 10];
        assert!(matches!(
            GiftCatalog::new(entries),
            Err(GiftError::TooMany { count: 10, max: 9 })
        ));
    }

    #[test]
    fn test_default_catalog_has_four_gifts() {
        let catalog = GiftCatalog::default();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(GiftId::new(4).unwrap()).unwrap().title(), "Next Year");
    }
}
