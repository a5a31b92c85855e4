//! Page enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::NavigationError;

/// One of the four mutually exclusive screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Greeting with the "open now" / "open later" choice.
    #[default]
    Welcome,
    /// Gift tiles.
    Gifts,
    /// Shown when the user keeps the surprise for later.
    Surprise,
    /// Reached once every gift is opened.
    Complete,
}

impl Page {
    /// Every page, in display order.
    pub const ALL: [Self; 4] = [Self::Welcome, Self::Gifts, Self::Surprise, Self::Complete];

    /// Returns the lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Gifts => "gifts",
            Self::Surprise => "surprise",
            Self::Complete => "complete",
        }
    }

    /// Returns the label used by the footer page indicator.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Welcome => "WELCOME",
            Self::Gifts => "GIFTS",
            Self::Surprise => "SURPRISE",
            Self::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| NavigationError::unknown_page(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_pages() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
        assert_eq!(" Gifts ".parse::<Page>().unwrap(), Page::Gifts);
    }

    #[test]
    fn test_parse_unknown_page() {
        let err = "settings".parse::<Page>().unwrap_err();
        assert!(matches!(err, NavigationError::UnknownPage { ref name } if name == "settings"));
    }

    #[test]
    fn test_default_is_welcome() {
        assert_eq!(Page::default(), Page::Welcome);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Page::Complete).unwrap(), "\"complete\"");
    }
}
