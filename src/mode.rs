//! Width modes and their cycle.
//!
//! DESIGN
//! ======
//! `Mode` is the single source of truth for the toggle. Everything else
//! (stored preference, root attribute, button glyph and tooltip) is derived
//! from it, so the cycle and the wire names live here and nowhere else.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Document width mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Theme default width. Represented by the absence of the root attribute.
    #[default]
    Slim,
    /// Wider content column.
    Wide,
    /// Content spans the full viewport.
    Full,
}

impl Mode {
    /// All modes in cycle order.
    pub const ALL: [Mode; 3] = [Mode::Slim, Mode::Wide, Mode::Full];

    /// The mode a click moves to.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Slim => Self::Wide,
            Self::Wide => Self::Full,
            Self::Full => Self::Slim,
        }
    }

    /// Apply [`Mode::next`] `steps` times.
    #[must_use]
    pub fn advance(self, steps: usize) -> Self {
        (0..steps % Self::ALL.len()).fold(self, |mode, _| mode.next())
    }

    /// Lowercase name used in storage and in the root attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slim => "slim",
            Self::Wide => "wide",
            Self::Full => "full",
        }
    }

    /// Capitalized name used in the tooltip.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Slim => "Slim",
            Self::Wide => "Wide",
            Self::Full => "Full",
        }
    }

    /// Value for the root width attribute, or `None` when it should be removed.
    #[must_use]
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Slim => None,
            Self::Wide | Self::Full => Some(self.as_str()),
        }
    }

    /// Resolve a stored preference.
    ///
    /// Absent values mean slim. Values outside the three known names also
    /// fall back to slim, with a warning so stale or hand-edited storage is
    /// visible in the console.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match raw.parse() {
            Ok(mode) => mode,
            Err(err) => {
                log::warn!("width toggle: {err}; falling back to {}", Self::default());
                Self::default()
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored string that names no known mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized width mode {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slim" => Ok(Self::Slim),
            "wide" => Ok(Self::Wide),
            "full" => Ok(Self::Full),
            other => Err(UnknownMode(other.to_owned())),
        }
    }
}
