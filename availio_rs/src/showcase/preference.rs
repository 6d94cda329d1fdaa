use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which showcase panel is emphasized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Gym owner panel
    #[default]
    Left,
    /// Gym member panel
    Right,
}

impl Side {
    /// Persisted representation (`"left"` / `"right"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// The other panel.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is neither `"left"` nor `"right"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid showcase side: {0:?}")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}

/// What caused the last transition. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionSource {
    /// Hover or click on a panel
    User,
    /// Alternation timer, or the initial state
    Automatic,
}

/// Current emphasis plus how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcasePreference {
    /// Emphasized panel
    pub side: Side,
    /// Provenance of the last transition
    pub source: TransitionSource,
}

impl Default for ShowcasePreference {
    fn default() -> Self {
        Self {
            side: Side::Left,
            source: TransitionSource::Automatic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parses_persisted_values() {
        assert_eq!("left".parse::<Side>(), Ok(Side::Left));
        assert_eq!("right".parse::<Side>(), Ok(Side::Right));
        assert!("Left".parse::<Side>().is_err());
        assert!("".parse::<Side>().is_err());
    }

    #[test]
    fn side_opposite_is_involution() {
        for side in [Side::Left, Side::Right] {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn side_display_matches_storage_form() {
        assert_eq!(Side::Right.to_string(), "right");
        assert_eq!(serde_json::to_string(&Side::Left).unwrap(), "\"left\"");
    }
}
