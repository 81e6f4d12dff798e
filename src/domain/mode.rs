//! Generation mode for a link creation request.

use serde::{Deserialize, Serialize};

/// The two ways the service can disguise a link.
///
/// Educational mode generates a lookalike URL plus an explanation and
/// persists nothing. Prank mode generates a slug that is stored and later
/// resolved by the redirect listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Educational,
    Prank,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Educational => "educational",
            Mode::Prank => "prank",
        }
    }

    /// Parses a wire identifier, returning `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Mode> {
        match value {
            "educational" => Some(Mode::Educational),
            "prank" => Some(Mode::Prank),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!(Mode::parse("educational"), Some(Mode::Educational));
        assert_eq!(Mode::parse("prank"), Some(Mode::Prank));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Mode::parse("Educational"), None);
        assert_eq!(Mode::parse("edu"), None);
        assert_eq!(Mode::parse(""), None);
    }

    #[test]
    fn test_round_trip() {
        for mode in [Mode::Educational, Mode::Prank] {
            assert_eq!(Mode::parse(mode.as_str()), Some(mode));
        }
    }
}
