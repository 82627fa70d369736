//! Academic term model: seasons and start terms

use serde::{Deserialize, Serialize};

/// Seasons of the three-term academic year, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Spring term (first in the cycle)
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
}

impl Season {
    /// The fixed season cycle: Spring → Summer → Fall
    pub const CYCLE: [Self; 3] = [Self::Spring, Self::Summer, Self::Fall];

    /// Position of this season within the cycle (0-based)
    #[must_use]
    pub const fn cycle_index(self) -> usize {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Fall => 2,
        }
    }

    /// Lowercase key used in start-term keys
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A calendar position a plan can start (or finish) in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartTerm {
    /// Season within the year
    pub season: Season,
    /// Calendar year
    pub year: i32,
}

impl StartTerm {
    /// Create a new start term
    #[must_use]
    pub const fn new(season: Season, year: i32) -> Self {
        Self { season, year }
    }

    /// Stable key (e.g., "spring-2026") used in config and share links
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}", self.season.key(), self.year)
    }

    /// Display label (e.g., "Spring 2026")
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.season.label(), self.year)
    }
}

impl std::fmt::Display for StartTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.season.label(), self.year)
    }
}

/// Selectable start terms. The first entry is the default and the fallback
/// for unrecognized keys.
pub const START_TERMS: [StartTerm; 6] = [
    StartTerm::new(Season::Spring, 2026),
    StartTerm::new(Season::Summer, 2026),
    StartTerm::new(Season::Fall, 2026),
    StartTerm::new(Season::Spring, 2027),
    StartTerm::new(Season::Summer, 2027),
    StartTerm::new(Season::Fall, 2027),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_cycle_order() {
        assert_eq!(Season::CYCLE[0], Season::Spring);
        assert_eq!(Season::CYCLE[1], Season::Summer);
        assert_eq!(Season::CYCLE[2], Season::Fall);
        for (idx, season) in Season::CYCLE.iter().enumerate() {
            assert_eq!(season.cycle_index(), idx);
        }
    }

    #[test]
    fn test_start_term_key_and_label() {
        let term = StartTerm::new(Season::Spring, 2026);
        assert_eq!(term.key(), "spring-2026");
        assert_eq!(term.label(), "Spring 2026");
        assert_eq!(term.to_string(), "Spring 2026");
    }

    #[test]
    fn test_start_term_keys_are_unique() {
        for (i, a) in START_TERMS.iter().enumerate() {
            for b in &START_TERMS[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }
}
