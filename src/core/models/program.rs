//! Program model and rate table

use serde::{Deserialize, Serialize};

/// Online graduate programs supported by the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    /// MS in Analytics (OMSA)
    Omsa,
    /// MS in Computer Science (OMSCS)
    Omscs,
    /// MS in Cybersecurity (OMSCSEC)
    Omscsec,
}

impl Program {
    /// All programs, in display order
    pub const ALL: [Self; 3] = [Self::Omsa, Self::Omscs, Self::Omscsec];

    /// Resolve a program from its stable key (e.g., "omscs")
    ///
    /// # Returns
    /// `None` if the key does not name a known program
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "omsa" => Some(Self::Omsa),
            "omscs" => Some(Self::Omscs),
            "omscsec" => Some(Self::Omscsec),
            _ => None,
        }
    }

    /// Stable key used in configuration and share links
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Omsa => "omsa",
            Self::Omscs => "omscs",
            Self::Omscsec => "omscsec",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Omsa => "MS in Analytics (OMSA)",
            Self::Omscs => "MS in Computer Science (OMSCS)",
            Self::Omscsec => "MS in Cybersecurity (OMSCSEC)",
        }
    }

    /// Tuition rate per credit hour, in dollars
    #[must_use]
    pub const fn per_credit_rate(self) -> f64 {
        match self {
            Self::Omsa => 327.0,
            Self::Omscs => 225.0,
            Self::Omscsec => 369.0,
        }
    }

    /// Total credits required to graduate
    #[must_use]
    pub const fn degree_credits(self) -> f64 {
        match self {
            Self::Omsa => 36.0,
            Self::Omscs => 30.0,
            Self::Omscsec => 30.0,
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-term online learning fee as a step function of that term's credit load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeRule {
    /// Credit load at which the higher fee applies
    pub threshold_credits: f64,
    /// Fee charged below the threshold
    pub below_threshold_fee: f64,
    /// Fee charged at or above the threshold
    pub at_or_above_threshold_fee: f64,
}

impl FeeRule {
    /// Fee for a single term at the given credit load.
    ///
    /// Non-finite or non-positive loads carry no fee; the fee is never
    /// prorated or accumulated across terms.
    #[must_use]
    pub fn fee_for(&self, credits: f64) -> f64 {
        if !credits.is_finite() || credits <= 0.0 {
            return 0.0;
        }
        if credits < self.threshold_credits {
            self.below_threshold_fee
        } else {
            self.at_or_above_threshold_fee
        }
    }
}

/// The online learning fee schedule applied once per enrolled term
pub const ONLINE_LEARNING_FEE_RULE: FeeRule = FeeRule {
    threshold_credits: 4.0,
    below_threshold_fee: 176.0,
    at_or_above_threshold_fee: 440.0,
};

/// Upper bound on credits in a single term accepted by scenario validation
pub const MAX_CREDITS_PER_TERM: f64 = 21.0;

/// Upper bound on manually entered term counts accepted by scenario validation
pub const MAX_TERMS: u32 = 30;

/// Selectable constant-pace options, in credits per term
pub const PACE_OPTIONS: [u32; 3] = [3, 6, 9];

/// Default constant pace, in credits per term
pub const DEFAULT_PACE: u32 = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_key_round_trip() {
        for program in Program::ALL {
            assert_eq!(Program::from_key(program.key()), Some(program));
        }
        assert_eq!(Program::from_key("omba"), None);
        assert_eq!(Program::from_key(""), None);
    }

    #[test]
    fn test_rate_table() {
        assert!((Program::Omsa.per_credit_rate() - 327.0).abs() < f64::EPSILON);
        assert!((Program::Omscs.per_credit_rate() - 225.0).abs() < f64::EPSILON);
        assert!((Program::Omscsec.per_credit_rate() - 369.0).abs() < f64::EPSILON);

        assert!((Program::Omsa.degree_credits() - 36.0).abs() < f64::EPSILON);
        assert!((Program::Omscs.degree_credits() - 30.0).abs() < f64::EPSILON);
        assert!((Program::Omscsec.degree_credits() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fee_below_threshold() {
        for credits in [0.5, 1.0, 3.0, 3.99] {
            assert!(
                (ONLINE_LEARNING_FEE_RULE.fee_for(credits) - 176.0).abs() < f64::EPSILON,
                "credits {credits} should carry the below-threshold fee"
            );
        }
    }

    #[test]
    fn test_fee_at_or_above_threshold() {
        for credits in [4.0, 6.0, 9.0, 21.0] {
            assert!(
                (ONLINE_LEARNING_FEE_RULE.fee_for(credits) - 440.0).abs() < f64::EPSILON,
                "credits {credits} should carry the at-or-above fee"
            );
        }
    }

    #[test]
    fn test_fee_zero_for_nonpositive_or_nonfinite() {
        assert!(ONLINE_LEARNING_FEE_RULE.fee_for(0.0).abs() < f64::EPSILON);
        assert!(ONLINE_LEARNING_FEE_RULE.fee_for(-3.0).abs() < f64::EPSILON);
        assert!(ONLINE_LEARNING_FEE_RULE.fee_for(f64::NAN).abs() < f64::EPSILON);
        assert!(ONLINE_LEARNING_FEE_RULE.fee_for(f64::INFINITY).abs() < f64::EPSILON);
    }
}
