//! Share-state codec: plan configuration ↔ URL query string
//!
//! The encoding is the stable external surface for bookmarked links:
//! fixed keys `program`, `start`, `pace`, `mode`, and (mixed mode only)
//! `mixed` holding comma-separated `<terms>x<credits>` tokens in row
//! order. Decoding never fails; anything missing, unknown, or malformed
//! silently falls back to the caller's defaults.

use crate::core::models::{MixedLoadRow, Program, PACE_OPTIONS, START_TERMS};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Pacing strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceMode {
    /// Same credit load every term
    Constant,
    /// Heterogeneous per-term loads authored as mixed rows
    Mixed,
}

impl PaceMode {
    /// Resolve a mode from its query-string value
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "constant" => Some(Self::Constant),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// Stable query-string value
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for PaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The serializable subset of plan configuration carried by a share link
#[derive(Debug, Clone, PartialEq)]
pub struct ShareState {
    /// Selected program
    pub program: Program,
    /// Key of the selected start term
    pub start_term_key: String,
    /// Constant-mode credits per term
    pub pace: u32,
    /// Pacing strategy
    pub mode: PaceMode,
    /// Mixed-mode rows (ignored in constant mode)
    pub mixed_rows: Vec<MixedLoadRow>,
}

/// Clamp a per-term credit value into the whole-credit editing range [0, 9].
#[must_use]
pub fn clamp_credits(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.round().clamp(0.0, 9.0)
}

/// Expand rows into one credits value per term, in chronological order.
#[must_use]
pub fn expand_mixed_rows(rows: &[MixedLoadRow]) -> Vec<f64> {
    rows.iter()
        .flat_map(|row| std::iter::repeat(row.credits_per_term).take(row.terms as usize))
        .collect()
}

/// Compress a flat per-term credit sequence into the minimal row list.
///
/// Values are clamped into the editing range first; maximal runs of equal
/// credits merge into one row. Any two row lists expanding to the same
/// flat sequence compress to identical (terms, credits) rows; ids are
/// regenerated as `row-1`, `row-2`, ...
#[must_use]
pub fn compress_term_credits(credits: &[f64]) -> Vec<MixedLoadRow> {
    let Some(&first) = credits.first() else {
        return Vec::new();
    };

    let mut rows: Vec<MixedLoadRow> = Vec::new();
    let mut current_credits = clamp_credits(first);
    let mut terms: u32 = 1;

    for &value in &credits[1..] {
        let next_credits = clamp_credits(value);
        if (next_credits - current_credits).abs() < f64::EPSILON {
            terms += 1;
        } else {
            rows.push(MixedLoadRow::new(
                format!("row-{}", rows.len() + 1),
                terms,
                current_credits,
            ));
            current_credits = next_credits;
            terms = 1;
        }
    }

    rows.push(MixedLoadRow::new(
        format!("row-{}", rows.len() + 1),
        terms,
        current_credits,
    ));

    rows
}

/// Parse a `mixed` parameter value into rows.
///
/// Tokens are `<terms>x<credits>` separated by commas. A single malformed
/// token voids the entire list (an empty result), so a corrupt link never
/// applies partially.
#[must_use]
pub fn parse_mixed_rows(value: &str) -> Vec<MixedLoadRow> {
    // Commas may arrive percent-encoded from browser address bars.
    let normalized = value.replace("%2C", ",").replace("%2c", ",");
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut rows = Vec::new();
    for token in normalized.split(',') {
        let Some((terms_part, credits_part)) = token.split_once('x') else {
            return Vec::new();
        };
        let Ok(terms) = terms_part.parse::<u32>() else {
            return Vec::new();
        };
        let Ok(credits) = credits_part.parse::<f64>() else {
            return Vec::new();
        };
        if !credits.is_finite() {
            return Vec::new();
        }
        rows.push(MixedLoadRow::new(
            format!("row-{}", rows.len() + 1),
            terms,
            credits.max(0.0),
        ));
    }
    rows
}

/// Serialize share state into a query string (no leading `?`).
#[must_use]
pub fn build_share_query(state: &ShareState) -> String {
    let mut query = format!(
        "program={}&start={}&pace={}&mode={}",
        state.program.key(),
        state.start_term_key,
        state.pace,
        state.mode.key()
    );

    if state.mode == PaceMode::Mixed && !state.mixed_rows.is_empty() {
        query.push_str("&mixed=");
        for (idx, row) in state.mixed_rows.iter().enumerate() {
            if idx > 0 {
                query.push(',');
            }
            let _ = write!(query, "{}x{}", row.terms, row.credits_per_term);
        }
    }

    query
}

/// Full share URL for the given base address.
#[must_use]
pub fn build_share_url(base: &str, state: &ShareState) -> String {
    format!(
        "{}?{}",
        base.trim_end_matches('/'),
        build_share_query(state)
    )
}

/// Decode a query string (with or without a leading `?`) into share state.
///
/// Each parameter falls back to `defaults` independently: an unknown
/// program key, unknown start term, pace outside the option set, bad mode,
/// or malformed `mixed` list leaves that field at its default. Never
/// errors.
#[must_use]
pub fn parse_share_query(query: &str, defaults: &ShareState) -> ShareState {
    let mut state = defaults.clone();

    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "program" => {
                if let Some(program) = Program::from_key(value) {
                    state.program = program;
                }
            }
            "start" => {
                if START_TERMS.iter().any(|term| term.key() == value) {
                    state.start_term_key = value.to_string();
                }
            }
            "pace" => {
                if let Ok(pace) = value.parse::<u32>() {
                    if PACE_OPTIONS.contains(&pace) {
                        state.pace = pace;
                    }
                }
            }
            "mode" => {
                if let Some(mode) = PaceMode::from_key(value) {
                    state.mode = mode;
                }
            }
            "mixed" => {
                let rows = parse_mixed_rows(value);
                if !rows.is_empty() {
                    state.mixed_rows = rows;
                }
            }
            _ => {}
        }
    }

    state
}
