//! Integration tests for the share-link codec

use oms_planner::core::models::{row::default_mixed_rows, MixedLoadRow, Program, START_TERMS};
use oms_planner::core::share::{
    build_share_query, build_share_url, compress_term_credits, expand_mixed_rows,
    parse_mixed_rows, parse_share_query, PaceMode, ShareState,
};

fn defaults() -> ShareState {
    ShareState {
        program: Program::Omscs,
        start_term_key: START_TERMS[0].key(),
        pace: 6,
        mode: PaceMode::Constant,
        mixed_rows: default_mixed_rows(),
    }
}

fn shape(rows: &[MixedLoadRow]) -> Vec<(u32, f64)> {
    rows.iter().map(|r| (r.terms, r.credits_per_term)).collect()
}

#[test]
fn constant_mode_round_trip() {
    let mut state = defaults();
    state.program = Program::Omscsec;
    state.start_term_key = "summer-2027".to_string();
    state.pace = 3;

    let decoded = parse_share_query(&build_share_query(&state), &defaults());
    assert_eq!(decoded.program, Program::Omscsec);
    assert_eq!(decoded.start_term_key, "summer-2027");
    assert_eq!(decoded.pace, 3);
    assert_eq!(decoded.mode, PaceMode::Constant);
}

#[test]
fn mixed_mode_round_trip_preserves_flat_sequence() {
    let mut state = defaults();
    state.mode = PaceMode::Mixed;
    state.mixed_rows = vec![
        MixedLoadRow::new("a".to_string(), 3, 9.0),
        MixedLoadRow::new("b".to_string(), 1, 0.0),
        MixedLoadRow::new("c".to_string(), 2, 3.0),
    ];

    let decoded = parse_share_query(&build_share_query(&state), &defaults());
    assert_eq!(decoded.mode, PaceMode::Mixed);
    assert_eq!(
        expand_mixed_rows(&decoded.mixed_rows),
        expand_mixed_rows(&state.mixed_rows)
    );
}

#[test]
fn corrupt_link_falls_back_without_partial_application() {
    let decoded = parse_share_query(
        "program=omsa&start=nowhere&pace=99&mode=mixed&mixed=2x3,oops",
        &defaults(),
    );
    // The valid fields apply...
    assert_eq!(decoded.program, Program::Omsa);
    assert_eq!(decoded.mode, PaceMode::Mixed);
    // ...while the corrupt ones keep their defaults, the mixed list wholesale
    assert_eq!(decoded.start_term_key, START_TERMS[0].key());
    assert_eq!(decoded.pace, 6);
    assert_eq!(shape(&decoded.mixed_rows), shape(&default_mixed_rows()));
}

#[test]
fn full_url_decodes_after_splitting_query() {
    let state = ShareState {
        mode: PaceMode::Mixed,
        ..defaults()
    };
    let url = build_share_url("https://planner.example.edu", &state);
    let query = url.split_once('?').map(|(_, q)| q).unwrap();

    let decoded = parse_share_query(query, &defaults());
    assert_eq!(decoded.mode, PaceMode::Mixed);
    assert_eq!(
        expand_mixed_rows(&decoded.mixed_rows),
        expand_mixed_rows(&state.mixed_rows)
    );
}

#[test]
fn compression_canonicalizes_equivalent_row_lists() {
    // Different authored shapes, same flat sequence
    let authored_a = vec![
        MixedLoadRow::new("x".to_string(), 2, 6.0),
        MixedLoadRow::new("y".to_string(), 1, 6.0),
        MixedLoadRow::new("z".to_string(), 2, 3.0),
    ];
    let authored_b = vec![
        MixedLoadRow::new("p".to_string(), 3, 6.0),
        MixedLoadRow::new("q".to_string(), 1, 3.0),
        MixedLoadRow::new("r".to_string(), 1, 3.0),
    ];

    let canonical_a = compress_term_credits(&expand_mixed_rows(&authored_a));
    let canonical_b = compress_term_credits(&expand_mixed_rows(&authored_b));
    assert_eq!(shape(&canonical_a), shape(&canonical_b));
    assert_eq!(shape(&canonical_a), vec![(3, 6.0), (2, 3.0)]);
}

#[test]
fn parsed_rows_match_compressed_editing_output() {
    // What the row editor compresses is exactly what the codec emits
    let flat = [3.0, 3.0, 6.0, 6.0, 6.0, 9.0];
    let rows = compress_term_credits(&flat);

    let mut state = defaults();
    state.mode = PaceMode::Mixed;
    state.mixed_rows = rows.clone();

    let query = build_share_query(&state);
    assert!(query.ends_with("mixed=2x3,3x6,1x9"));
    assert_eq!(shape(&parse_mixed_rows("2x3,3x6,1x9")), shape(&rows));
}
