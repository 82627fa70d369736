//! Data models for `oms-planner`

pub mod program;
pub mod row;
pub mod term;

pub use program::{
    FeeRule, Program, DEFAULT_PACE, MAX_CREDITS_PER_TERM, MAX_TERMS, ONLINE_LEARNING_FEE_RULE,
    PACE_OPTIONS,
};
pub use row::MixedLoadRow;
pub use term::{Season, StartTerm, START_TERMS};
