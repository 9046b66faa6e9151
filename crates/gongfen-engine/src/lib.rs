//! # gongfen-engine — Merit-point (功分) distribution engine.
//!
//! Pure, deterministic numeric transformations; no I/O, no shared state.
//!
//! - **Contribution normalization**: participant count selects one of four
//!   formulas (identity, pairwise gap adjustment, small-group weighting,
//!   large-group logarithmic distribution).
//! - **Time coefficients**: planned/actual dates map to a bonus or penalty in
//!   `[0.30, 1.30]`, with a selectable late-delivery ladder.
//! - **Redistribution**: merit maps rescale onto a fixed team budget, and
//!   individual points convert to a share of a fixed pool.

pub mod config;
pub mod engine;
pub mod large_group;
pub mod normalizer;
pub mod pairwise;
pub mod redistribution;
pub mod small_group;
pub mod time_coefficient;

pub use config::{EngineConfig, LateLadder};
pub use engine::MeritEngine;
pub use normalizer::{Formula, normalize};
pub use redistribution::{individual_share_score, normalize_to_total, rank, share_scores};
pub use time_coefficient::{apply_time_coefficients, coefficient_for_days, time_coefficient};
