//! Formula constants. All coefficients are dimensionless multipliers.

/// Largest group handled by the small-group weighter; anything above uses
/// the large-group distributor.
pub const SMALL_GROUP_MAX: usize = 10;

/// Group size at which the small-group size bonus starts (`n - 3`).
pub const SMALL_GROUP_BASE_SIZE: usize = 3;

/// Pairwise fairness slope applied to the normalized gap `|Si - Sj| / max`.
pub const PAIRWISE_GAP_SLOPE: f64 = 0.1;

/// Small-group weight bonus per member above [`SMALL_GROUP_BASE_SIZE`].
pub const SMALL_GROUP_SIZE_STEP: f64 = 0.05;

/// Small-group adjustment slope over the min-max normalized contribution.
pub const SMALL_GROUP_SPREAD_SLOPE: f64 = 0.1;

/// Large-group distribution factor floor (`ti` at zero contribution).
pub const LARGE_GROUP_FACTOR_FLOOR: f64 = 0.8;

/// Large-group distribution factor span; `ti` tops out at floor + span.
pub const LARGE_GROUP_FACTOR_SPAN: f64 = 0.4;

/// Large-group logarithmic adjustment slope.
pub const LARGE_GROUP_LOG_SLOPE: f64 = 0.05;

/// Planned task duration assumed when no planned start date is known.
pub const DEFAULT_PLANNED_DURATION_DAYS: i64 = 30;

// ---------------------------------------------------------------------------
// Time coefficient bands
//
// | Timing                  | Coefficient |
// |-------------------------|-------------|
// | >= 7 days early         | 1.30        |
// | 4-6 days early          | 1.25        |
// | 1-3 days early          | 1.20        |
// | on time                 | 1.00        |
// | minor overrun           | 0.90        |
// | moderate overrun        | 0.70        |
// | severe overrun          | 0.50        |
// | extreme overrun (fixed) | 0.30        |
// ---------------------------------------------------------------------------

/// Upper bound of every time coefficient.
pub const COEFFICIENT_MAX: f64 = 1.30;
/// Lower bound of every time coefficient.
pub const COEFFICIENT_MIN: f64 = 0.30;
/// On time, or timing unknown.
pub const COEFFICIENT_NEUTRAL: f64 = 1.00;
/// At least [`EARLY_FULL_BONUS_DAYS`] ahead of schedule.
pub const COEFFICIENT_EARLY_WEEK: f64 = 1.30;
/// At least [`EARLY_PARTIAL_BONUS_DAYS`] ahead of schedule.
pub const COEFFICIENT_EARLY_DAYS: f64 = 1.25;
/// One to three days ahead of schedule.
pub const COEFFICIENT_EARLY_SLIGHT: f64 = 1.20;
/// Overtime ratio up to [`OVERTIME_MINOR_RATIO`], or one day late on the fixed ladder.
pub const COEFFICIENT_LATE_MINOR: f64 = 0.90;
/// Overtime ratio up to [`OVERTIME_MODERATE_RATIO`], or two to three days late.
pub const COEFFICIENT_LATE_MODERATE: f64 = 0.70;
/// Overtime ratio above [`OVERTIME_MODERATE_RATIO`], or four to seven days late.
pub const COEFFICIENT_LATE_SEVERE: f64 = 0.50;
/// More than seven days late; fixed-days ladder only.
pub const COEFFICIENT_LATE_EXTREME: f64 = 0.30;

/// Days ahead of schedule that earn the full early bonus.
pub const EARLY_FULL_BONUS_DAYS: i64 = 7;

/// Days ahead of schedule that earn the intermediate early bonus.
pub const EARLY_PARTIAL_BONUS_DAYS: i64 = 4;

/// Overtime ratio (days late / planned duration) still counted as minor.
pub const OVERTIME_MINOR_RATIO: f64 = 0.10;

/// Overtime ratio still counted as moderate; anything above is severe.
pub const OVERTIME_MODERATE_RATIO: f64 = 0.30;

/// Share-of-pool sizes seen in practice. Pool size is always a parameter;
/// these are convenience values for callers.
pub const PEER_REVIEW_POOL: f64 = 30.0;
pub const FUNCTIONAL_SCORE_POOL: f64 = 100.0;
