use chrono::NaiveDate;

use crate::decision::{DecisionEngine, LoanPolicy};

pub(super) const DEBTOR: &str = "49002010965";
pub(super) const SEGMENT_1: &str = "49002010976";
pub(super) const SEGMENT_2: &str = "49002010987";
pub(super) const SEGMENT_3: &str = "49002010998";

/// Born 2008-03-25, age 17 on the reference date.
pub(super) const UNDERAGE: &str = "50803252747";
/// Born 1958-03-25, age 67 on the reference date.
pub(super) const OVERAGE: &str = "35803250747";
/// Born 2007-06-01, turns 18 on the reference date. Trailing digits bucket to segment 1.
pub(super) const EXACTLY_MINIMUM_AGE: &str = "50706012743";
/// Born 2007-06-02, one day short of 18.
pub(super) const DAY_BEFORE_MINIMUM_AGE: &str = "50706022746";
/// Born 1959-06-01, 66 on the reference date. Trailing digits bucket to segment 3.
pub(super) const EXACTLY_MAXIMUM_AGE: &str = "35906018009";
/// Born 1958-06-01, turns 67 on the reference date.
pub(super) const DAY_AFTER_MAXIMUM_AGE: &str = "35806018006";

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid reference date")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new(LoanPolicy::default())
}
