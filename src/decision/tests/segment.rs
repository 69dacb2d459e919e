use super::common::*;
use crate::decision::{CreditRegistry, CreditSegment, PersonalCode, SimulatedCreditRegistry};

fn segment(raw: &str) -> CreditSegment {
    let code = PersonalCode::parse(raw).expect("valid code");
    SimulatedCreditRegistry::default().segment_for(&code)
}

#[test]
fn reference_applicants_resolve_to_fixed_segments() {
    assert_eq!(segment(DEBTOR), CreditSegment::Debt);
    assert_eq!(segment(SEGMENT_1), CreditSegment::Segment1);
    assert_eq!(segment(SEGMENT_2), CreditSegment::Segment2);
    assert_eq!(segment(SEGMENT_3), CreditSegment::Segment3);
}

#[test]
fn pinned_applicants_take_precedence_over_trailing_digits() {
    // Trailing digits alone would bucket these as debt.
    assert_eq!(segment(SEGMENT_1), CreditSegment::Segment1);
    assert_eq!(segment(SEGMENT_3), CreditSegment::Segment3);
    assert_eq!(segment(OVERAGE), CreditSegment::Segment1);

    assert_eq!(segment(UNDERAGE), CreditSegment::Segment1);

    let unpinned = PersonalCode::parse("49002010977").expect("valid code");
    assert_eq!(
        SimulatedCreditRegistry::default().segment_for(&unpinned),
        CreditSegment::Debt
    );
}

#[test]
fn other_applicants_are_bucketed_by_trailing_digits() {
    assert_eq!(segment("49002010834"), CreditSegment::Debt);
    assert_eq!(segment(EXACTLY_MINIMUM_AGE), CreditSegment::Segment1);
    assert_eq!(segment("48505206005"), CreditSegment::Segment2);
    assert_eq!(segment("39001017797"), CreditSegment::Segment3);
}

#[test]
fn credit_modifiers_match_segments() {
    assert_eq!(CreditSegment::Debt.credit_modifier(), 0);
    assert_eq!(CreditSegment::Segment1.credit_modifier(), 100);
    assert_eq!(CreditSegment::Segment2.credit_modifier(), 300);
    assert_eq!(CreditSegment::Segment3.credit_modifier(), 1000);
}

#[test]
fn known_applicants_can_be_overridden() {
    let code = PersonalCode::parse("39001017797").expect("valid code");
    let registry = SimulatedCreditRegistry::new().with_known(&code, CreditSegment::Debt);
    assert_eq!(registry.segment_for(&code), CreditSegment::Debt);
}
