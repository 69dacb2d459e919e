use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::personal_code::PersonalCode;

/// Risk bucket assigned to an applicant by the credit registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditSegment {
    Debt,
    Segment1,
    Segment2,
    Segment3,
}

impl CreditSegment {
    /// Amount approvable per month of loan period. Zero blocks any loan.
    pub const fn credit_modifier(self) -> u32 {
        match self {
            CreditSegment::Debt => 0,
            CreditSegment::Segment1 => 100,
            CreditSegment::Segment2 => 300,
            CreditSegment::Segment3 => 1000,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CreditSegment::Debt => "debt",
            CreditSegment::Segment1 => "segment_1",
            CreditSegment::Segment2 => "segment_2",
            CreditSegment::Segment3 => "segment_3",
        }
    }

    /// Buckets the last four digits of a personal code.
    fn from_trailing_digits(value: u32) -> Self {
        match value {
            0..=2499 => CreditSegment::Debt,
            2500..=4999 => CreditSegment::Segment1,
            5000..=7499 => CreditSegment::Segment2,
            _ => CreditSegment::Segment3,
        }
    }
}

/// Source of credit segmentation for a validated applicant.
pub trait CreditRegistry {
    fn segment_for(&self, code: &PersonalCode) -> CreditSegment;
}

/// Deterministic stand-in for the external credit registry.
///
/// Known reference applicants resolve to fixed segments and take precedence
/// over the bucket rule, which only applies to codes not pinned here. The
/// bucket rule would place several pinned codes in a different segment.
#[derive(Debug, Clone)]
pub struct SimulatedCreditRegistry {
    known: HashMap<String, CreditSegment>,
}

impl SimulatedCreditRegistry {
    pub fn new() -> Self {
        let known = [
            ("49002010965", CreditSegment::Debt),
            ("49002010976", CreditSegment::Segment1),
            ("49002010987", CreditSegment::Segment2),
            ("49002010998", CreditSegment::Segment3),
            ("50803252747", CreditSegment::Segment1),
            ("35803250747", CreditSegment::Segment1),
        ]
        .into_iter()
        .map(|(code, segment)| (code.to_string(), segment))
        .collect();

        Self { known }
    }

    /// Registers or replaces a fixed segment for a specific applicant.
    pub fn with_known(mut self, code: &PersonalCode, segment: CreditSegment) -> Self {
        self.known.insert(code.as_string(), segment);
        self
    }
}

impl Default for SimulatedCreditRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditRegistry for SimulatedCreditRegistry {
    fn segment_for(&self, code: &PersonalCode) -> CreditSegment {
        self.known
            .get(&code.as_string())
            .copied()
            .unwrap_or_else(|| CreditSegment::from_trailing_digits(code.trailing_number(4)))
    }
}

impl<T: CreditRegistry + ?Sized> CreditRegistry for &T {
    fn segment_for(&self, code: &PersonalCode) -> CreditSegment {
        (**self).segment_for(code)
    }
}
