use serde::{Deserialize, Serialize};

pub const MINIMUM_LOAN_AMOUNT: u32 = 2000;
pub const MAXIMUM_LOAN_AMOUNT: u32 = 10000;
pub const MINIMUM_LOAN_PERIOD: u32 = 12;
pub const MAXIMUM_LOAN_PERIOD: u32 = 48;
pub const MINIMUM_APPLICANT_AGE: u32 = 18;
pub const MAXIMUM_APPLICANT_AGE: u32 = 66;

/// Lending limits applied by the decision engine. Periods are in months, ages in completed years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub minimum_loan_amount: u32,
    pub maximum_loan_amount: u32,
    pub minimum_loan_period: u32,
    pub maximum_loan_period: u32,
    pub minimum_applicant_age: u32,
    pub maximum_applicant_age: u32,
}

impl LoanPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.minimum_loan_amount == 0 {
            return Err(PolicyError::ZeroMinimum("loan amount"));
        }
        if self.minimum_loan_period == 0 {
            return Err(PolicyError::ZeroMinimum("loan period"));
        }
        if self.minimum_loan_amount > self.maximum_loan_amount {
            return Err(PolicyError::InvertedRange {
                field: "loan amount",
                minimum: self.minimum_loan_amount,
                maximum: self.maximum_loan_amount,
            });
        }
        if self.minimum_loan_period > self.maximum_loan_period {
            return Err(PolicyError::InvertedRange {
                field: "loan period",
                minimum: self.minimum_loan_period,
                maximum: self.maximum_loan_period,
            });
        }
        if self.minimum_applicant_age > self.maximum_applicant_age {
            return Err(PolicyError::InvertedRange {
                field: "applicant age",
                minimum: self.minimum_applicant_age,
                maximum: self.maximum_applicant_age,
            });
        }
        Ok(())
    }

    pub fn amount_in_range(&self, amount: u32) -> bool {
        (self.minimum_loan_amount..=self.maximum_loan_amount).contains(&amount)
    }

    pub fn period_in_range(&self, period: u32) -> bool {
        (self.minimum_loan_period..=self.maximum_loan_period).contains(&period)
    }

    /// Highest amount approvable for `modifier` over `period`, capped at the policy maximum.
    pub fn capped_amount(&self, modifier: u32, period: u32) -> u32 {
        modifier
            .saturating_mul(period)
            .min(self.maximum_loan_amount)
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            minimum_loan_amount: MINIMUM_LOAN_AMOUNT,
            maximum_loan_amount: MAXIMUM_LOAN_AMOUNT,
            minimum_loan_period: MINIMUM_LOAN_PERIOD,
            maximum_loan_period: MAXIMUM_LOAN_PERIOD,
            minimum_applicant_age: MINIMUM_APPLICANT_AGE,
            maximum_applicant_age: MAXIMUM_APPLICANT_AGE,
        }
    }
}

/// Inconsistent policy limits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("minimum {0} must be greater than zero")]
    ZeroMinimum(&'static str),
    #[error("minimum {field} ({minimum}) exceeds maximum ({maximum})")]
    InvertedRange {
        field: &'static str,
        minimum: u32,
        maximum: u32,
    },
}

/// Why an otherwise well-formed application produced no loan offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    Debt,
    Underage { age: u32, minimum: u32 },
    Overage { age: u32, maximum: u32 },
    NoSuitablePeriod { maximum_period: u32 },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::Debt => "applicant has existing debt".to_string(),
            RejectionReason::Underage { age, minimum } => {
                format!("applicant is underage (age {age}, minimum {minimum})")
            }
            RejectionReason::Overage { age, maximum } => {
                format!("applicant exceeds maximum age limit (age {age}, maximum {maximum})")
            }
            RejectionReason::NoSuitablePeriod { maximum_period } => {
                format!("no loan amount is approvable within {maximum_period} months")
            }
        }
    }
}
