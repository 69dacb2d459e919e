//! Loan decision engine: identifier validation, credit segmentation, and the
//! affordability search over loan periods.

mod personal_code;
mod policy;
mod segment;

#[cfg(test)]
mod tests;

pub use personal_code::{PersonalCode, PersonalCodeError, Sex};
pub use policy::{
    LoanPolicy, PolicyError, RejectionReason, MAXIMUM_APPLICANT_AGE, MAXIMUM_LOAN_AMOUNT,
    MAXIMUM_LOAN_PERIOD, MINIMUM_APPLICANT_AGE, MINIMUM_LOAN_AMOUNT, MINIMUM_LOAN_PERIOD,
};
pub use segment::{CreditRegistry, CreditSegment, SimulatedCreditRegistry};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Approved loan offer. Amount in euros, period in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    loan_amount: u32,
    loan_period: u32,
}

impl Decision {
    pub const fn new(loan_amount: u32, loan_period: u32) -> Self {
        Self {
            loan_amount,
            loan_period,
        }
    }

    pub const fn loan_amount(&self) -> u32 {
        self.loan_amount
    }

    pub const fn loan_period(&self) -> u32 {
        self.loan_period
    }
}

/// Error raised when an application cannot be turned into a loan offer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("invalid personal ID code: {0}")]
    InvalidPersonalCode(#[from] PersonalCodeError),
    #[error("invalid loan amount {requested} (allowed {minimum}..={maximum})")]
    InvalidLoanAmount {
        requested: u32,
        minimum: u32,
        maximum: u32,
    },
    #[error("invalid loan period {requested} months (allowed {minimum}..={maximum})")]
    InvalidLoanPeriod {
        requested: u32,
        minimum: u32,
        maximum: u32,
    },
    #[error("no valid loan found: {}", .0.summary())]
    NoValidLoan(RejectionReason),
}

/// Stateless engine applying a [`LoanPolicy`] and a credit registry to loan applications.
#[derive(Debug, Clone)]
pub struct DecisionEngine<R = SimulatedCreditRegistry> {
    policy: LoanPolicy,
    registry: R,
}

impl DecisionEngine<SimulatedCreditRegistry> {
    pub fn new(policy: LoanPolicy) -> Self {
        Self::with_registry(policy, SimulatedCreditRegistry::default())
    }
}

impl Default for DecisionEngine<SimulatedCreditRegistry> {
    fn default() -> Self {
        Self::new(LoanPolicy::default())
    }
}

impl<R> DecisionEngine<R>
where
    R: CreditRegistry,
{
    pub fn with_registry(policy: LoanPolicy, registry: R) -> Self {
        Self { policy, registry }
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    /// Decide an application using today's local date for the age check.
    pub fn calculate_approved_loan(
        &self,
        personal_code: &str,
        loan_amount: u32,
        loan_period: u32,
    ) -> Result<Decision, DecisionError> {
        let today = Local::now().date_naive();
        self.calculate_approved_loan_on(personal_code, loan_amount, loan_period, today)
    }

    /// Decide an application as of `today`.
    ///
    /// Inputs are checked in order (code, amount, period) before any credit
    /// logic runs. The requested period is kept whenever it already yields at
    /// least the minimum amount; otherwise the shortest longer period that
    /// covers the requested amount is offered.
    pub fn calculate_approved_loan_on(
        &self,
        personal_code: &str,
        loan_amount: u32,
        loan_period: u32,
        today: NaiveDate,
    ) -> Result<Decision, DecisionError> {
        let code = PersonalCode::parse(personal_code)?;
        self.verify_inputs(loan_amount, loan_period)?;
        self.verify_age(&code, today)?;

        let segment = self.registry.segment_for(&code);
        let modifier = segment.credit_modifier();
        debug!(segment = segment.label(), modifier, "resolved credit segment");
        if modifier == 0 {
            return Err(DecisionError::NoValidLoan(RejectionReason::Debt));
        }

        let policy = &self.policy;
        let approved = policy.capped_amount(modifier, loan_period);
        if approved >= policy.minimum_loan_amount {
            return Ok(Decision::new(approved, loan_period));
        }

        if let Some(period) = (loan_period + 1..=policy.maximum_loan_period)
            .find(|period| modifier.saturating_mul(*period) >= loan_amount)
        {
            debug!(
                requested_period = loan_period,
                adjusted_period = period,
                "extended loan period to cover requested amount"
            );
            return Ok(Decision::new(
                policy.capped_amount(modifier, period),
                period,
            ));
        }

        let fallback = policy.capped_amount(modifier, policy.maximum_loan_period);
        if fallback >= policy.minimum_loan_amount {
            debug!(
                requested_amount = loan_amount,
                offered_amount = fallback,
                "requested amount not reachable, offering maximum period"
            );
            return Ok(Decision::new(fallback, policy.maximum_loan_period));
        }

        Err(DecisionError::NoValidLoan(
            RejectionReason::NoSuitablePeriod {
                maximum_period: policy.maximum_loan_period,
            },
        ))
    }

    fn verify_inputs(&self, loan_amount: u32, loan_period: u32) -> Result<(), DecisionError> {
        let policy = &self.policy;
        if !policy.amount_in_range(loan_amount) {
            return Err(DecisionError::InvalidLoanAmount {
                requested: loan_amount,
                minimum: policy.minimum_loan_amount,
                maximum: policy.maximum_loan_amount,
            });
        }
        if !policy.period_in_range(loan_period) {
            return Err(DecisionError::InvalidLoanPeriod {
                requested: loan_period,
                minimum: policy.minimum_loan_period,
                maximum: policy.maximum_loan_period,
            });
        }
        Ok(())
    }

    fn verify_age(&self, code: &PersonalCode, today: NaiveDate) -> Result<(), DecisionError> {
        let age = code.age_on(today);
        if age < self.policy.minimum_applicant_age {
            return Err(DecisionError::NoValidLoan(RejectionReason::Underage {
                age,
                minimum: self.policy.minimum_applicant_age,
            }));
        }
        if age > self.policy.maximum_applicant_age {
            return Err(DecisionError::NoValidLoan(RejectionReason::Overage {
                age,
                maximum: self.policy.maximum_applicant_age,
            }));
        }
        Ok(())
    }
}
