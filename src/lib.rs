//! Loan decision engine and its command-line tooling.
//!
//! The binary (`loan-decision`) only parses arguments and renders output;
//! validation, segmentation, and the period search live in [`decision`].

pub mod batch;
pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;

pub use decision::{Decision, DecisionEngine, DecisionError, LoanPolicy};
