//! Suicide-risk decision trees
//!
//! Two independent trees label a record: one can only assign high risk, the
//! other only moderate risk. The final label is the more severe of the two.
//! Both trees are pure functions of the record.

pub mod high;
pub mod indicators;
pub mod moderate;

use crate::models::{Record, RiskLevel};
pub use high::classify_high;
pub use moderate::classify_moderate;

/// Final label for a record
#[must_use]
pub fn classify(record: &Record) -> RiskLevel {
    classify_high(record).max(classify_moderate(record))
}

/// Outcome of both trees together with the gate values that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub high: RiskLevel,
    pub moderate: RiskLevel,
    pub label: RiskLevel,
    pub scs_override: bool,
    pub risk_indicators: bool,
    pub high_pain: bool,
    pub moderate_pain: bool,
    pub hopelessness: bool,
    pub low_belongingness: bool,
}

/// Evaluate both trees and keep the intermediate gate values
#[must_use]
pub fn assess(record: &Record) -> RiskAssessment {
    let high = classify_high(record);
    let moderate = classify_moderate(record);

    RiskAssessment {
        high,
        moderate,
        label: high.max(moderate),
        scs_override: indicators::scs_override(record),
        risk_indicators: indicators::risk_indicator_gate(record),
        high_pain: indicators::high_pain_gate(record),
        moderate_pain: indicators::moderate_pain_gate(record),
        hopelessness: indicators::hopelessness_present(record),
        low_belongingness: indicators::low_belongingness(record),
    }
}
