//! Moderate-risk decision tree

use super::indicators::{
    hopelessness_present, low_belongingness, moderate_pain_gate, risk_indicator_gate,
};
use crate::models::{Record, RiskLevel};

/// Classify a record against the moderate-risk tree
///
/// Returns [`RiskLevel::Moderate`] or [`RiskLevel::None`].
#[must_use]
pub fn classify_moderate(record: &Record) -> RiskLevel {
    if !risk_indicator_gate(record) || !moderate_pain_gate(record) {
        return RiskLevel::None;
    }

    if hopelessness_present(record) || low_belongingness(record) {
        RiskLevel::Moderate
    } else {
        RiskLevel::None
    }
}
