//! High-risk decision tree

use super::indicators::{
    high_pain_gate, hopelessness_present, low_belongingness, risk_indicator_gate, scs_override,
};
use crate::models::{Record, RiskLevel};

/// Classify a record against the high-risk tree
///
/// Returns [`RiskLevel::High`] or [`RiskLevel::None`].
#[must_use]
pub const fn classify_high(record: &Record) -> RiskLevel {
    if scs_override(record) {
        return RiskLevel::High;
    }

    if !risk_indicator_gate(record) || !high_pain_gate(record) {
        return RiskLevel::None;
    }

    let escalates = if hopelessness_present(record) {
        low_belongingness(record)
    } else {
        // without hopelessness a plan is also required
        low_belongingness(record) && record.suicide_plan == 1
    };

    if escalates { RiskLevel::High } else { RiskLevel::None }
}
