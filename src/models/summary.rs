//! Per-run label counts

use serde::Serialize;

use crate::error::Result;
use crate::models::risk::RiskLevel;

/// How many rows received each label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelSummary {
    pub total: usize,
    pub no_risk: usize,
    pub moderate: usize,
    pub high: usize,
}

impl LabelSummary {
    /// Count one labelled row
    pub fn record(&mut self, level: RiskLevel) {
        self.total += 1;
        match level {
            RiskLevel::None => self.no_risk += 1,
            RiskLevel::Moderate => self.moderate += 1,
            RiskLevel::High => self.high += 1,
        }
    }

    /// Add the counts of another summary
    pub fn merge(&mut self, other: &Self) {
        self.total += other.total;
        self.no_risk += other.no_risk;
        self.moderate += other.moderate;
        self.high += other.high;
    }

    #[must_use]
    pub const fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::None => self.no_risk,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::High => self.high,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<RiskLevel> for LabelSummary {
    fn from_iter<I: IntoIterator<Item = RiskLevel>>(iter: I) -> Self {
        let mut summary = Self::default();
        for level in iter {
            summary.record(level);
        }
        summary
    }
}
