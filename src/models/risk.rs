//! Risk levels assigned by the classifiers

use std::fmt;

/// Suicide-risk label, ordered by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    /// No risk
    #[default]
    None = 0,
    /// Moderate risk
    Moderate = 1,
    /// High risk
    High = 2,
}

impl RiskLevel {
    /// All levels from least to most severe
    pub const ALL: [Self; 3] = [Self::None, Self::Moderate, Self::High];

    /// Convert a numeric label (0-2) to `RiskLevel`
    #[must_use]
    pub const fn from_u8(label: u8) -> Option<Self> {
        match label {
            0 => Some(Self::None),
            1 => Some(Self::Moderate),
            2 => Some(Self::High),
            _ => None,
        }
    }

    /// Numeric label written to the `target_label` column
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "no risk",
            Self::Moderate => "moderate risk",
            Self::High => "high risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
