//! Thresholds and gate conditions shared by the risk decision trees

use std::ops::RangeInclusive;

use crate::models::Record;

/// SCS score at which high risk is assigned outright
pub const SCS_OVERRIDE: i64 = 40;
/// Depression score that counts as a risk indicator
pub const DEPRESSION_THRESHOLD: i64 = 10;
/// Mental pain at or above this is high-band pain
pub const HIGH_MENTAL_PAIN: i64 = 46;
/// Mental pain band for moderate risk
pub const MODERATE_MENTAL_PAIN: RangeInclusive<i64> = 36..=45;
/// Pain tolerance at or below this is low tolerance
pub const LOW_PAIN_TOLERANCE: i64 = 25;
/// Hopelessness at or above this counts as present
pub const HOPELESSNESS_THRESHOLD: i64 = 2;
/// Social connectedness at or below this is low belongingness
pub const LOW_BELONGINGNESS: i64 = 12;

/// SCS at or above the override threshold
#[must_use]
pub const fn scs_override(record: &Record) -> bool {
    record.scs >= SCS_OVERRIDE
}

/// Prior attempt, self-harm, ideation, depression or exposure to a suicide
#[must_use]
pub const fn risk_indicator_gate(record: &Record) -> bool {
    record.suicide_attempt == 1
        || record.self_harm == 1
        || record.suicidal_ideation == 1
        || record.depression_score >= DEPRESSION_THRESHOLD
        || record.exposure_to_suicide == 1
}

/// High mental pain or low pain tolerance
#[must_use]
pub const fn high_pain_gate(record: &Record) -> bool {
    record.mental_pain >= HIGH_MENTAL_PAIN || low_pain_tolerance(record)
}

/// Moderate-band mental pain or low pain tolerance
#[must_use]
pub fn moderate_pain_gate(record: &Record) -> bool {
    MODERATE_MENTAL_PAIN.contains(&record.mental_pain) || low_pain_tolerance(record)
}

#[must_use]
pub const fn low_pain_tolerance(record: &Record) -> bool {
    record.pain_tolerance <= LOW_PAIN_TOLERANCE
}

#[must_use]
pub const fn hopelessness_present(record: &Record) -> bool {
    record.hopelessness >= HOPELESSNESS_THRESHOLD
}

#[must_use]
pub const fn low_belongingness(record: &Record) -> bool {
    record.social_connectedness <= LOW_BELONGINGNESS
}
