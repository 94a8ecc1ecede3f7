//! Record entity model
//!
//! One row of the indicator table, parsed into named fields. Records are
//! built once at input time and only read afterwards.

use crate::error::{KbError, Result};
use crate::models::cell::{parse_identifier_cell, parse_numeric_cell};
use crate::schema::{FIELD_COUNT, Field};

/// Clinical and psychometric indicators for one individual
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub identifier: String,
    pub age: i64,
    /// Categorical code
    pub gender: i64,
    pub suicidal_ideation: i64,
    pub suicidal_desire: i64,
    pub suicide_plan: i64,
    pub suicide_attempt: i64,
    pub attempt_count: i64,
    pub self_harm: i64,
    pub exposure_to_suicide: i64,
    /// Categorical code
    pub relation_label_of_suicide: i64,
    pub identification_with_suicide: i64,
    pub depression_score: i64,
    pub mental_pain: i64,
    pub pain_tolerance: i64,
    pub hopelessness: i64,
    pub scs: i64,
    pub perceived_burden: i64,
    /// Belongingness; low values mean weak belonging
    pub social_connectedness: i64,
}

impl Record {
    /// Create a record with the given identifier and every indicator at zero
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Build a record from the raw cells of one row
    ///
    /// `row` is the 1-based data row. `None` marks a missing cell.
    pub fn from_cells(row: usize, cells: &[Option<&str>]) -> Result<Self> {
        if cells.len() != FIELD_COUNT {
            return Err(KbError::MalformedRow(format!(
                "row {row} has {} fields, expected {FIELD_COUNT}",
                cells.len()
            )));
        }

        let mut record = Self::new(parse_identifier_cell(row, cells[0])?);
        for field in Field::numeric() {
            let value = parse_numeric_cell(row, field, cells[field.index()])?;
            record.set(field, value);
        }
        Ok(record)
    }

    /// Value of a numeric field; `None` for the identifier
    #[must_use]
    pub const fn value(&self, field: Field) -> Option<i64> {
        Some(match field {
            Field::Identifier => return None,
            Field::Age => self.age,
            Field::Gender => self.gender,
            Field::SuicidalIdeation => self.suicidal_ideation,
            Field::SuicidalDesire => self.suicidal_desire,
            Field::SuicidePlan => self.suicide_plan,
            Field::SuicideAttempt => self.suicide_attempt,
            Field::AttemptCount => self.attempt_count,
            Field::SelfHarm => self.self_harm,
            Field::ExposureToSuicide => self.exposure_to_suicide,
            Field::RelationLabelOfSuicide => self.relation_label_of_suicide,
            Field::IdentificationWithSuicide => self.identification_with_suicide,
            Field::DepressionScore => self.depression_score,
            Field::MentalPain => self.mental_pain,
            Field::PainTolerance => self.pain_tolerance,
            Field::Hopelessness => self.hopelessness,
            Field::Scs => self.scs,
            Field::PerceivedBurden => self.perceived_burden,
            Field::SocialConnectedness => self.social_connectedness,
        })
    }

    /// Set a numeric field; setting the identifier is ignored
    pub fn set(&mut self, field: Field, value: i64) {
        let slot = match field {
            Field::Identifier => return,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::SuicidalIdeation => &mut self.suicidal_ideation,
            Field::SuicidalDesire => &mut self.suicidal_desire,
            Field::SuicidePlan => &mut self.suicide_plan,
            Field::SuicideAttempt => &mut self.suicide_attempt,
            Field::AttemptCount => &mut self.attempt_count,
            Field::SelfHarm => &mut self.self_harm,
            Field::ExposureToSuicide => &mut self.exposure_to_suicide,
            Field::RelationLabelOfSuicide => &mut self.relation_label_of_suicide,
            Field::IdentificationWithSuicide => &mut self.identification_with_suicide,
            Field::DepressionScore => &mut self.depression_score,
            Field::MentalPain => &mut self.mental_pain,
            Field::PainTolerance => &mut self.pain_tolerance,
            Field::Hopelessness => &mut self.hopelessness,
            Field::Scs => &mut self.scs,
            Field::PerceivedBurden => &mut self.perceived_burden,
            Field::SocialConnectedness => &mut self.social_connectedness,
        };
        *slot = value;
    }

    /// Builder-style [`Record::set`]
    #[must_use]
    pub fn with(mut self, field: Field, value: i64) -> Self {
        self.set(field, value);
        self
    }
}
