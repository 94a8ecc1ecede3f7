//! Column layout of the indicator table
//!
//! The input table carries 19 columns in a fixed order. [`Field`] names each
//! position so that rules never index rows with bare numbers.

use std::fmt;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field as ArrowField, Schema, SchemaRef};
use itertools::Itertools;

use crate::error::{KbError, Result};

/// Name of the label column appended to the output table
pub const TARGET_LABEL_COLUMN: &str = "target_label";

/// Number of input columns
pub const FIELD_COUNT: usize = 19;

/// Input columns in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Identifier = 0,
    Age = 1,
    Gender = 2,
    SuicidalIdeation = 3,
    SuicidalDesire = 4,
    SuicidePlan = 5,
    SuicideAttempt = 6,
    AttemptCount = 7,
    SelfHarm = 8,
    ExposureToSuicide = 9,
    RelationLabelOfSuicide = 10,
    IdentificationWithSuicide = 11,
    DepressionScore = 12,
    MentalPain = 13,
    PainTolerance = 14,
    Hopelessness = 15,
    Scs = 16,
    PerceivedBurden = 17,
    SocialConnectedness = 18,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Self; FIELD_COUNT] = [
        Self::Identifier,
        Self::Age,
        Self::Gender,
        Self::SuicidalIdeation,
        Self::SuicidalDesire,
        Self::SuicidePlan,
        Self::SuicideAttempt,
        Self::AttemptCount,
        Self::SelfHarm,
        Self::ExposureToSuicide,
        Self::RelationLabelOfSuicide,
        Self::IdentificationWithSuicide,
        Self::DepressionScore,
        Self::MentalPain,
        Self::PainTolerance,
        Self::Hopelessness,
        Self::Scs,
        Self::PerceivedBurden,
        Self::SocialConnectedness,
    ];

    /// Zero-based column position
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Header name as it appears in input and output files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::SuicidalIdeation => "suicidal_ideation",
            Self::SuicidalDesire => "suicidal_desire",
            Self::SuicidePlan => "suicide_plan",
            Self::SuicideAttempt => "suicide_attempt",
            Self::AttemptCount => "attempt_count",
            Self::SelfHarm => "self_harm",
            Self::ExposureToSuicide => "exposure_to_suicide",
            Self::RelationLabelOfSuicide => "relation_label_of_suicide",
            Self::IdentificationWithSuicide => "identification_with_suicide",
            Self::DepressionScore => "depression_score",
            Self::MentalPain => "mental_pain",
            Self::PainTolerance => "pain_tolerance",
            Self::Hopelessness => "hopelessness",
            Self::Scs => "SCS",
            Self::PerceivedBurden => "perceived_burden",
            Self::SocialConnectedness => "social_connectedness",
        }
    }

    /// Look a field up by its header name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Look a field up by its column position
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The identifier is opaque text; every other column is an integer
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Identifier)
    }

    /// Numeric fields in column order
    pub fn numeric() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|field| field.is_numeric())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Schema used to read the input without type inference
///
/// Every column is read as text so that blank cells can be normalized and
/// bad cells reported with their row and column.
#[must_use]
pub fn raw_input_schema() -> SchemaRef {
    Arc::new(Schema::new(
        Field::ALL
            .iter()
            .map(|field| ArrowField::new(field.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ))
}

fn record_fields() -> Vec<ArrowField> {
    Field::ALL
        .iter()
        .map(|field| {
            let data_type = if field.is_numeric() {
                DataType::Int64
            } else {
                DataType::Utf8
            };
            ArrowField::new(field.name(), data_type, false)
        })
        .collect()
}

/// Schema of the labelled output: the record columns plus `target_label`
#[must_use]
pub fn output_schema() -> SchemaRef {
    let mut fields = record_fields();
    fields.push(ArrowField::new(TARGET_LABEL_COLUMN, DataType::UInt8, false));
    Arc::new(Schema::new(fields))
}

/// Header row written to output files
#[must_use]
pub fn output_header() -> Vec<&'static str> {
    Field::ALL
        .iter()
        .map(|field| field.name())
        .chain(std::iter::once(TARGET_LABEL_COLUMN))
        .collect()
}

/// Check an input header against the canonical column list
///
/// The column count is always checked. Names are compared after trimming
/// surrounding whitespace when `check_names` is set.
pub fn validate_header<S: AsRef<str>>(header: &[S], check_names: bool) -> Result<()> {
    if header.len() != FIELD_COUNT {
        return Err(KbError::SchemaMismatch(format!(
            "expected {FIELD_COUNT} columns ({}), found {} ({})",
            Field::ALL.iter().map(|field| field.name()).join(", "),
            header.len(),
            header.iter().map(|name| name.as_ref()).join(", ")
        )));
    }

    if check_names {
        let mismatches = Field::ALL
            .iter()
            .zip(header)
            .filter(|(field, found)| field.name() != found.as_ref().trim())
            .map(|(field, found)| {
                format!(
                    "column {} should be '{}' but is '{}'",
                    field.index(),
                    field.name(),
                    found.as_ref()
                )
            })
            .collect_vec();

        if !mismatches.is_empty() {
            return Err(KbError::SchemaMismatch(mismatches.join("; ")));
        }
    }

    Ok(())
}
