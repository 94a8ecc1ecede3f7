//! Algorithm implementations for risk labelling
//!
//! This module contains the rule-based classifiers applied to each record.

pub mod risk;

pub use risk::{RiskAssessment, assess, classify, classify_high, classify_moderate};
