//! Arrow data handling utilities

pub mod array_utils;

pub use array_utils::{downcast_column, string_cell};
