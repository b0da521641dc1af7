//! Shared numerical helpers.

mod matrix;

pub use matrix::{add_constant, back_substitute, detect_aliased_columns, select_columns};
