//! Utility modules for adminboard.

mod relative_label;

pub use relative_label::{RelativeLabelError, parse_relative_label};
