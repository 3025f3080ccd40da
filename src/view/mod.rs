//! UI-agnostic view models.
//!
//! Each sub-module builds a presentation value from component state. The CLI
//! renders them through [`text`]; other frontends map them to their own widgets.

pub mod common;
pub mod notifications;
pub mod text;
pub mod users;
