//! adminboard - view-model library for an admin dashboard.
//!
//! Provides:
//! - `notifications` - notification store (read/unread state, unread count)
//! - `table` - generic table state (filter, stable sort, pagination)
//! - `models` - notification and user records, user table columns
//! - `seed` - built-in seed lists and JSON seed files
//! - `session` - per-session dashboard state and interaction dispatch
//! - `auth` - login form field validation
//! - `view` - UI-agnostic view models and plain-text rendering
//! - `config`, `fmt`, `util` - configuration, text helpers, label parsing

pub mod auth;
pub mod config;
pub mod fmt;
pub mod models;
pub mod notifications;
pub mod seed;
pub mod session;
pub mod table;
pub mod util;
pub mod view;
