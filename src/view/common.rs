//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. The CLI renders them as plain text; a web frontend
//! would map them to CSS classes.

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Warning level. E.g. "pending" users.
    Warning,
    /// Positive/active. E.g. "active" users.
    Active,
    /// Dimmed. E.g. inactive users, read notifications.
    Dimmed,
    /// Accent. E.g. unread notifications.
    Accent,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Pagination footer data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_count: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// "Showing N of M ..." text.
    pub summary: String,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
    /// `None` when the table is unsorted.
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
    pub page: PageInfo,
}
