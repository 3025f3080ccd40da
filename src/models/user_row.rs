//! User table columns and TableRow impl.

use super::UserRecord;
use crate::table::{SortDirection, SortKey, TableRow, TableState};
use crate::util::parse_relative_label;

/// Sortable columns of the user table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserColumn {
    Name,
    Role,
    Status,
    LastActive,
}

impl UserColumn {
    pub fn all() -> &'static [UserColumn] {
        &[
            UserColumn::Name,
            UserColumn::Role,
            UserColumn::Status,
            UserColumn::LastActive,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Role => 1,
            Self::Status => 2,
            Self::LastActive => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn header(&self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Role => "ROLE",
            Self::Status => "STATUS",
            Self::LastActive => "LAST ACTIVE",
        }
    }

    /// Parses a column name as typed on the command line.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "name" => Some(Self::Name),
            "role" => Some(Self::Role),
            "status" => Some(Self::Status),
            "lastactive" => Some(Self::LastActive),
            _ => None,
        }
    }
}

impl UserRecord {
    /// Elapsed seconds described by the last-active label, if it parses.
    pub fn last_active_secs(&self) -> Option<i64> {
        parse_relative_label(&self.last_active)
            .ok()
            .map(|d| d.num_seconds())
    }
}

impl TableRow for UserRecord {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn column_count() -> usize {
        UserColumn::all().len()
    }

    fn headers() -> Vec<&'static str> {
        UserColumn::all().iter().map(|c| c.header()).collect()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{} <{}>", self.name, self.email),
            self.role.clone(),
            self.status.as_str().to_string(),
            self.last_active.clone(),
        ]
    }

    fn sort_key(&self, column: usize) -> SortKey {
        match UserColumn::from_index(column) {
            // Text columns ignore case; equal keys keep seed order.
            Some(UserColumn::Name) => SortKey::String(self.name.to_lowercase()),
            Some(UserColumn::Role) => SortKey::String(self.role.to_lowercase()),
            Some(UserColumn::Status) => SortKey::Integer(self.status.rank()),
            // Unparseable labels sort after every known age.
            Some(UserColumn::LastActive) => {
                SortKey::Integer(self.last_active_secs().unwrap_or(i64::MAX))
            }
            None => SortKey::Integer(0),
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Table state over user records.
pub type UserTable = TableState<UserRecord>;

impl TableState<UserRecord> {
    /// Name search box. Case-insensitive substring match.
    pub fn set_name_filter(&mut self, substring: &str) {
        self.set_filter(Some(substring.to_string()));
    }

    pub fn set_sort_by(&mut self, column: UserColumn, direction: SortDirection) {
        self.set_sort(column.index(), direction);
    }

    pub fn sort_column(&self) -> Option<UserColumn> {
        self.sort().and_then(|s| UserColumn::from_index(s.column))
    }
}
