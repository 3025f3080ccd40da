//! Record types for notifications and users.

mod user_row;

pub use user_row::*;

use serde::{Deserialize, Serialize};

/// Notification category. Unknown categories deserialize to `Other` and get
/// the default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Update,
    Reminder,
    #[default]
    #[serde(other)]
    Other,
}

impl NotificationKind {
    /// Icon name used by the popover list.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Message => "message-square",
            Self::Update => "refresh-cw",
            Self::Reminder => "calendar",
            Self::Other => "bell",
        }
    }
}

/// A single notification shown in the navbar popover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Display-only label such as "5 min ago".
    pub time: String,
    pub read: bool,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
}

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    /// Sort rank; matches alphabetical order of the labels.
    pub fn rank(&self) -> i64 {
        match self {
            Self::Active => 0,
            Self::Inactive => 1,
            Self::Pending => 2,
        }
    }
}

/// A row of the user-management table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    /// Display-only label such as "2 minutes ago".
    pub last_active: String,
    pub initials: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kind_fallback() {
        let json = r#"{"id":7,"title":"t","description":"d","time":"now","read":false,"type":"alert"}"#;
        let n: NotificationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::Other);
        assert_eq!(n.kind.icon(), "bell");

        let json = r#"{"id":8,"title":"t","description":"d","time":"now","read":true}"#;
        let n: NotificationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::Other);
    }

    #[test]
    fn test_user_record_camel_case() {
        let json = r#"{"id":"1","name":"Alex Morgan","email":"alex@example.com","role":"Admin",
            "status":"pending","lastActive":"2 minutes ago","initials":"AM"}"#;
        let u: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(u.status, UserStatus::Pending);
        assert_eq!(u.last_active, "2 minutes ago");
    }

    #[test]
    fn test_status_rank_matches_label_order() {
        let mut statuses = [UserStatus::Pending, UserStatus::Active, UserStatus::Inactive];
        statuses.sort_by_key(|s| s.rank());
        let labels: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }
}
