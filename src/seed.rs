//! Seed data: the built-in lists and JSON seed files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{NotificationKind, NotificationRecord, UserRecord, UserStatus};

/// Errors that can occur while loading seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// I/O error while reading the seed file.
    Io(String),
    /// Malformed JSON or unexpected shape.
    Parse(String),
    /// Two notifications share an identifier.
    DuplicateId(i64),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Io(msg) => write!(f, "I/O error: {}", msg),
            SeedError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SeedError::DuplicateId(id) => write!(f, "Duplicate notification id: {}", id),
        }
    }
}

impl std::error::Error for SeedError {}

/// Initial contents of a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub notifications: Vec<NotificationRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl SeedData {
    pub fn builtin() -> Self {
        Self {
            notifications: builtin_notifications(),
            users: builtin_users(),
        }
    }

    /// Loads seed data from a JSON file. Missing sections default to empty.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| SeedError::Io(format!("{}: {}", path.display(), e)))?;
        let seed = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            notifications = seed.notifications.len(),
            users = seed.users.len(),
            "seed data loaded"
        );
        Ok(seed)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let seed: SeedData =
            serde_json::from_str(raw).map_err(|e| SeedError::Parse(e.to_string()))?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks that notification identifiers are unique.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::with_capacity(self.notifications.len());
        for n in &self.notifications {
            if !seen.insert(n.id) {
                return Err(SeedError::DuplicateId(n.id));
            }
        }
        Ok(())
    }
}

fn notification(
    id: i64,
    title: &str,
    description: &str,
    time: &str,
    read: bool,
    kind: NotificationKind,
) -> NotificationRecord {
    NotificationRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        time: time.to_string(),
        read,
        kind,
    }
}

/// Popover notifications: three entries, two unread.
pub fn builtin_notifications() -> Vec<NotificationRecord> {
    vec![
        notification(
            1,
            "New message",
            "Sara Chen sent you a message about the Q3 report",
            "5 min ago",
            false,
            NotificationKind::Message,
        ),
        notification(
            2,
            "System update",
            "Dashboard v2.4 is available with new reporting widgets",
            "1 hour ago",
            false,
            NotificationKind::Update,
        ),
        notification(
            3,
            "Meeting reminder",
            "Weekly team sync starts in 30 minutes",
            "2 hours ago",
            true,
            NotificationKind::Reminder,
        ),
    ]
}

fn user(
    id: &str,
    name: &str,
    role: &str,
    status: UserStatus,
    last_active: &str,
    initials: &str,
) -> UserRecord {
    let email = format!(
        "{}@example.com",
        name.split_whitespace().next().unwrap_or(name).to_lowercase()
    );
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email,
        role: role.to_string(),
        status,
        last_active: last_active.to_string(),
        initials: initials.to_string(),
    }
}

/// The ten users of the user-management page.
pub fn builtin_users() -> Vec<UserRecord> {
    use UserStatus::*;
    vec![
        user("1", "Alex Morgan", "Admin", Active, "2 minutes ago", "AM"),
        user("2", "Sara Chen", "Editor", Active, "1 hour ago", "SC"),
        user("3", "David Kim", "User", Active, "3 hours ago", "DK"),
        user("4", "Mia Johnson", "User", Inactive, "1 day ago", "MJ"),
        user("5", "Ryan Patel", "Editor", Pending, "2 days ago", "RP"),
        user("6", "Emma Wilson", "User", Active, "4 hours ago", "EW"),
        user("7", "Lucas Garcia", "Editor", Active, "5 hours ago", "LG"),
        user("8", "Sophia Lee", "Admin", Active, "1 day ago", "SL"),
        user("9", "Noah Martinez", "User", Inactive, "3 days ago", "NM"),
        user("10", "Olivia Brown", "User", Pending, "1 week ago", "OB"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_seed() {
        let seed = SeedData::builtin();
        assert_eq!(seed.users.len(), 10);
        assert_eq!(seed.notifications.len(), 3);
        assert_eq!(seed.users[3].email, "mia@example.com");
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"notifications": [
                {{"id": 1, "title": "a", "description": "b", "time": "now", "read": false, "type": "update"}}
            ]}}"#
        )
        .unwrap();

        let seed = SeedData::from_path(file.path()).unwrap();
        assert_eq!(seed.notifications.len(), 1);
        assert_eq!(seed.notifications[0].kind, NotificationKind::Update);
        assert!(seed.users.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"{"notifications": [
            {"id": 4, "title": "a", "description": "b", "time": "now", "read": false},
            {"id": 4, "title": "c", "description": "d", "time": "now", "read": true}
        ]}"#;
        assert_eq!(SeedData::from_json(raw), Err(SeedError::DuplicateId(4)));
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            SeedData::from_path(&missing),
            Err(SeedError::Io(_))
        ));
        assert!(matches!(
            SeedData::from_json("{not json"),
            Err(SeedError::Parse(_))
        ));
    }
}
