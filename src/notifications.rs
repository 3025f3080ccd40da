//! Notification store behind the navbar popover.

use tracing::debug;

use crate::models::NotificationRecord;

/// Popover tab selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationTab {
    #[default]
    All,
    Unread,
}

impl NotificationTab {
    pub fn name(&self) -> &'static str {
        match self {
            NotificationTab::All => "All",
            NotificationTab::Unread => "Unread",
        }
    }
}

/// Owns the notification list. Records are never added or removed; only
/// their `read` flag changes.
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    records: Vec<NotificationRecord>,
}

impl NotificationStore {
    pub fn new(records: Vec<NotificationRecord>) -> Self {
        Self { records }
    }

    /// Marks one record as read. Unknown ids are ignored. Returns `true`
    /// when a record went from unread to read.
    pub fn mark_as_read(&mut self, id: i64) -> bool {
        match self.records.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                debug!(id, unread = self.unread_count(), "notification marked as read");
                true
            }
            Some(_) => false,
            None => {
                debug!(id, "mark as read: unknown notification id");
                false
            }
        }
    }

    /// Marks every record as read. Returns how many changed.
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.records.iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        debug!(changed, "all notifications marked as read");
        changed
    }

    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|n| !n.read).count()
    }

    pub fn has_unread(&self) -> bool {
        self.records.iter().any(|n| !n.read)
    }

    /// Unread records in original order.
    pub fn filter_unread(&self) -> Vec<&NotificationRecord> {
        self.records.iter().filter(|n| !n.read).collect()
    }

    /// All records in original order.
    pub fn filter_all(&self) -> Vec<&NotificationRecord> {
        self.records.iter().collect()
    }

    pub fn visible(&self, tab: NotificationTab) -> Vec<&NotificationRecord> {
        match tab {
            NotificationTab::All => self.filter_all(),
            NotificationTab::Unread => self.filter_unread(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&NotificationRecord> {
        self.records.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use crate::seed::builtin_notifications;

    fn record(id: i64, read: bool) -> NotificationRecord {
        NotificationRecord {
            id,
            title: format!("n{id}"),
            description: String::new(),
            time: "now".to_string(),
            read,
            kind: NotificationKind::Other,
        }
    }

    fn read_flags(store: &NotificationStore) -> Vec<(i64, bool)> {
        store.filter_all().iter().map(|n| (n.id, n.read)).collect()
    }

    #[test]
    fn test_seed_unread_count() {
        let mut store = NotificationStore::new(builtin_notifications());
        assert_eq!(store.unread_count(), 2);
        assert_eq!(store.mark_all_as_read(), 2);
        assert_eq!(store.unread_count(), 0);
        assert!(!store.has_unread());
    }

    #[test]
    fn test_mark_as_read_touches_only_target() {
        let mut store = NotificationStore::new(vec![
            record(1, false),
            record(2, false),
            record(3, true),
            record(4, false),
        ]);

        assert!(store.mark_as_read(2));
        assert_eq!(
            read_flags(&store),
            vec![(1, false), (2, true), (3, true), (4, false)]
        );
        assert_eq!(store.unread_count(), 2);

        let before = read_flags(&store);
        assert!(!store.mark_as_read(2));
        assert_eq!(read_flags(&store), before);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = NotificationStore::new(vec![record(1, false)]);
        assert!(!store.mark_as_read(42));
        assert_eq!(store.unread_count(), 1);
        assert!(store.get(42).is_none());
    }

    #[test]
    fn test_filters_preserve_order() {
        let store = NotificationStore::new(vec![
            record(5, false),
            record(2, true),
            record(9, false),
            record(1, true),
        ]);
        let unread: Vec<i64> = store.filter_unread().iter().map(|n| n.id).collect();
        assert_eq!(unread, vec![5, 9]);
        let all: Vec<i64> = store.visible(NotificationTab::All).iter().map(|n| n.id).collect();
        assert_eq!(all, vec![5, 2, 9, 1]);
        assert_eq!(store.visible(NotificationTab::Unread).len(), 2);
    }

    #[test]
    fn test_empty_store() {
        let mut store = NotificationStore::default();
        assert!(store.is_empty());
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.mark_all_as_read(), 0);
        assert!(!store.mark_as_read(1));
        assert!(store.filter_unread().is_empty());
        assert!(store.filter_all().is_empty());
    }

    #[test]
    fn test_ids_stable_across_mutations() {
        let mut store = NotificationStore::new(builtin_notifications());
        let ids_before: Vec<i64> = store.filter_all().iter().map(|n| n.id).collect();
        store.mark_as_read(1);
        store.mark_all_as_read();
        let ids_after: Vec<i64> = store.filter_all().iter().map(|n| n.id).collect();
        assert_eq!(ids_before, ids_after);
        assert_eq!(store.len(), 3);
    }
}
