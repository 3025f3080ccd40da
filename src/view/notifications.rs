//! Notification popover view model.

use crate::fmt::normalize_for_display;
use crate::notifications::{NotificationStore, NotificationTab};
use crate::view::common::RowStyleClass;

/// One entry of the popover list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItemView {
    pub id: i64,
    pub icon: &'static str,
    pub title: String,
    pub description: String,
    pub time: String,
    pub style: RowStyleClass,
}

/// Popover contents for the selected tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationListView {
    pub title: String,
    pub tab: NotificationTab,
    /// Badge count on the bell icon; `None` hides the badge.
    pub badge: Option<usize>,
    pub can_mark_all_read: bool,
    pub items: Vec<NotificationItemView>,
    /// Shown instead of the list when `items` is empty.
    pub empty_message: Option<String>,
}

pub fn build_notifications_view(
    store: &NotificationStore,
    tab: NotificationTab,
) -> NotificationListView {
    let unread = store.unread_count();
    let items: Vec<NotificationItemView> = store
        .visible(tab)
        .into_iter()
        .map(|n| NotificationItemView {
            id: n.id,
            icon: n.kind.icon(),
            title: normalize_for_display(&n.title),
            description: normalize_for_display(&n.description),
            time: n.time.clone(),
            style: if n.read {
                RowStyleClass::Dimmed
            } else {
                RowStyleClass::Accent
            },
        })
        .collect();

    let empty_message = items.is_empty().then(|| match tab {
        NotificationTab::All => "No notifications".to_string(),
        NotificationTab::Unread => "You're all caught up".to_string(),
    });

    NotificationListView {
        title: format!("Notifications ({} unread)", unread),
        tab,
        badge: (unread > 0).then_some(unread),
        can_mark_all_read: unread > 0,
        items,
        empty_message,
    }
}
