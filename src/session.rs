//! Dashboard session state and interaction dispatch.
//!
//! One [`Dashboard`] per session. Interactions arrive as [`Action`]s and are
//! applied synchronously, one at a time, in the order they were dispatched.

use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::models::{UserColumn, UserTable};
use crate::notifications::{NotificationStore, NotificationTab};
use crate::seed::{SeedData, SeedError};
use crate::table::SortDirection;
use crate::view::common::TableViewModel;
use crate::view::notifications::{NotificationListView, build_notifications_view};
use crate::view::users::build_users_view;

/// Two-valued appearance setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(name: &str) -> Option<Theme> {
        match name.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// A user interaction forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    SetTheme(Theme),
    SelectNotificationTab(NotificationTab),
    MarkAsRead(i64),
    MarkAllAsRead,
    SetNameFilter(String),
    SetSort(UserColumn, SortDirection),
    ToggleSort(UserColumn),
    ClearSort,
    NextPage,
    PreviousPage,
    GoToPage(i64),
    SetPageSize(usize),
    SignOut,
}

/// Result of dispatching an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Visible state changed; re-render.
    Changed,
    /// Nothing observable changed.
    Unchanged,
    /// The session ended.
    SignedOut,
}

/// Main session state.
#[derive(Debug)]
pub struct Dashboard {
    /// Navbar notification popover.
    pub notifications: NotificationStore,
    /// Selected popover tab.
    pub notification_tab: NotificationTab,
    /// User-management table.
    pub users: UserTable,
    pub theme: Theme,
    /// Set by `SignOut`; further actions are ignored.
    pub signed_out: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::from_seed(SeedData::builtin(), &DashboardConfig::default())
    }
}

impl Dashboard {
    pub fn from_seed(seed: SeedData, config: &DashboardConfig) -> Self {
        let mut users = UserTable::with_page_size(seed.users, config.page_size);
        if let Some(filter) = &config.name_filter {
            users.set_name_filter(filter);
        }
        let dashboard = Self {
            notifications: NotificationStore::new(seed.notifications),
            notification_tab: NotificationTab::All,
            users,
            theme: config.theme,
            signed_out: false,
        };
        info!(
            notifications = dashboard.notifications.len(),
            unread = dashboard.notifications.unread_count(),
            users = dashboard.users.total_count(),
            theme = dashboard.theme.name(),
            "dashboard session started"
        );
        dashboard
    }

    /// Builds a session from configuration, loading the seed it names.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, SeedError> {
        let seed = config.load_seed()?;
        Ok(Self::from_seed(seed, config))
    }

    /// Applies one interaction.
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        if self.signed_out {
            debug!(?action, "ignoring action after sign-out");
            return ActionOutcome::Unchanged;
        }

        let before = self.fingerprint();
        match action {
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                debug!(theme = self.theme.name(), "theme toggled");
            }
            Action::SetTheme(theme) => self.theme = theme,
            Action::SelectNotificationTab(tab) => self.notification_tab = tab,
            Action::MarkAsRead(id) => {
                self.notifications.mark_as_read(id);
            }
            Action::MarkAllAsRead => {
                self.notifications.mark_all_as_read();
            }
            Action::SetNameFilter(filter) => self.users.set_name_filter(&filter),
            Action::SetSort(column, direction) => self.users.set_sort_by(column, direction),
            Action::ToggleSort(column) => self.users.toggle_sort(column.index()),
            Action::ClearSort => self.users.clear_sort(),
            Action::NextPage => self.users.next_page(),
            Action::PreviousPage => self.users.previous_page(),
            Action::GoToPage(index) => self.users.set_page_index(index),
            Action::SetPageSize(size) => self.users.set_page_size(size),
            Action::SignOut => {
                self.signed_out = true;
                info!("signed out");
                return ActionOutcome::SignedOut;
            }
        }

        if self.fingerprint() == before {
            ActionOutcome::Unchanged
        } else {
            ActionOutcome::Changed
        }
    }

    pub fn users_view(&self) -> TableViewModel<String> {
        build_users_view(&self.users)
    }

    pub fn notifications_view(&self) -> NotificationListView {
        build_notifications_view(&self.notifications, self.notification_tab)
    }

    /// Everything a render depends on, for change detection.
    fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            theme: self.theme,
            tab: self.notification_tab,
            read: self.notifications.filter_all().iter().map(|n| n.read).collect(),
            filter: self.users.filter().map(str::to_string),
            sort: self.users.sort().map(|s| (s.column, s.direction)),
            page_index: self.users.page_index(),
            page_size: self.users.page_size(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Fingerprint {
    theme: Theme,
    tab: NotificationTab,
    read: Vec<bool>,
    filter: Option<String>,
    sort: Option<(usize, SortDirection)>,
    page_index: usize,
    page_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        let mut dash = Dashboard::default();
        assert_eq!(dash.dispatch(Action::ToggleTheme), ActionOutcome::Changed);
        assert_eq!(dash.theme, Theme::Dark);
        assert_eq!(
            dash.dispatch(Action::SetTheme(Theme::Dark)),
            ActionOutcome::Unchanged
        );
        assert_eq!(Theme::parse("Light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_notification_actions() {
        let mut dash = Dashboard::default();
        assert_eq!(dash.notifications_view().badge, Some(2));
        assert_eq!(dash.dispatch(Action::MarkAsRead(1)), ActionOutcome::Changed);
        assert_eq!(dash.dispatch(Action::MarkAsRead(1)), ActionOutcome::Unchanged);
        assert_eq!(dash.dispatch(Action::MarkAsRead(99)), ActionOutcome::Unchanged);
        assert_eq!(dash.notifications.unread_count(), 1);
        dash.dispatch(Action::MarkAllAsRead);
        assert_eq!(dash.notifications.unread_count(), 0);
        assert_eq!(dash.notifications_view().badge, None);
    }

    #[test]
    fn test_actions_apply_in_order() {
        let config = DashboardConfig::default().with_page_size(3);
        let mut dash = Dashboard::from_config(&config).unwrap();
        dash.dispatch(Action::SetSort(UserColumn::Name, SortDirection::Ascending));
        dash.dispatch(Action::NextPage);
        dash.dispatch(Action::NextPage);
        assert_eq!(dash.users.page_index(), 2);

        // Filtering resets to the first page.
        dash.dispatch(Action::SetNameFilter("a".to_string()));
        assert_eq!(dash.users.page_index(), 0);

        assert_eq!(dash.dispatch(Action::GoToPage(-1)), ActionOutcome::Unchanged);
        assert_eq!(dash.dispatch(Action::GoToPage(50)), ActionOutcome::Changed);
        assert_eq!(dash.users.page_index(), 3);
        assert_eq!(dash.dispatch(Action::NextPage), ActionOutcome::Unchanged);

        let view = dash.users_view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, "8");
    }

    #[test]
    fn test_initial_filter_from_config() {
        let config = DashboardConfig::default().with_name_filter("son");
        let dash = Dashboard::from_config(&config).unwrap();
        assert_eq!(dash.users.filtered_count(), 2);
    }

    #[test]
    fn test_sign_out_stops_dispatch() {
        let mut dash = Dashboard::default();
        assert_eq!(dash.dispatch(Action::SignOut), ActionOutcome::SignedOut);
        assert_eq!(dash.dispatch(Action::ToggleTheme), ActionOutcome::Unchanged);
        assert_eq!(dash.theme, Theme::Light);
    }

    #[test]
    fn test_toggle_sort_through_dispatch() {
        let mut dash = Dashboard::default();
        dash.dispatch(Action::ToggleSort(UserColumn::LastActive));
        dash.dispatch(Action::ToggleSort(UserColumn::LastActive));
        assert_eq!(dash.users.sort_column(), Some(UserColumn::LastActive));
        assert_eq!(dash.users_view().rows[0].id, "10");
        dash.dispatch(Action::ClearSort);
        assert_eq!(dash.users.sort(), None);
    }
}
