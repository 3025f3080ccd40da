//! Session configuration.

use std::path::PathBuf;

use crate::seed::{SeedData, SeedError};
use crate::session::Theme;
use crate::table::DEFAULT_PAGE_SIZE;

/// Settings used to build a [`crate::session::Dashboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Rows per page of the users table.
    pub page_size: usize,
    /// JSON seed file; `None` uses the built-in lists.
    pub seed_path: Option<PathBuf>,
    pub theme: Theme,
    /// Initial contents of the user search box.
    pub name_filter: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed_path: None,
            theme: Theme::Light,
            name_filter: None,
        }
    }
}

impl DashboardConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_name_filter(mut self, filter: impl Into<String>) -> Self {
        self.name_filter = Some(filter.into());
        self
    }

    /// Resolves the seed data this configuration points at.
    pub fn load_seed(&self) -> Result<SeedData, SeedError> {
        match &self.seed_path {
            Some(path) => SeedData::from_path(path),
            None => Ok(SeedData::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.load_seed().unwrap(), SeedData::builtin());
    }

    #[test]
    fn test_builders_clamp_page_size() {
        let config = DashboardConfig::default()
            .with_page_size(0)
            .with_theme(Theme::Dark)
            .with_name_filter("a");
        assert_eq!(config.page_size, 1);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.name_filter.as_deref(), Some("a"));
    }

    #[test]
    fn test_missing_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::default().with_seed_path(dir.path().join("none.json"));
        assert!(matches!(config.load_seed(), Err(SeedError::Io(_))));
    }
}
