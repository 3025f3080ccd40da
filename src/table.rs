//! Generic table state: filtering, sorting, pagination.
//!
//! The pipeline is fixed: filter, then stable sort, then slice. Each stage is
//! a free function so it can be tested on its own; [`TableState`] composes
//! them over an owned, never-mutated item list.

use std::cmp::Ordering;

use tracing::{debug, warn};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort key types for table columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Integer(i64),
    Float(f64),
    String(String),
}

impl SortKey {
    /// Total order between keys. Keys of different kinds compare equal,
    /// which keeps the sort stable for them.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The single active sort: column index plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub direction: SortDirection,
}

/// Trait for table row items.
pub trait TableRow: Clone {
    /// Identifier type carried into view rows.
    type Id: Clone + PartialEq;

    /// Unique identifier.
    fn id(&self) -> Self::Id;

    /// Number of columns.
    fn column_count() -> usize;

    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// Cell values as strings.
    fn cells(&self) -> Vec<String>;

    /// Sort key for the specified column.
    fn sort_key(&self, column: usize) -> SortKey;

    /// Check if item matches the filter.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Keeps items matching `filter`, preserving order. `None` or an empty
/// filter passes everything.
pub fn filter_rows<'a, T: TableRow>(items: &'a [T], filter: Option<&str>) -> Vec<&'a T> {
    match filter.filter(|f| !f.is_empty()) {
        Some(f) => items.iter().filter(|item| item.matches_filter(f)).collect(),
        None => items.iter().collect(),
    }
}

/// Stable sort by the given column. Tied rows keep their relative order in
/// both directions.
pub fn sort_rows<T: TableRow>(rows: &mut [&T], sort: Option<SortSpec>) {
    let Some(SortSpec { column, direction }) = sort else {
        return;
    };

    rows.sort_by(|a, b| {
        let cmp = a.sort_key(column).compare(&b.sort_key(column));
        if direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Returns the `[page_index * page_size, page_index * page_size + page_size)`
/// window of `rows`, clamped to its length. A page size of 0 is treated as 1.
pub fn paginate<R: Clone>(rows: &[R], page_index: usize, page_size: usize) -> Vec<R> {
    let size = page_size.max(1);
    let start = page_index.saturating_mul(size);
    if start >= rows.len() {
        return Vec::new();
    }
    let end = start.saturating_add(size).min(rows.len());
    rows[start..end].to_vec()
}

/// Number of pages needed for `rows` rows. Zero rows means zero pages.
pub fn page_count(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1))
}

/// State for a table widget.
#[derive(Debug, Clone)]
pub struct TableState<T: TableRow> {
    /// All items, in seed order. Never reordered.
    items: Vec<T>,
    /// Filter string.
    filter: Option<String>,
    /// Active sort, if any.
    sort: Option<SortSpec>,
    /// Current page (zero-based).
    page_index: usize,
    /// Rows per page, always at least 1.
    page_size: usize,
}

impl<T: TableRow> Default for TableState<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: TableRow> TableState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_page_size(items, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            filter: None,
            sort: None,
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// All items in seed order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets filter string. Empty strings clear the filter. Resets to the
    /// first page.
    pub fn set_filter(&mut self, filter: Option<String>) {
        let filter = filter.filter(|f| !f.is_empty());
        debug!(filter = ?filter, "table filter changed");
        self.filter = filter;
        self.page_index = 0;
    }

    /// Sets the single active sort column. Resets to the first page.
    pub fn set_sort(&mut self, column: usize, direction: SortDirection) {
        if column >= T::column_count() {
            warn!(column, "ignoring sort on unknown column");
            return;
        }
        debug!(column, direction = direction.as_str(), "table sort changed");
        self.sort = Some(SortSpec { column, direction });
        self.page_index = 0;
    }

    pub fn clear_sort(&mut self) {
        debug!("table sort cleared");
        self.sort = None;
        self.page_index = 0;
    }

    /// Header-click cycle: unsorted, ascending, descending, unsorted.
    /// Clicking a different column starts again at ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        let current_sort = self.sort;
        match current_sort {
            Some(SortSpec {
                column: current,
                direction: SortDirection::Ascending,
            }) if current == column => self.set_sort(column, SortDirection::Descending),
            Some(SortSpec {
                column: current,
                direction: SortDirection::Descending,
            }) if current == column => self.clear_sort(),
            _ => self.set_sort(column, SortDirection::Ascending),
        }
    }

    /// Returns filtered and sorted items.
    pub fn rows(&self) -> Vec<&T> {
        let mut rows = filter_rows(&self.items, self.filter.as_deref());
        sort_rows(&mut rows, self.sort);
        rows
    }

    /// Returns one page of the filtered and sorted items.
    pub fn page(&self, page_index: usize, page_size: usize) -> Vec<&T> {
        paginate(&self.rows(), page_index, page_size)
    }

    /// Returns the page at the current index and size.
    pub fn current_page(&self) -> Vec<&T> {
        self.page(self.page_index, self.page_size)
    }

    pub fn filtered_count(&self) -> usize {
        filter_rows(&self.items, self.filter.as_deref()).len()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_count(), self.page_size)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.page_index += 1;
            debug!(page = self.page_index, "next page");
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.page_index -= 1;
            debug!(page = self.page_index, "previous page");
        }
    }

    /// Jumps to a page, clamping to `[0, page_count - 1]`.
    pub fn set_page_index(&mut self, page_index: i64) {
        let last = self.page_count().saturating_sub(1);
        let clamped = usize::try_from(page_index.max(0))
            .unwrap_or(usize::MAX)
            .min(last);
        if clamped as i64 != page_index {
            warn!(requested = page_index, clamped, "page index clamped");
        }
        self.page_index = clamped;
    }

    /// Changes rows per page, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            warn!("page size 0 clamped to 1");
        }
        let page_size = page_size.max(1);
        let top_row = self.page_index.saturating_mul(self.page_size);
        self.page_size = page_size;
        self.page_index = top_row / page_size;
        debug!(page_size, page = self.page_index, "page size changed");
    }

    /// "Showing N of M" footer text.
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Showing {} of {} {}",
            self.filtered_count(),
            self.total_count(),
            noun
        )
    }
}
