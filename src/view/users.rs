//! Users table view model.

use crate::models::{UserColumn, UserRecord, UserStatus, UserTable};
use crate::table::TableRow;
use crate::view::common::{PageInfo, RowStyleClass, TableViewModel, ViewCell, ViewRow};

const WIDTHS: &[u16] = &[40, 10, 10, 16];

fn status_style(status: UserStatus) -> RowStyleClass {
    match status {
        UserStatus::Active => RowStyleClass::Active,
        UserStatus::Inactive => RowStyleClass::Dimmed,
        UserStatus::Pending => RowStyleClass::Warning,
    }
}

/// Builds a UI-agnostic view model for the current page of the users table.
pub fn build_users_view(table: &UserTable) -> TableViewModel<String> {
    let rows: Vec<ViewRow<String>> = table
        .current_page()
        .into_iter()
        .map(|user: &UserRecord| {
            let mut cells: Vec<ViewCell> = user.cells().into_iter().map(ViewCell::plain).collect();
            if let Some(cell) = cells.get_mut(UserColumn::Status.index()) {
                *cell = ViewCell::styled(std::mem::take(&mut cell.text), status_style(user.status));
            }
            let style = match user.status {
                UserStatus::Inactive => RowStyleClass::Dimmed,
                _ => RowStyleClass::Normal,
            };
            ViewRow {
                id: user.id(),
                cells,
                style,
            }
        })
        .collect();

    let sort = table.sort();
    let filter_info = table
        .filter()
        .map(|f| format!(" [filter: {}]", f))
        .unwrap_or_default();
    let sort_info = sort
        .and_then(|s| {
            UserColumn::from_index(s.column)
                .map(|c| format!(", sort: {} {}", c.header().to_lowercase(), s.direction.as_str()))
        })
        .unwrap_or_default();

    let page_count = table.page_count();
    let title = format!(
        "Users (page {}/{}{}){}",
        if page_count == 0 { 0 } else { table.page_index() + 1 },
        page_count,
        sort_info,
        filter_info,
    );

    TableViewModel {
        title,
        headers: UserRecord::headers().iter().map(|s| s.to_string()).collect(),
        widths: WIDTHS.to_vec(),
        rows,
        sort_column: sort.map(|s| s.column),
        sort_ascending: sort.is_none_or(|s| s.direction.is_ascending()),
        page: PageInfo {
            page_index: table.page_index(),
            page_count,
            can_go_previous: table.can_go_previous(),
            can_go_next: table.can_go_next(),
            summary: table.summary("users"),
        },
    }
}
