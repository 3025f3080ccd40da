//! Plain-text rendering of view models, used by the CLI.

use crate::fmt::fit;
use crate::view::common::{RowStyleClass, TableViewModel};
use crate::view::notifications::NotificationListView;

/// Marker prefixed to a row so styles survive in plain text.
fn style_marker(style: RowStyleClass) -> char {
    match style {
        RowStyleClass::Normal => ' ',
        RowStyleClass::Warning => '!',
        RowStyleClass::Active => '+',
        RowStyleClass::Dimmed => '-',
        RowStyleClass::Accent => '*',
    }
}

/// Renders a table view model. The last column takes whatever width it needs.
pub fn render_table<Id>(view: &TableViewModel<Id>) -> String {
    let mut out = String::new();
    out.push_str(&view.title);
    out.push('\n');

    let width_of = |i: usize| view.widths.get(i).copied().map(usize::from);
    let line = |cells: Vec<String>| -> String {
        let last = cells.len().saturating_sub(1);
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| match width_of(i) {
                Some(w) if i < last => fit(c, w),
                _ => c.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    };

    let headers: Vec<String> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| match view.sort_column {
            Some(col) if col == i => {
                format!("{}{}", h, if view.sort_ascending { "▲" } else { "▼" })
            }
            _ => h.clone(),
        })
        .collect();
    out.push_str("  ");
    out.push_str(&line(headers));
    out.push('\n');

    if view.rows.is_empty() {
        out.push_str("  No results.\n");
    }
    for row in &view.rows {
        out.push(style_marker(row.style));
        out.push(' ');
        out.push_str(&line(row.cells.iter().map(|c| c.text.clone()).collect()));
        out.push('\n');
    }

    out.push_str(&format!(
        "{}  [{}prev] [{}next]\n",
        view.page.summary,
        if view.page.can_go_previous { "" } else { "no " },
        if view.page.can_go_next { "" } else { "no " },
    ));
    out
}

/// Renders the notification popover.
pub fn render_notifications(view: &NotificationListView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} [{}]\n", view.title, view.tab.name()));
    if let Some(msg) = &view.empty_message {
        out.push_str(&format!("  {}\n", msg));
    }
    for item in &view.items {
        out.push_str(&format!(
            "{} #{} [{}] {}: {} ({})\n",
            style_marker(item.style),
            item.id,
            item.icon,
            item.title,
            item.description,
            item.time,
        ));
    }
    out
}
