use ratatui::{prelude::*, widgets::*};

use crate::messages::Severity;
use crate::models::Item;

/// One row of the item list; low-stock rows are flagged in red
pub fn item_row(item: &Item) -> ListItem<'static> {
    let mut spans = vec![Span::raw(item.display_line())];
    if item.needs_reorder() {
        spans.push(Span::styled(" !", Style::default().fg(Color::Red).bold()));
    }
    ListItem::new(Line::from(spans))
}

/// Field-by-field view of the selected item
pub fn detail_lines(item: &Item) -> Vec<Line<'static>> {
    let label = |text: &'static str| Span::styled(format!("{:<11}", text), Style::default().fg(Color::DarkGray));

    let category = match &item.category_name {
        Some(name) => format!("{} ({})", name, item.category_id),
        None => item.category_id.to_string(),
    };

    let stock = if item.needs_reorder() {
        Span::styled(
            format!("reorder {}", item.reorder_quantity()),
            Style::default().fg(Color::Red).bold(),
        )
    } else {
        Span::styled("ok", Style::default().fg(Color::Green))
    };

    vec![
        Line::from(vec![label("ID"), Span::raw(item.item_id.to_string())]),
        Line::from(vec![label("Name"), Span::styled(item.name.clone(), Style::default().bold())]),
        Line::from(vec![label("Category"), Span::raw(category)]),
        Line::from(vec![label("Quantity"), Span::raw(item.quantity.to_string())]),
        Line::from(vec![label("Min qty"), Span::raw(item.min_quantity.to_string())]),
        Line::from(vec![label("Stock"), stock]),
        Line::from(vec![label("Cost"), Span::raw(format!("{:.2}", item.cost))]),
        Line::from(vec![label("Price"), Span::raw(format!("{:.2}", item.price))]),
        Line::from(vec![label("Location"), Span::raw(item.location.clone())]),
        Line::from(vec![label("Vendor"), Span::raw(item.vendor.clone())]),
    ]
}

/// Renders the command key legend
pub fn render_commands(enabled: bool) -> Paragraph<'static> {
    let key_style = if enabled {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line> = [("f", "Fetch Items"), ("a", "Add Item"), ("e", "Edit Item"), ("d", "Delete Item")]
        .into_iter()
        .map(|(key, text)| Line::from(vec![Span::styled(format!(" {} ", key), key_style), Span::raw(text)]))
        .collect();

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Commands "))
}

/// Dialog border color
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
