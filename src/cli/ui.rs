use super::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rustpager::PaginationControls;

pub fn draw(f: &mut Frame, app: &mut App) {
    let filter_height = if app.editing_filter { 3 } else { 0 };
    let status_height = if app.status.is_some() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),                // Current page
                Constraint::Length(filter_height), // Filter input while editing
                Constraint::Length(status_height), // Filter errors
                Constraint::Length(3),             // Pagination controls
            ]
            .as_ref(),
        )
        .split(f.area());

    // Current page
    let range = app.view.state().item_range();
    let items: Vec<ListItem> = app
        .view
        .current_items()
        .iter()
        .zip(range)
        .map(|(item, index)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>6}  ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(item.as_str()),
            ]))
        })
        .collect();

    let title = if app.filter_text.is_empty() {
        " Items ".to_string()
    } else {
        format!(" Items matching '{}' ", app.filter_text)
    };

    let items_panel = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::White));

    f.render_widget(items_panel, chunks[0]);

    if app.editing_filter {
        f.render_widget(&app.filter_input, chunks[1]);
    }

    if let Some(status) = &app.status {
        f.render_widget(Paragraph::new(status.clone()), chunks[2]);
    }

    let controls = app.view.controls();
    let bar = Paragraph::new(controls_line(&controls, app.options.as_slice()))
        .block(Block::default().borders(Borders::ALL).title(" Pages "));
    f.render_widget(bar, chunks[3]);
}

/// One-line rendering of the control bar.
pub fn controls_line(controls: &PaginationControls, options: &[usize]) -> Line<'static> {
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);
    let current_size = controls.state().page_size();

    let mut spans = vec![
        Span::styled(
            "◀ Prev",
            if controls.can_previous() { enabled } else { disabled },
        ),
        Span::raw("  "),
        Span::styled(
            controls.page_label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Next ▶",
            if controls.can_next() { enabled } else { disabled },
        ),
        Span::raw("   "),
        Span::raw(controls.summary().to_string()),
        Span::raw("   Per page:"),
    ];

    for size in options {
        let style = if *size == current_size {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(size.to_string(), style));
    }

    Line::from(spans)
}
