use crate::app::AppState;
use crate::ui::styles::{border_style, gauge_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the analytics pane: a proportional completion bar plus the
/// plain-text counters. Everything here is derived fresh from current state.
pub fn render_chart_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let summary = app.summary();

    let gauge = Gauge::default()
        .gauge_style(gauge_style(theme))
        .ratio(summary.completion_fraction())
        .label(format!("Completion: {}", summary.percent_label()));

    let lines = vec![
        Line::from(vec![
            Span::styled("Total tasks: ", title_style(theme)),
            Span::raw(summary.total_tasks.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Completed: ", title_style(theme)),
            Span::raw(summary.completed_tasks.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Sessions: ", title_style(theme)),
            Span::raw(summary.sessions.to_string()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(" Analytics ", title_style(theme)));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Completion gauge
            Constraint::Length(1), // Spacing
            Constraint::Min(3),    // Counters
        ])
        .split(block.inner(area));

    f.render_widget(block, area);
    f.render_widget(gauge, chunks[0]);
    f.render_widget(Paragraph::new(lines), chunks[2]);
}
