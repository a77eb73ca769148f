use crate::app::AppState;
use crate::domain::TimerState;
use crate::ui::styles::{border_style, flash_style, hint_style, idle_style, running_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the focus timer pane: countdown, state badge, transient
/// completion message
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;

    let badge = match app.timer.state() {
        TimerState::Running => Span::styled("⏱ RUNNING", running_style(theme)),
        TimerState::Idle => Span::styled("· idle", idle_style(theme)),
    };

    let clock_style = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(app.timer.display(), clock_style)),
        Line::raw(""),
        Line::from(badge),
        Line::raw(""),
    ];

    if let Some(flash) = &app.flash {
        lines.push(Line::from(Span::styled(
            flash.message.clone(),
            flash_style(theme),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Space start · r reset",
            hint_style(theme),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(" Focus Timer ", title_style(theme)));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
