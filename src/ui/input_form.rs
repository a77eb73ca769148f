use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the new-task input over the rest of the UI
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let input_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(app.input_buffer.clone(), modal_title_style(theme)),
        Span::styled("█", modal_title_style(theme)), // Cursor
    ]);

    let lines = vec![
        Line::raw(""),
        input_line,
        Line::raw(""),
        Line::raw("Enter to add  ·  Esc to cancel"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" New Task ", modal_title_style(theme)))
                .style(modal_bg_style(theme)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
