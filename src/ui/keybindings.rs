use crate::domain::Theme;
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, theme: Theme, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Shift+↑/↓ reorder   "),
        Span::raw("drag rows to reorder   "),
        Span::raw("Enter new task   "),
        Span::raw("Space start   "),
        Span::raw("r reset   "),
        Span::raw("d done   "),
        Span::raw("Del delete   "),
        Span::raw("t theme   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style(theme));
    f.render_widget(paragraph, area);
}
