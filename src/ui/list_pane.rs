use crate::app::AppState;
use crate::domain::{Task, Theme};
use crate::ui::styles::{
    border_style, default_style, done_style, dragging_style, hint_style, selected_style,
    title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list pane.
///
/// Records the pane's inner rect on the app state so mouse events can be
/// mapped back onto rows.
pub fn render_list_pane(f: &mut Frame, app: &mut AppState, area: Rect) {
    let theme = app.theme;
    let date = Local::now().format("%a %b %d");
    let title = format!(" Tasks ({}) ", date);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(title, title_style(theme)));

    let inner = block.inner(area);
    app.list_viewport = Some(inner);

    if app.board.is_empty() {
        f.render_widget(block, area);
        let empty = Paragraph::new("No tasks yet. Stay focused ✨").style(hint_style(theme));
        f.render_widget(empty, inner);
        return;
    }

    let dragging_id = app.drag.map(|d| d.id);
    let items: Vec<ListItem> = app
        .board
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, theme);
            let style = if dragging_id == Some(task.id) {
                dragging_style(theme)
            } else if idx == app.selected_index {
                selected_style(theme)
            } else {
                default_style(theme)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Create a single row: a 4-cell checkbox followed by the task text
fn create_task_line(task: &Task, theme: Theme) -> Line<'static> {
    let checkbox = if task.completed { "[x] " } else { "[ ] " };

    let mut spans = vec![Span::raw(checkbox.to_string())];
    if task.completed {
        spans.push(Span::styled(task.text.clone(), done_style(theme)));
    } else {
        spans.push(Span::raw(task.text.clone()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_line_open() {
        let task = Task::new("Write report".to_string());
        let line = create_task_line(&task, Theme::Dark);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("[ ] "));
        assert!(line_str.contains("Write report"));
    }

    #[test]
    fn test_create_task_line_completed() {
        let mut task = Task::new("Done thing".to_string());
        task.completed = true;
        let line = create_task_line(&task, Theme::Dark);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("[x] "));
        assert!(line_str.contains("Done thing"));
    }

    #[test]
    fn test_blank_task_renders_checkbox_only() {
        let task = Task::new(String::new());
        let line = create_task_line(&task, Theme::Dark);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("[ ] "));
    }
}
