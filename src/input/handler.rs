use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation (with Shift modifier for reordering)
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_up()?;
            } else {
                app.move_selection_up();
            }
            Ok(false)
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_down()?;
            } else {
                app.move_selection_down();
            }
            Ok(false)
        }

        // Focus the task input
        KeyCode::Enter => {
            app.open_task_input();
            Ok(false)
        }

        // Start the focus timer (Space never reaches here while typing a task)
        KeyCode::Char(' ') => {
            app.start_timer();
            Ok(false)
        }

        // Reset the focus timer
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }

        // Toggle completed for the selected task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('x') => {
            app.toggle_selected()?;
            Ok(false)
        }

        // Delete the selected task
        KeyCode::Delete => {
            app.delete_selected()?;
            Ok(false)
        }

        // Toggle light/dark theme
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme()?;
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing a new task
fn handle_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_task_input()?;
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_task_input();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }
        // Printable keys edit the buffer; Space types a literal space here
        KeyCode::Char(c) => {
            app.input_push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle mouse events: click on a checkbox cell toggles the task,
/// press-drag-release elsewhere on a row drives the reorder protocol.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Result<()> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(hit) = app.hit_test(mouse.column, mouse.row) {
                if hit.on_checkbox {
                    app.toggle_task(hit.index)?;
                } else {
                    app.begin_drag(hit.index);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.drag_over(mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.end_drag()?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TimerState, SESSION_SECS};
    use crate::persistence::Store;
    use ratatui::layout::Rect;

    fn test_app_with(texts: &[&str]) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let mut app = AppState::new(Store::at(dir.path()));
        for text in texts {
            app.add_task(text.to_string()).unwrap();
        }
        (dir, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn order(app: &AppState) -> Vec<&str> {
        app.board.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_enter_focuses_task_input() {
        let (_dir, mut app) = test_app_with(&[]);
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_typing_and_submitting_adds_task() {
        let (_dir, mut app) = test_app_with(&[]);
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        for c in "Buy milk".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(order(&app), vec!["Buy milk"]);
    }

    #[test]
    fn test_space_starts_timer_in_normal_mode() {
        let (_dir, mut app) = test_app_with(&[]);
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.timer.state(), TimerState::Running);
    }

    #[test]
    fn test_space_inside_input_types_a_space() {
        let (_dir, mut app) = test_app_with(&[]);
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('b'))).unwrap();

        assert_eq!(app.input_buffer, "a b");
        assert_eq!(app.timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_reset_key() {
        let (_dir, mut app) = test_app_with(&[]);
        app.start_timer();
        app.advance_timer(60).unwrap();

        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.timer.state(), TimerState::Idle);
        assert_eq!(app.timer.remaining_secs(), SESSION_SECS);
    }

    #[test]
    fn test_toggle_and_delete_keys() {
        let (_dir, mut app) = test_app_with(&["A", "B"]);

        handle_key(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert!(app.board.tasks()[0].completed);

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert_eq!(order(&app), vec!["B"]);
    }

    #[test]
    fn test_shift_arrows_reorder() {
        let (_dir, mut app) = test_app_with(&["a", "b", "c"]);

        handle_key(&mut app, shift_key(KeyCode::Down)).unwrap();
        assert_eq!(order(&app), vec!["b", "a", "c"]);

        handle_key(&mut app, shift_key(KeyCode::Up)).unwrap();
        assert_eq!(order(&app), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_plain_arrows_move_selection_only() {
        let (_dir, mut app) = test_app_with(&["a", "b"]);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);
        assert_eq!(order(&app), vec!["a", "b"]);
    }

    #[test]
    fn test_theme_key() {
        let (_dir, mut app) = test_app_with(&[]);
        handle_key(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.theme, crate::domain::Theme::Light);
    }

    #[test]
    fn test_quit_keys() {
        let (_dir, mut app) = test_app_with(&[]);
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert!(handle_key(&mut app, key(KeyCode::Esc)).unwrap());
        assert!(!handle_key(&mut app, key(KeyCode::Char('z'))).unwrap());
    }

    #[test]
    fn test_esc_cancels_input_without_adding() {
        let (_dir, mut app) = test_app_with(&[]);
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        let quit = handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        assert!(!quit);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.board.is_empty());
    }

    #[test]
    fn test_click_on_checkbox_toggles() {
        let (_dir, mut app) = test_app_with(&["A", "B"]);
        app.list_viewport = Some(Rect::new(0, 0, 30, 10));

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 1, 1)).unwrap();
        assert!(app.board.tasks()[1].completed);
        assert!(app.drag.is_none());
    }

    #[test]
    fn test_press_drag_release_reorders() {
        let (_dir, mut app) = test_app_with(&["a", "b", "c"]);
        app.list_viewport = Some(Rect::new(0, 0, 30, 10));

        // Grab row 0 by its text, drag below the list, release
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 10, 0)).unwrap();
        assert!(app.drag.is_some());

        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 10, 6)).unwrap();
        assert_eq!(order(&app), vec!["b", "c", "a"]);

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 10, 6)).unwrap();
        assert!(app.drag.is_none());
        assert_eq!(order(&app), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_click_outside_list_is_ignored() {
        let (_dir, mut app) = test_app_with(&["a"]);
        app.list_viewport = Some(Rect::new(0, 0, 30, 10));

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 50, 20)).unwrap();
        assert!(app.drag.is_none());
        assert!(!app.board.tasks()[0].completed);
    }
}
