pub mod chart_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use chart_pane::render_chart_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI from current state
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.theme, layout.keybindings_area);
    render_list_pane(f, app, layout.list_area);
    render_timer_pane(f, app, layout.timer_area);
    render_chart_pane(f, app, layout.chart_area);

    // Render the task input on top if active
    if app.ui_mode == UiMode::AddingTask {
        render_input_form(f, app, size);
    }
}
