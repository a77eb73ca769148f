use crate::domain::{FocusTimer, Summary, TaskBoard, Theme, TimerSignal, UiMode};
use crate::notifications;
use crate::persistence::Store;
use anyhow::Result;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long the completion message stays on screen
const FLASH_SECS: u64 = 5;

/// Width of the "[x] " checkbox cell at the start of each task row
const CHECKBOX_CELLS: u16 = 4;

/// Marker for the single task being dragged (at most one at a time).
/// Tracks the runtime ID, which stays stable while positions change.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub id: Uuid,
}

/// Transient status message shown in the timer pane
#[derive(Debug, Clone)]
pub struct Flash {
    pub message: String,
    expires_at: Instant,
}

/// Result of mapping a terminal position onto the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListHit {
    pub index: usize,
    pub on_checkbox: bool,
}

/// Main application state.
///
/// Owns the board, the timer, the session counter, and the store handle;
/// every mutating operation writes through to the store so memory and disk
/// stay equal. The render layer is a pure projection of this struct.
pub struct AppState {
    pub board: TaskBoard,
    pub timer: FocusTimer,
    pub sessions: u64,
    pub theme: Theme,
    pub ui_mode: UiMode,
    pub input_buffer: String,
    pub selected_index: usize,
    pub drag: Option<DragState>,
    pub flash: Option<Flash>,
    /// Inner rect of the task list, recorded at render time for mouse hit tests
    pub list_viewport: Option<Rect>,
    store: Store,
}

impl AppState {
    /// Build the app state from whatever the store currently holds
    pub fn new(store: Store) -> Self {
        Self {
            board: TaskBoard::from_tasks(store.load_tasks()),
            timer: FocusTimer::new(),
            sessions: store.load_sessions(),
            theme: store.load_theme(),
            ui_mode: UiMode::Normal,
            input_buffer: String::new(),
            selected_index: 0,
            drag: None,
            flash: None,
            list_viewport: None,
            store,
        }
    }

    // ---- task board ----

    /// Append a task and persist the board. Empty text is accepted and
    /// shows up as a blank entry.
    pub fn add_task(&mut self, text: String) -> Result<()> {
        self.board.add(text);
        self.store.save_tasks(self.board.tasks())
    }

    /// Flip the completed flag at `index`; out-of-range indices are ignored
    pub fn toggle_task(&mut self, index: usize) -> Result<()> {
        if self.board.toggle(index) {
            self.store.save_tasks(self.board.tasks())?;
        }
        Ok(())
    }

    pub fn toggle_selected(&mut self) -> Result<()> {
        self.toggle_task(self.selected_index)
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) -> Result<()> {
        if self.board.remove(self.selected_index).is_some() {
            self.clamp_selection();
            self.store.save_tasks(self.board.tasks())?;
        }
        Ok(())
    }

    /// Move the selected task one position up
    pub fn move_selected_up(&mut self) -> Result<()> {
        let from = self.selected_index;
        if from > 0 && self.board.move_task(from, from - 1) {
            self.selected_index = from - 1;
            self.store.save_tasks(self.board.tasks())?;
        }
        Ok(())
    }

    /// Move the selected task one position down
    pub fn move_selected_down(&mut self) -> Result<()> {
        let from = self.selected_index;
        if from + 1 < self.board.len() && self.board.move_task(from, from + 1) {
            self.selected_index = from + 1;
            self.store.save_tasks(self.board.tasks())?;
        }
        Ok(())
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.board.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.board.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.board.len() {
            self.selected_index = self.board.len() - 1;
        }
    }

    // ---- drag reorder ----

    /// Mark the task at `index` as the one being dragged
    pub fn begin_drag(&mut self, index: usize) {
        if let Some(task) = self.board.tasks().get(index) {
            self.selected_index = index;
            self.drag = Some(DragState { id: task.id });
        }
    }

    /// Live-reposition the dragging task under the pointer.
    ///
    /// Rows are one cell high starting at the top of the list viewport. The
    /// non-dragging rows are scanned top to bottom; the first whose midpoint
    /// lies below the pointer becomes the insertion point (equal midpoints
    /// resolve to the first row scanned), and no match moves the task to the
    /// end. With integer cell rows the midpoint test `pointer < top + 0.5`
    /// reduces to `pointer_row <= top`.
    pub fn drag_over(&mut self, pointer_row: u16) {
        let Some(drag) = self.drag else { return };
        let Some(viewport) = self.list_viewport else { return };
        let Some(from) = self.board.position_of(drag.id) else { return };

        let len = self.board.len();
        let mut dest = len - 1;
        for i in 0..len {
            if i == from {
                continue;
            }
            let top = viewport.y.saturating_add(i as u16);
            if pointer_row <= top {
                dest = if i < from { i } else { i - 1 };
                break;
            }
        }

        if self.board.move_task(from, dest) {
            self.selected_index = dest;
        }
    }

    /// Clear the dragging marker and commit the current order to the store
    pub fn end_drag(&mut self) -> Result<()> {
        if self.drag.take().is_some() {
            self.store.save_tasks(self.board.tasks())?;
        }
        Ok(())
    }

    /// Map a terminal position to a task row, distinguishing the checkbox
    /// cell from the rest of the row
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ListHit> {
        let viewport = self.list_viewport?;
        if column < viewport.x
            || column >= viewport.x.saturating_add(viewport.width)
            || row < viewport.y
            || row >= viewport.y.saturating_add(viewport.height)
        {
            return None;
        }

        let index = (row - viewport.y) as usize;
        if index >= self.board.len() {
            return None;
        }

        Some(ListHit {
            index,
            on_checkbox: column < viewport.x + CHECKBOX_CELLS,
        })
    }

    // ---- task input ----

    pub fn open_task_input(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn cancel_task_input(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_push(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the input as a new task. Like the form it replaces, an empty
    /// submission still creates a (blank) task.
    pub fn submit_task_input(&mut self) -> Result<()> {
        let text = std::mem::take(&mut self.input_buffer);
        self.add_task(text)?;
        self.selected_index = self.board.len() - 1;
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    // ---- timer & theme ----

    pub fn start_timer(&mut self) {
        self.timer.start();
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    pub fn toggle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.toggle();
        self.store.save_theme(self.theme)
    }

    /// Advance the countdown by whole seconds and run completion side
    /// effects (for testing and programmatic use)
    pub fn advance_timer(&mut self, secs: u32) -> Result<()> {
        if self.timer.advance(secs) == TimerSignal::Completed {
            self.complete_session()?;
        }
        Ok(())
    }

    /// Per-poll housekeeping: expire the flash message and advance the
    /// countdown from the wall clock
    pub fn tick(&mut self) -> Result<()> {
        let flash_expired = self
            .flash
            .as_ref()
            .is_some_and(|flash| Instant::now() >= flash.expires_at);
        if flash_expired {
            self.flash = None;
        }

        if self.timer.tick() == TimerSignal::Completed {
            self.complete_session()?;
        }
        Ok(())
    }

    fn complete_session(&mut self) -> Result<()> {
        self.sessions += 1;
        self.store.save_sessions(self.sessions)?;
        notifications::notify_session_complete(self.sessions);
        self.flash = Some(Flash {
            message: "Focus session complete!".to_string(),
            expires_at: Instant::now() + Duration::from_secs(FLASH_SECS),
        });
        Ok(())
    }

    // ---- derived state ----

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.board, self.sessions)
    }

    /// Persist everything (exit-time safety net; mutations already write
    /// through as they happen)
    pub fn save(&self) -> Result<()> {
        self.store.save_tasks(self.board.tasks())?;
        self.store.save_sessions(self.sessions)?;
        self.store.save_theme(self.theme)
    }
}
