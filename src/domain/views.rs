use super::task::TaskBoard;

/// Analytics snapshot derived from the board and the session counter.
///
/// Pure data, recomputed on every render; owns no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub sessions: u64,
}

impl Summary {
    pub fn compute(board: &TaskBoard, sessions: u64) -> Self {
        Self {
            total_tasks: board.len(),
            completed_tasks: board.completed_count(),
            sessions,
        }
    }

    /// Share of tasks completed, in `[0.0, 1.0]`. An empty board counts as
    /// zero rather than dividing by zero.
    pub fn completion_fraction(&self) -> f64 {
        self.completed_tasks as f64 / self.total_tasks.max(1) as f64
    }

    /// Rounded percentage label for the chart, e.g. "25%"
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.completion_fraction() * 100.0).round() as u32)
    }
}
