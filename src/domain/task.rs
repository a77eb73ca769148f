use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Runtime-only ID used to follow a task across reorders (not persisted)
    #[serde(skip)]
    pub id: Uuid,
    /// Task text as entered; may be empty
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// Ordered task list; the single source of truth for board state.
///
/// Vector position is display order. Duplicate text is allowed and empty
/// text is accepted (it shows up as a blank entry).
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Rebuild a board from deserialized tasks, assigning fresh runtime IDs
    pub fn from_tasks(mut tasks: Vec<Task>) -> Self {
        for task in &mut tasks {
            task.id = Uuid::new_v4();
        }
        Self { tasks }
    }

    /// Append a new task with `completed = false`. No validation on text.
    pub fn add(&mut self, text: String) {
        self.tasks.push(Task::new(text));
    }

    /// Flip the completed flag at `index`. Silent no-op out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Move the task at `from` so it ends up at position `to` of the
    /// resulting list (`to` is clamped). Silent no-op if `from` is out of
    /// range or the move changes nothing.
    pub fn move_task(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tasks.len() {
            return false;
        }
        let task = self.tasks.remove(from);
        let dest = to.min(self.tasks.len());
        self.tasks.insert(dest, task);
        dest != from
    }

    /// Remove and return the task at `index`. Silent no-op out of range.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Read-only view for rendering
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Current position of a task by runtime ID (stable across reorders)
    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn board_of(texts: &[&str]) -> TaskBoard {
        let mut board = TaskBoard::new();
        for text in texts {
            board.add(text.to_string());
        }
        board
    }

    #[test]
    fn test_add_appends_incomplete_task() {
        let mut board = board_of(&["First"]);
        board.add("Write report".to_string());

        assert_eq!(board.len(), 2);
        let last = board.tasks().last().unwrap();
        assert_eq!(last.text, "Write report");
        assert!(!last.completed);
    }

    #[test]
    fn test_add_accepts_empty_text() {
        let mut board = TaskBoard::new();
        board.add(String::new());

        assert_eq!(board.len(), 1);
        assert_eq!(board.tasks()[0].text, "");
    }

    #[test]
    fn test_add_allows_duplicate_text() {
        let board = board_of(&["Same", "Same"]);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut board = board_of(&["A", "B"]);

        assert!(board.toggle(1));
        assert!(board.tasks()[1].completed);
        assert_eq!(board.completed_count(), 1);

        assert!(board.toggle(1));
        assert!(!board.tasks()[1].completed);
        assert_eq!(board.completed_count(), 0);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut board = board_of(&["A"]);
        assert!(!board.toggle(5));
        assert_eq!(board.completed_count(), 0);
    }

    #[test]
    fn test_move_task_front_to_back() {
        let mut board = board_of(&["a", "b", "c"]);
        board.toggle(0);

        assert!(board.move_task(0, 2));

        let order: Vec<&str> = board.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        // Completed flag travels with the task
        assert!(board.tasks()[2].completed);
        assert!(!board.tasks()[0].completed);
    }

    #[test]
    fn test_move_task_clamps_destination() {
        let mut board = board_of(&["a", "b", "c"]);
        assert!(board.move_task(0, 99));

        let order: Vec<&str> = board.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_task_out_of_range_source_is_noop() {
        let mut board = board_of(&["a", "b"]);
        assert!(!board.move_task(7, 0));

        let order: Vec<&str> = board.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_move_task_same_position_is_noop() {
        let mut board = board_of(&["a", "b"]);
        assert!(!board.move_task(1, 1));
    }

    #[test]
    fn test_remove() {
        let mut board = board_of(&["a", "b", "c"]);

        let removed = board.remove(1).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(board.len(), 2);

        assert!(board.remove(9).is_none());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_position_of_tracks_reorder() {
        let mut board = board_of(&["a", "b", "c"]);
        let id = board.tasks()[0].id;

        board.move_task(0, 2);
        assert_eq!(board.position_of(id), Some(2));
    }

    #[test]
    fn test_from_tasks_regenerates_ids() {
        let stored = vec![
            Task {
                id: Uuid::nil(),
                text: "a".to_string(),
                completed: true,
            },
            Task {
                id: Uuid::nil(),
                text: "b".to_string(),
                completed: false,
            },
        ];

        let board = TaskBoard::from_tasks(stored);
        assert_ne!(board.tasks()[0].id, Uuid::nil());
        assert_ne!(board.tasks()[0].id, board.tasks()[1].id);
        assert!(board.tasks()[0].completed);
    }
}
