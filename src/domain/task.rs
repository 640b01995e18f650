use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a task.
///
/// Tasks created by this program get non-negative integer ids. Lists written
/// by other tools may carry any JSON number or a string, so every shape is
/// kept as found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(serde_json::Number),
    Text(String),
}

impl TaskId {
    pub fn number(n: u64) -> Self {
        TaskId::Number(n.into())
    }

    /// Value of the id if it is a non-negative integer
    pub fn as_number(&self) -> Option<u64> {
        match self {
            TaskId::Number(n) => n.as_u64(),
            TaskId::Text(_) => None,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Hands out task ids from the wall clock (milliseconds since the epoch).
///
/// Two ids requested within the same millisecond, or after the clock has
/// stepped backwards, continue from the last issued value instead. Once
/// `u64::MAX` has been seen there is nothing left above it and `None` is
/// returned.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids are strictly greater than `id`
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    /// Next id using the current time
    pub fn next_id(&mut self) -> Option<TaskId> {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }

    /// Next id for a given clock reading
    pub fn next_at(&mut self, now_millis: u64) -> Option<TaskId> {
        let id = if now_millis > self.last {
            now_millis
        } else {
            self.last.checked_add(1)?
        };
        self.last = id;
        Some(TaskId::number(id))
    }
}

/// Smallest non-negative integer id not used by any task
pub fn lowest_unused_id(tasks: &[Task]) -> TaskId {
    let used: std::collections::HashSet<u64> =
        tasks.iter().filter_map(|t| t.id.as_number()).collect();
    // A list of n tasks leaves at least one of 0..=n free
    let free = (0..=tasks.len() as u64)
        .find(|n| !used.contains(n))
        .unwrap_or_default();
    TaskId::number(free)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_task_is_not_completed() {
        let task = Task::new(TaskId::number(1), "Buy milk".to_string());
        assert!(!task.completed);
        assert_eq!(task.text, "Buy milk");
    }

    #[test]
    fn test_toggle_flips_flag() {
        let mut task = Task::new(TaskId::number(1), "Buy milk".to_string());
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_ids_within_same_tick_are_distinct() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(1_000);
        assert_eq!(a, Some(TaskId::number(1_000)));
        assert_eq!(b, Some(TaskId::number(1_001)));
        assert_eq!(c, Some(TaskId::number(1_002)));
    }

    #[test]
    fn test_ids_survive_clock_going_backwards() {
        let mut ids = IdGenerator::new();
        ids.next_at(5_000);
        assert_eq!(ids.next_at(4_000), Some(TaskId::number(5_001)));
        assert_eq!(ids.next_at(9_000), Some(TaskId::number(9_000)));
    }

    #[test]
    fn test_observe_moves_floor() {
        let mut ids = IdGenerator::new();
        ids.observe(u64::MAX - 10);
        assert_eq!(ids.next_at(1), Some(TaskId::number(u64::MAX - 9)));
    }

    #[test]
    fn test_exhausted_generator_returns_none() {
        let mut ids = IdGenerator::new();
        ids.observe(u64::MAX);
        assert_eq!(ids.next_at(1), None);
        assert_eq!(ids.next_at(u64::MAX), None);
    }

    #[test]
    fn test_lowest_unused_id() {
        assert_eq!(lowest_unused_id(&[]), TaskId::number(0));

        let tasks = vec![
            Task::new(TaskId::number(0), "a".to_string()),
            Task::new(TaskId::number(u64::MAX), "b".to_string()),
            Task::new(TaskId::number(1), "c".to_string()),
        ];
        assert_eq!(lowest_unused_id(&tasks), TaskId::number(2));
    }

    #[test]
    fn test_rapid_wall_clock_ids_are_unique() {
        let mut ids = IdGenerator::new();
        let seen: HashSet<TaskId> = (0..500).filter_map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 500);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(TaskId::number(42), "Walk dog".to_string());
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":42,"text":"Walk dog","completed":false}"#);

        let with_text_id: Task =
            serde_json::from_str(r#"{"id":"abc","text":"x","completed":true}"#).unwrap();
        assert_eq!(with_text_id.id, TaskId::Text("abc".to_string()));
        assert!(with_text_id.completed);
    }

    #[test]
    fn test_signed_and_fractional_ids() {
        let negative: Task =
            serde_json::from_str(r#"{"id":-1,"text":"x","completed":false}"#).unwrap();
        let fractional: Task =
            serde_json::from_str(r#"{"id":1.5,"text":"y","completed":false}"#).unwrap();

        assert_eq!(negative.id.as_number(), None);
        assert_eq!(fractional.id.as_number(), None);
        assert_eq!(negative.id.to_string(), "-1");
        assert_eq!(fractional.id.to_string(), "1.5");
        assert_ne!(negative.id, fractional.id);
        assert_eq!(
            serde_json::to_string(&fractional).unwrap(),
            r#"{"id":1.5,"text":"y","completed":false}"#
        );
    }
}
