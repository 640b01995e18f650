//! The task list and its durable copy in the `todos` slot.
//!
//! Every mutation rewrites the whole list. A failed write is logged and
//! otherwise ignored: the in-memory list stays authoritative for the rest
//! of the session.

use crate::domain::{lowest_unused_id, IdGenerator, Task, TaskId};
use crate::error::StoreError;
use crate::persistence::{SlotStorage, TODOS_SLOT};
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub struct TaskStore<S: SlotStorage> {
    storage: S,
    tasks: Vec<Task>,
    ids: IdGenerator,
    persist_failed: bool,
}

impl<S: SlotStorage> TaskStore<S> {
    /// Load the task list from storage.
    ///
    /// A missing slot gives an empty list. A payload that is not a valid
    /// task list is discarded and the slot cleared.
    pub fn load(mut storage: S) -> Self {
        let tasks = match storage.read(TODOS_SLOT) {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match parse_tasks(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(error = %err, "discarding stored task list");
                    if let Err(e) = storage.remove(TODOS_SLOT) {
                        warn!(error = %format!("{:#}", e), "failed to clear task slot");
                    }
                    Vec::new()
                }
            },
            // An unreadable slot is not known to be corrupt, so it is left alone.
            Err(e) => {
                warn!(
                    error = %format!("{:#}", e),
                    "could not read stored task list, starting empty"
                );
                Vec::new()
            }
        };

        let mut ids = IdGenerator::new();
        for id in tasks.iter().filter_map(|t| t.id.as_number()) {
            ids.observe(id);
        }

        info!(count = tasks.len(), "task list loaded");

        Self {
            storage,
            tasks,
            ids,
            persist_failed: false,
        }
    }

    /// Add a task at the front of the list
    pub fn add(&mut self, text: &str) -> Result<&[Task], StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::Validation);
        }

        // The clock-based ids run out only after a stored id of u64::MAX
        let id = self
            .ids
            .next_id()
            .unwrap_or_else(|| lowest_unused_id(&self.tasks));
        let task = Task::new(id, text.to_string());
        debug!(id = %task.id, "task added");
        self.tasks.insert(0, task);
        self.persist();
        Ok(&self.tasks)
    }

    /// Flip the completed flag of a task. Unknown ids leave the list as is.
    pub fn toggle_complete(&mut self, id: &TaskId) -> &[Task] {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.toggle();
                debug!(id = %id, completed = task.completed, "task toggled");
            }
            None => debug!(id = %id, "toggle for unknown task ignored"),
        }
        self.persist();
        &self.tasks
    }

    /// Remove a task. Unknown ids leave the list as is.
    pub fn delete(&mut self, id: &TaskId) -> &[Task] {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() < before {
            debug!(id = %id, "task deleted");
        } else {
            debug!(id = %id, "delete for unknown task ignored");
        }
        self.persist();
        &self.tasks
    }

    /// Current snapshot, newest first
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether the most recent durable write failed
    pub fn last_persist_failed(&self) -> bool {
        self.persist_failed
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.tasks)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.write(TODOS_SLOT, &json));

        match result {
            Ok(()) => self.persist_failed = false,
            Err(source) => {
                let err = StoreError::DurablePersistFailure {
                    slot: TODOS_SLOT,
                    source,
                };
                warn!(error = %err, "task list kept in memory only");
                self.persist_failed = true;
            }
        }
    }
}

/// Parse a stored payload. `null` counts as an absent list. Bytes that are
/// not UTF-8 fail here like any other malformed JSON.
fn parse_tasks(raw: &[u8]) -> Result<Vec<Task>, StoreError> {
    let corrupt = |reason: String| StoreError::CorruptPersistedState {
        slot: TODOS_SLOT,
        reason,
    };

    let tasks: Option<Vec<Task>> =
        serde_json::from_slice(raw).map_err(|e| corrupt(e.to_string()))?;
    let tasks = tasks.unwrap_or_default();

    let mut seen = HashSet::new();
    for task in &tasks {
        if !seen.insert(&task.id) {
            return Err(corrupt(format!("duplicate task id {}", task.id)));
        }
        if task.text.trim().is_empty() {
            return Err(corrupt(format!("task {} has empty text", task.id)));
        }
    }

    Ok(tasks)
}
