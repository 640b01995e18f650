use crate::domain::{Task, TaskId, Theme, UiMode};
use crate::error::StoreError;
use crate::persistence::SlotStorage;
use crate::store::TaskStore;
use crate::theme::ThemePreference;

/// Notice shown when an empty task is submitted
pub const EMPTY_TASK_NOTICE: &str = "Please enter a task!";

/// Main application state
pub struct AppState<S: SlotStorage> {
    pub store: TaskStore<S>,
    pub theme: ThemePreference<S>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input: String,
    pub notice: Option<String>,
}

impl<S: SlotStorage + Clone> AppState<S> {
    /// Load tasks and theme from the same storage
    pub fn load(storage: S) -> Self {
        Self::new(TaskStore::load(storage.clone()), ThemePreference::load(storage))
    }
}

impl<S: SlotStorage> AppState<S> {
    pub fn new(store: TaskStore<S>, theme: ThemePreference<S>) -> Self {
        Self {
            store,
            theme,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input: String::new(),
            notice: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks().get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks().len() {
            self.selected_index += 1;
        }
    }

    /// Focus the new-task input
    pub fn start_input(&mut self) {
        self.ui_mode = UiMode::Input;
    }

    /// Leave the input; typed text is kept
    pub fn stop_input(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the input as a new task.
    ///
    /// On success the input is cleared and the new task selected. Rejected
    /// text stays in the input and a notice is raised.
    pub fn submit_input(&mut self) {
        match self.store.add(&self.input) {
            Ok(_) => {
                self.input.clear();
                self.selected_index = 0;
            }
            Err(err) => {
                let message = match err {
                    StoreError::Validation => EMPTY_TASK_NOTICE.to_string(),
                    other => other.to_string(),
                };
                self.notice = Some(message);
                self.ui_mode = UiMode::Notice;
            }
        }
    }

    /// Close the notice and go back to the input
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = UiMode::Input;
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_complete(&id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let remaining = self.store.delete(&id).len();
            self.selected_index = self.selected_index.min(remaining.saturating_sub(1));
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    /// Whether the last task list write failed
    pub fn unsaved(&self) -> bool {
        self.store.last_persist_failed()
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }
}
