/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Browsing the list
    Normal,
    /// Typing into the new-task input
    Input,
    /// A blocking notice is shown until dismissed
    Notice,
}
