use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::SlotStorage;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: SlotStorage>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Input => handle_input_mode(app, key),
        UiMode::Notice => handle_notice_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<S: SlotStorage>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Focus the input
        KeyCode::Char('a') | KeyCode::Char('i') => app.start_input(),

        // Toggle complete
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
        }

        KeyCode::Char('q') | KeyCode::Esc => return true,

        _ => {}
    }
    false
}

/// Handle keys while typing a new task
fn handle_input_mode<S: SlotStorage>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.stop_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    false
}

/// The notice blocks everything until dismissed
fn handle_notice_mode<S: SlotStorage>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.dismiss_notice();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;
    use crate::persistence::MemorySlots;

    fn press(app: &mut AppState<MemorySlots>, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut AppState<MemorySlots>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_task_with_keys() {
        let mut app = AppState::load(MemorySlots::new());

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::Input);

        // 'd' and 'q' are plain text while typing
        type_text(&mut app, "dq task");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].text, "dq task");
        assert_eq!(app.ui_mode, UiMode::Input);
    }

    #[test]
    fn test_empty_submit_blocks_until_dismissed() {
        let mut app = AppState::load(MemorySlots::new());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "  ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui_mode, UiMode::Notice);

        // Other keys are swallowed by the notice
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input, "  ");
        assert_eq!(app.ui_mode, UiMode::Notice);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Input);
        assert_eq!(app.input, "  ");
    }

    #[test]
    fn test_normal_mode_actions() {
        let mut app = AppState::load(MemorySlots::new());
        app.store.add("Buy milk").unwrap();
        app.store.add("Walk dog").unwrap();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.tasks()[1].completed);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].text, "Buy milk");

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.current_theme(), Theme::Dark);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = AppState::load(MemorySlots::new());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));

        app.start_input();
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }
}
