use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout areas
pub struct MainLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
    pub keybindings_area: Rect,
}

/// Stack header, input, list and the two bottom bars
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input box
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Keybindings
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        input_area: chunks[1],
        list_area: chunks[2],
        status_area: chunks[3],
        keybindings_area: chunks[4],
    }
}

/// Create centered modal area for notices
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
