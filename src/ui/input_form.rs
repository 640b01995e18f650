use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::SlotStorage;
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder shown while the input is empty
pub const PLACEHOLDER: &str = "Add a new task...";

/// Render the new-task input box
pub fn render_input_form<S: SlotStorage>(
    f: &mut Frame,
    app: &AppState<S>,
    palette: &Palette,
    area: Rect,
) {
    let focused = app.ui_mode != UiMode::Normal;

    let mut spans = vec![Span::raw("> ")];
    if app.input.is_empty() && !focused {
        spans.push(Span::styled(PLACEHOLDER, palette.hint_style()));
    } else {
        spans.push(Span::raw(app.input.clone()));
    }
    if focused {
        spans.push(Span::styled("█", palette.title_style())); // Cursor
    }

    let border_style = if focused {
        palette.title_style()
    } else {
        palette.border_style()
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" New task ", palette.title_style())),
    );

    f.render_widget(paragraph, area);
}
