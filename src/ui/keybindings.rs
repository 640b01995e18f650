use crate::domain::UiMode;
use crate::ui::styles::Palette;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the current mode
pub fn hints_for(mode: UiMode) -> &'static str {
    match mode {
        UiMode::Normal => {
            " ↑/↓ select   a add   space done   d delete   t theme   q quit"
        }
        UiMode::Input => " type a task   Enter add   Esc back",
        UiMode::Notice => " Enter/Esc dismiss",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, palette: &Palette, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints_for(mode))).style(palette.hint_style());
    f.render_widget(paragraph, area);
}
