use crate::domain::Theme;
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Title on the left, active theme and its switch on the right
pub fn render_header(f: &mut Frame, theme: Theme, palette: &Palette, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(" My Tasks", palette.title_style())));
    f.render_widget(title, area);

    let switch = Paragraph::new(theme_switch_line(theme, palette)).alignment(Alignment::Right);
    f.render_widget(switch, area);
}

/// Format: light-theme 🌙 [t]
fn theme_switch_line(theme: Theme, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(theme.class_name(), palette.hint_style()),
        Span::raw(" "),
        Span::raw(theme.switch_symbol()),
        Span::styled(" [t] ", palette.hint_style()),
    ])
}
