pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::persistence::SlotStorage;
use header::render_header;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_notice;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use styles::Palette;

/// Main render function - draws the entire UI
pub fn render<S: SlotStorage>(f: &mut Frame, app: &AppState<S>) {
    let size = f.size();
    let theme = app.current_theme();
    let palette = Palette::for_theme(theme);

    // Paint the theme background first so nothing from the other theme shows
    f.render_widget(Block::default().style(palette.base_style()), size);

    let layout = create_layout(size);

    render_header(f, theme, &palette, layout.header_area);
    render_input_form(f, app, &palette, layout.input_area);
    render_list_pane(f, app, &palette, layout.list_area);

    let status = if app.unsaved() {
        Line::from(Span::styled(" changes not saved", palette.warning_style()))
    } else {
        let open = app.tasks().iter().filter(|t| !t.completed).count();
        Line::from(Span::styled(
            format!(" {} of {} open", open, app.tasks().len()),
            palette.hint_style(),
        ))
    };
    f.render_widget(Paragraph::new(status), layout.status_area);

    render_keybindings(f, app.ui_mode, &palette, layout.keybindings_area);

    // Notice goes on top of everything
    render_notice(f, app, &palette, size);
}
