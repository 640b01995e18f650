use crate::app::AppState;
use crate::persistence::SlotStorage;
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the blocking notice raised by a rejected submit
pub fn render_notice<S: SlotStorage>(
    f: &mut Frame,
    app: &AppState<S>,
    palette: &Palette,
    area: Rect,
) {
    let Some(message) = &app.notice else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format!("  {}", message), palette.warning_style())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [Enter]", palette.title_style()),
            Span::raw(" OK"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.warning_style())
                .title(Span::styled(" Notice ", palette.warning_style()))
                .style(palette.base_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
