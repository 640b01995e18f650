use crate::app::AppState;
use crate::domain::Task;
use crate::persistence::SlotStorage;
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list, newest first
pub fn render_list_pane<S: SlotStorage>(
    f: &mut Frame,
    app: &AppState<S>,
    palette: &Palette,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(" Tasks ", palette.title_style()));

    if app.tasks().is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  Nothing to do. Press 'a' to add a task.",
            palette.hint_style(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, palette);
            let item = ListItem::new(line);
            if idx == app.selected_index {
                item.style(palette.selected_style())
            } else {
                item
            }
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Format: [x] Buy milk
fn create_task_line(task: &Task, palette: &Palette) -> Line<'static> {
    let (checkbox, text_style) = if task.completed {
        ("[x] ", palette.completed_style())
    } else {
        ("[ ] ", palette.base_style())
    };

    Line::from(vec![
        Span::raw(checkbox),
        Span::styled(task.text.clone(), text_style),
    ])
}
