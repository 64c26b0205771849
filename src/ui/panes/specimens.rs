//! Specimen list pane

use super::border_style;
use crate::layout::Specimen;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the list of specimens, highlighting the selected one
pub fn render_specimen_pane(
    frame: &mut Frame,
    area: Rect,
    specimens: &[Specimen],
    selected: usize,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Values ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if specimens.is_empty() {
        let list = List::new(vec![
            ListItem::new("(no values)").style(Style::default().fg(DEFAULT_THEME.comment))
        ])
        .block(block);
        frame.render_widget(list, area);
        return;
    }

    let max_label_len = specimens.iter().map(|s| s.label().len()).max().unwrap_or(0);
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders
    let scroll_offset = (selected + 1).saturating_sub(visible_height);

    let items: Vec<ListItem> = specimens
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, specimen)| {
            let marker = if i == selected { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.border_focused)),
                Span::styled(
                    format!("{:<width$}", specimen.label(), width = max_label_len),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::raw("  "),
                Span::styled(
                    specimen.kind().name(),
                    Style::default().fg(DEFAULT_THEME.type_name),
                ),
                Span::styled(
                    format!(" {}B", specimen.size()),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
            ]);
            let item = ListItem::new(line);
            if i == selected {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
