//! Byte layout pane
//!
//! Shows the selected specimen one stored byte per row, in address order,
//! followed by the rendered hex line and the decoded value.
//!
//! Bytes beyond the inspected prefix are listed as `--` so the boundary of
//! the inspection stays visible while it is grown or shrunk.

use super::border_style;
use crate::inspect::{render, Endianness};
use crate::layout::Specimen;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Data needed to render the byte pane
pub struct BytesRenderData<'a> {
    pub specimen: &'a Specimen,
    pub prefix: usize,
    pub endianness: Endianness,
}

/// Render the byte layout pane
pub fn render_bytes_pane(
    frame: &mut Frame,
    area: Rect,
    data: BytesRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Byte Layout ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let specimen = data.specimen;
    let mut all_items = Vec::new();

    all_items.push(ListItem::new(Line::from(vec![
        Span::styled(
            specimen.label().to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            specimen.kind().name(),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} bytes", specimen.size()),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
    ])));
    all_items.push(
        ListItem::new(format!("host: {}", data.endianness.name()))
            .style(Style::default().fg(DEFAULT_THEME.comment)),
    );
    all_items.push(ListItem::new(""));

    // Offsets are padded to the widest one
    let offset_width = specimen.size().saturating_sub(1).to_string().len();
    for (offset, byte) in specimen.storage().iter().enumerate() {
        let offset_span = Span::styled(
            format!("  +{:<width$}: ", offset, width = offset_width),
            Style::default().fg(DEFAULT_THEME.comment),
        );
        let line = if offset < data.prefix {
            Line::from(vec![
                offset_span,
                Span::styled(
                    format!("{:02x}", byte),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                Span::styled(
                    format!("  {:08b}", byte),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ])
        } else {
            Line::from(vec![
                offset_span,
                Span::styled(
                    "--",
                    Style::default()
                        .fg(DEFAULT_THEME.comment)
                        .add_modifier(Modifier::DIM),
                ),
            ])
        };
        all_items.push(ListItem::new(line));
    }

    all_items.push(ListItem::new(""));

    let hex = match specimen.inspect(data.prefix) {
        Ok(view) if view.is_empty() => Span::styled(
            "(nothing inspected)",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Ok(view) => Span::styled(render(view), Style::default().fg(DEFAULT_THEME.number)),
        Err(e) => Span::styled(e.to_string(), Style::default().fg(DEFAULT_THEME.error)),
    };
    all_items.push(ListItem::new(Line::from(vec![
        Span::styled("=> ", Style::default().fg(DEFAULT_THEME.comment)),
        hex,
    ])));
    all_items.push(ListItem::new(Line::from(vec![
        Span::styled("=> ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            specimen.describe(),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
    ])));

    // Clamp scroll offset only if content exceeds visible area
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
