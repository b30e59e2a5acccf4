use crate::domain::models::Document;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph, StatefulWidget,
        Widget,
    },
};

/// The current trip as a checklist with a progress gauge.
pub struct PackView<'a> {
    pub document: &'a Document,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl StatefulWidget for PackView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = self.theme;
        let doc = self.document;

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("CURRENT TRIP", theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme.border_focus
            } else {
                theme.border
            });
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if doc.current_trip.is_empty() {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No active trip.", theme.hint)),
                Line::from(vec![
                    Span::styled("Press ", theme.hint),
                    Span::styled("2", theme.footer_segment_key),
                    Span::styled(" to build one from your templates.", theme.hint),
                ]),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .render(inner, buf);
            return;
        }

        let banner_height = u16::from(doc.is_complete());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Gauge
                Constraint::Length(1),             // Caption
                Constraint::Length(banner_height), // Completion banner
                Constraint::Min(0),                // Items
            ])
            .split(inner);

        let percent = (doc.progress() * 100.0).round() as u16;
        Gauge::default()
            .gauge_style(theme.gauge)
            .ratio(doc.progress().clamp(0.0, 1.0))
            .label(format!("{percent}%"))
            .render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            format!("Packed: {}/{}", doc.packed_count(), doc.total_count()),
            theme.list_item,
        )))
        .render(chunks[1], buf);

        if doc.is_complete() {
            Paragraph::new(Line::from(Span::styled(
                "All packed. Have a great trip!",
                theme.banner_done,
            )))
            .alignment(ratatui::layout::Alignment::Center)
            .render(chunks[2], buf);
        }

        let items: Vec<ListItem> = doc
            .current_trip
            .iter()
            .map(|(name, packed)| {
                let (mark, mark_style, text_style) = if *packed {
                    (glyphs::CHECKED, theme.checkbox_on, theme.item_packed)
                } else {
                    (glyphs::UNCHECKED, theme.checkbox_off, theme.item_unpacked)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, mark_style),
                    Span::raw(" "),
                    Span::styled(name.as_str(), text_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.list_selected)
            .highlight_symbol(glyphs::CURSOR);
        StatefulWidget::render(list, chunks[3], buf, state);
    }
}
