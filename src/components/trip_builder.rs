use crate::app::state::{Inclusion, NewTripState, TripRow};
use crate::domain::models::Document;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, StatefulWidget, Widget},
};

/// Template items grouped by category, each with an include checkbox.
pub struct NewTripView<'a> {
    pub document: &'a Document,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl StatefulWidget for NewTripView<'_> {
    type State = NewTripState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = self.theme;
        let doc = self.document;

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("NEW TRIP", theme.header_active),
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

        if doc.templates.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No templates yet. Add a category on the Templates tab.",
                theme.hint,
            )))
            .render(inner, buf);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let selected = state.selected_items(doc).len();
        let candidates = NewTripState::candidate_count(doc);
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{selected} of {candidates} items selected"),
                theme.list_item,
            ),
            Span::styled("  (generating replaces the current trip)", theme.hint),
        ]))
        .render(chunks[0], buf);

        let items: Vec<ListItem> = NewTripState::rows(doc)
            .into_iter()
            .map(|row| match row {
                TripRow::Category(category) => {
                    let mark = match state.category_inclusion(doc, &category) {
                        Inclusion::All => glyphs::CHECKED,
                        Inclusion::Partial => glyphs::PARTIAL,
                        Inclusion::None => glyphs::UNCHECKED,
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(mark, theme.category),
                        Span::raw(" "),
                        Span::styled(category, theme.category),
                    ]))
                }
                TripRow::Item { category, item } => {
                    let (mark, style) = if state.is_included(&category, &item) {
                        (glyphs::CHECKED, theme.checkbox_on)
                    } else {
                        (glyphs::UNCHECKED, theme.checkbox_off)
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(mark, style),
                        Span::raw(" "),
                        Span::styled(item, theme.list_item),
                    ]))
                }
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.list_selected)
            .highlight_symbol(glyphs::CURSOR);
        StatefulWidget::render(list, chunks[1], buf, &mut state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_category_and_count() {
        let doc = Document::default();
        let mut state = NewTripState::default();
        state
            .excluded
            .insert(("Electronics".to_string(), "Power bank".to_string()));
        state.list_state.select(Some(0));

        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        NewTripView {
            document: &doc,
            theme: &theme,
            focused: true,
        }
        .render(area, &mut buf, &mut state);

        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        assert!(out.contains("15 of 16 items selected"));
        assert!(out.contains("[-] Electronics"));
        assert!(out.contains("[ ] Power bank"));
        assert!(out.contains("[x] Phone charger"));
    }
}
