use crate::domain::models::Document;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

/// Categories on the left, the selected category's items on the right.
pub struct TemplatesView<'a> {
    pub document: &'a Document,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl TemplatesView<'_> {
    fn block<'b>(&self, title: &'b str, focused: bool) -> Block<'b> {
        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title, self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                self.theme.border_focus
            } else {
                self.theme.border
            })
    }
}

impl StatefulWidget for TemplatesView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = self.theme;
        let doc = self.document;

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        // --- Categories ---
        let cat_block = self.block("CATEGORIES", self.focused);
        let cat_inner = cat_block.inner(panes[0]);
        cat_block.render(panes[0], buf);

        if doc.templates.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::styled("Press ", theme.hint),
                Span::styled("n", theme.footer_segment_key),
                Span::styled(" to add a category.", theme.hint),
            ]))
            .render(cat_inner, buf);
        } else {
            let items: Vec<ListItem> = doc
                .templates
                .iter()
                .map(|(name, items)| {
                    ListItem::new(Line::from(vec![
                        Span::styled(name.as_str(), theme.category),
                        Span::styled(format!(" ({})", items.len()), theme.dimmed),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .highlight_style(theme.list_selected)
                .highlight_symbol(glyphs::CURSOR);
            StatefulWidget::render(list, cat_inner, buf, state);
        }

        // --- Items of the selected category ---
        let selected = state
            .selected()
            .and_then(|i| doc.templates.get_index(i));
        let title = selected.map_or("ITEMS", |(name, _)| name.as_str());
        let items_block = self.block(title, false);
        let items_inner = items_block.inner(panes[1]);
        items_block.render(panes[1], buf);

        let lines: Vec<Line> = match selected {
            Some((_, items)) if items.is_empty() => vec![Line::from(Span::styled(
                "No items. Press e to add some.",
                theme.hint,
            ))],
            Some((_, items)) => items
                .iter()
                .map(|item| Line::from(Span::styled(format!("- {item}"), theme.list_item)))
                .collect(),
            None => Vec::new(),
        };
        Paragraph::new(lines).render(items_inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_items_of_selected_category() {
        let doc = Document::default();
        let mut state = ListState::default().with_selected(Some(1));
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();

        TemplatesView {
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
        assert!(out.contains("Electronics (5)"));
        assert!(out.contains("- Face wash"));
        assert!(!out.contains("- Power bank"));
    }
}
