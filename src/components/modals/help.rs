use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "General",
        &[
            ("1 / 2 / 3", "Pack / New Trip / Templates"),
            ("Tab / S-Tab", "Next / previous tab"),
            ("j / k", "Move down / up"),
            ("T", "Cycle theme"),
            ("?", "Show this help"),
            ("Esc", "Close modal / dismiss error"),
            ("q", "Quit"),
        ],
    ),
    (
        "Pack",
        &[
            ("Space / Enter", "Pack or unpack item"),
            ("r", "Unpack everything"),
        ],
    ),
    (
        "New Trip",
        &[
            ("Space", "Include or exclude item / category"),
            ("a", "Include everything"),
            ("g / Enter", "Generate trip (replaces current)"),
        ],
    ),
    (
        "Templates",
        &[
            ("n", "Add category"),
            ("d", "Delete category"),
            ("e / Enter", "Edit items, one per line"),
            ("Ctrl+S", "Save edited items"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (section, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*section, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(format!(" {key}"), key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block)
            .render(help_area, buf);
    }
}
