use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect, centered_rect_fixed_height, draw_drop_shadow};

pub struct TextInputModal<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub hint: &'a str,
    pub text_area: &'a AppTextArea<'a>,
    /// 0 renders a single-line prompt.
    pub height_percent: u16,
}

impl Widget for TextInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = if self.height_percent == 0 {
            centered_rect_fixed_height(60, 4, area)
        } else {
            centered_rect(60, self.height_percent, area)
        };

        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner_area);

        let padded_area = if self.height_percent > 0 {
            Rect {
                x: chunks[0].x + 1,
                y: chunks[0].y,
                width: chunks[0].width.saturating_sub(2),
                height: chunks[0].height,
            }
        } else {
            chunks[0]
        };

        if padded_area.width > 0 && padded_area.height > 0 {
            Widget::render(self.text_area, padded_area, buf);
        }

        Paragraph::new(Line::from(Span::styled(self.hint, self.theme.hint)))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
