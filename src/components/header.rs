use crate::app::state::HeaderState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a HeaderState,
    pub theme: &'a Theme,
    pub complete: bool,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let target_bg = self.theme.header_target.bg.unwrap_or(Color::Reset);
        let stats_style = if self.complete {
            self.theme.header_active
        } else {
            self.theme.header_stats
        };
        let stats_bg = stats_style.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_target = Style::default().fg(logo_bg).bg(target_bg);
        let sep_target_stats = Style::default().fg(target_bg).bg(stats_bg);
        let sep_stats_base = Style::default().fg(stats_bg).bg(base_bg);

        let spans = vec![
            Span::styled(
                format!(" {} PACKLIST ", glyphs::LUGGAGE),
                self.theme.header_logo,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_target),
            Span::styled(&self.state.target_text, self.theme.header_target),
            Span::styled(glyphs::SEP_RIGHT, sep_target_stats),
            Span::styled(&self.state.stats_text, stats_style),
            Span::styled(glyphs::SEP_RIGHT, sep_stats_base),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
