use crate::app::state::Tab;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const GAP: u16 = 1;

fn label(tab: Tab) -> String {
    format!(" {} {} ", tab.index() + 1, tab.title())
}

/// Screen region of each tab label, left to right. Labels that do not fit
/// are clipped or left out.
pub fn tab_regions(area: Rect) -> Vec<(Tab, Rect)> {
    let mut x = area.x;
    let right = area.x.saturating_add(area.width);
    let mut regions = Vec::new();
    for &tab in Tab::all() {
        if x >= right {
            break;
        }
        let width = (label(tab).chars().count() as u16).min(right - x);
        regions.push((tab, Rect::new(x, area.y, width, area.height.min(1))));
        x = x.saturating_add(width + GAP);
    }
    regions
}

pub struct TabBar<'a> {
    pub active: Tab,
    pub theme: &'a Theme,
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for &tab in Tab::all() {
            let style = if tab == self.active {
                self.theme.tab_active
            } else {
                self.theme.tab_inactive
            };
            spans.push(Span::styled(label(tab), style));
            spans.push(Span::raw(" ".repeat(GAP as usize)));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
