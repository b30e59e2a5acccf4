use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub tab_active: Style,
    pub tab_inactive: Style,

    pub item_packed: Style,
    pub item_unpacked: Style,
    pub checkbox_on: Style,
    pub checkbox_off: Style,
    pub category: Style,
    pub gauge: Style,
    pub banner_done: Style,
    pub hint: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_target: Style,
    pub header_stats: Style,
    pub header_active: Style,
    pub header_warn: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }

    /// The palette after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> PaletteType {
        let all = Self::all();
        let idx = all.iter().position(|p| *p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            tab_active: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(p.subtext0),

            item_packed: Style::default()
                .fg(p.overlay1)
                .add_modifier(Modifier::CROSSED_OUT),
            item_unpacked: Style::default().fg(p.text),
            checkbox_on: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            checkbox_off: Style::default().fg(p.overlay0),
            category: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            gauge: Style::default().fg(p.green).bg(dim_color(p.green, 0.2)),
            banner_done: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            hint: Style::default().fg(p.subtext0).add_modifier(Modifier::ITALIC),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.peach)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_target: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.surface0).fg(p.subtext1),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.mantle).fg(p.subtext0),

            list_selected: Style::default()
                .bg(p.teal)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycle_wraps() {
        let mut p = PaletteType::CatppuccinMocha;
        for _ in 0..PaletteType::all().len() {
            p = p.next();
        }
        assert_eq!(p, PaletteType::CatppuccinMocha);
        assert_eq!(PaletteType::Nord.next(), PaletteType::Gruvbox);
    }

    #[test]
    fn test_palette_type_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: PaletteType,
        }
        let w: Wrapper = toml::from_str("theme = \"gruvbox\"").unwrap();
        assert_eq!(w.theme, PaletteType::Gruvbox);
        assert_ne!(
            Theme::from_palette_type(PaletteType::Nord),
            Theme::from_palette_type(PaletteType::Gruvbox)
        );
    }
}
