use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;
use super::text_input::TextInputModal;

/// Draws whatever overlay the current mode calls for, on top of a dimmed
/// screen.
pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let is_modal_active =
            self.app_state.mode != AppMode::Normal || self.app_state.last_error.is_some();
        if !is_modal_active {
            return;
        }
        dim_area(buf, area);

        match self.app_state.mode {
            AppMode::Help => HelpModal { theme: self.theme }.render(area, buf),
            AppMode::CategoryInput | AppMode::ItemsInput => {
                if let Some(input) = &self.app_state.input {
                    let (title, hint, height_percent) =
                        if self.app_state.mode == AppMode::CategoryInput {
                            (" NEW CATEGORY ", "Enter: add  Esc: cancel ", 0)
                        } else {
                            (
                                " EDIT ITEMS ",
                                "one item per line  Ctrl+S: save  Esc: cancel ",
                                60,
                            )
                        };
                    TextInputModal {
                        theme: self.theme,
                        title,
                        hint,
                        text_area: &input.text_area,
                        height_percent,
                    }
                    .render(area, buf);
                }
            }
            AppMode::Normal => {}
        }

        // Errors sit above everything else
        if let Some(error) = &self.app_state.last_error {
            ErrorModal {
                theme: self.theme,
                error,
            }
            .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppTextArea, ErrorState, InputState};

    fn render(state: &AppState) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ModalManager {
            theme: &theme,
            app_state: state,
        }
        .render(area, &mut buf);

        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_normal_mode_draws_nothing() {
        let out = render(&AppState::default());
        assert!(out.trim().is_empty());
    }

    #[test]
    fn test_items_editor_shows_lines() {
        let mut state = AppState::default();
        state.mode = AppMode::ItemsInput;
        state.input = Some(InputState {
            text_area: AppTextArea::with_lines(vec!["Socks".to_string(), "Hat".to_string()]),
        });

        let out = render(&state);

        assert!(out.contains("EDIT ITEMS"));
        assert!(out.contains("Socks"));
        assert!(out.contains("Hat"));
    }

    #[test]
    fn test_error_over_help() {
        let mut state = AppState::default();
        state.mode = AppMode::Help;
        state.last_error = Some(ErrorState::error("boom"));

        let out = render(&state);

        assert!(out.contains("ERROR"));
        assert!(out.contains("boom"));
    }
}
