use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::tab_bar::tab_regions;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }

    if app_state.last_error.is_some() {
        return match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) if key.modifiers.is_empty() => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::CategoryInput => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => app_state
                    .input
                    .as_ref()
                    .map(|input| Action::AddCategory(input.text_area.lines().join(""))),
                _ => Some(Action::TextAreaInput(key)),
            },
            _ => None,
        },
        AppMode::ItemsInput => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => app_state
                    .input
                    .as_ref()
                    .map(|input| Action::SaveItems(input.text_area.entries())),
                _ => Some(Action::TextAreaInput(key)),
            },
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) => app_state.keymap.get_action(key, app_state.tab),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::SelectPrev),
                MouseEventKind::ScrollDown => Some(Action::SelectNext),
                MouseEventKind::Down(MouseButton::Left) => {
                    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    let layout = ui::get_layout(area);
                    let at = Position::new(mouse.column, mouse.row);
                    if let Some((tab, _)) = tab_regions(layout.tabs)
                        .into_iter()
                        .find(|(_, region)| region.contains(at))
                    {
                        return Some(Action::SwitchTab(tab));
                    }

                    let rows = ui::list_area(app_state, layout.body);
                    if !rows.contains(at) {
                        return None;
                    }
                    let index = app_state.active_list_offset() + usize::from(at.y - rows.y);
                    (index < app_state.active_list_len()).then_some(Action::SelectIndex(index))
                }
                _ => None,
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ErrorState, InputState, Tab};
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    const SIZE: Size = Size {
        width: 80,
        height: 24,
    };

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = AppState::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event_to_action(release, &state, SIZE), None);
    }

    #[test]
    fn test_category_input_submits_typed_name() {
        let mut state = AppState::default();
        state.mode = AppMode::CategoryInput;
        let mut input = InputState::default();
        input.text_area.insert_str("Snacks");
        state.input = Some(input);

        assert_eq!(
            map_event_to_action(press(KeyCode::Char('q')), &state, SIZE),
            Some(Action::TextAreaInput(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE
            )))
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Enter), &state, SIZE),
            Some(Action::AddCategory("Snacks".to_string()))
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state, SIZE),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn test_items_input_saves_on_ctrl_s() {
        let mut state = AppState::default();
        state.mode = AppMode::ItemsInput;
        state.input = Some(InputState {
            text_area: crate::app::state::AppTextArea::with_lines(vec![
                " Socks ".to_string(),
                String::new(),
                "Hat".to_string(),
            ]),
        });

        let ctrl_s = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(
            map_event_to_action(ctrl_s, &state, SIZE),
            Some(Action::SaveItems(vec!["Socks".to_string(), "Hat".to_string()]))
        );
        assert!(matches!(
            map_event_to_action(press(KeyCode::Enter), &state, SIZE),
            Some(Action::TextAreaInput(_))
        ));
    }

    #[test]
    fn test_help_swallows_other_keys() {
        let mut state = AppState::default();
        state.mode = AppMode::Help;
        assert_eq!(map_event_to_action(press(KeyCode::Char('j')), &state, SIZE), None);
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('?')), &state, SIZE),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_mouse_wheel_moves_selection() {
        let state = AppState::default();
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_event_to_action(scroll, &state, SIZE),
            Some(Action::SelectNext)
        );
    }

    #[test]
    fn test_click_on_tab_bar_switches_tab() {
        let state = AppState::default();
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height));
        let regions = tab_regions(layout.tabs);
        let (tab, region) = regions[2];
        assert_eq!(tab, Tab::Templates);

        assert_eq!(
            map_event_to_action(click(region.x, region.y), &state, SIZE),
            Some(Action::SwitchTab(Tab::Templates))
        );
        assert_eq!(map_event_to_action(click(0, 10), &state, SIZE), None);
    }

    #[test]
    fn test_click_on_row_selects_it() {
        let mut state = AppState::default();
        state.tab = Tab::Templates;
        // Body starts at row 2, the pane border takes one more
        assert_eq!(
            map_event_to_action(click(5, 4), &state, SIZE),
            Some(Action::SelectIndex(1))
        );
        // Border row and the right-hand pane select nothing
        assert_eq!(map_event_to_action(click(5, 2), &state, SIZE), None);
        assert_eq!(map_event_to_action(click(60, 4), &state, SIZE), None);
        // Below the last category
        assert_eq!(map_event_to_action(click(5, 21), &state, SIZE), None);
    }

    #[test]
    fn test_error_modal_only_takes_dismiss_and_quit() {
        let mut state = AppState::default();
        state.tab = Tab::Templates;
        state.last_error = Some(ErrorState::error("boom"));

        assert_eq!(map_event_to_action(press(KeyCode::Char('d')), &state, SIZE), None);
        assert_eq!(map_event_to_action(press(KeyCode::Char('2')), &state, SIZE), None);
        assert_eq!(map_event_to_action(click(5, 4), &state, SIZE), None);
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state, SIZE),
            Some(Action::CancelMode)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('q')), &state, SIZE),
            Some(Action::Quit)
        );
    }
}
