use super::{
    action::Action,
    command::Command,
    state::{step_selection, AppMode, AppState, AppTextArea, ErrorState, InputState, Tab},
};
use crate::theme::Theme;
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Navigation ---
        Action::NextTab => state.tab = state.tab.next(),
        Action::PrevTab => state.tab = state.tab.prev(),
        Action::SwitchTab(tab) => state.tab = tab,
        Action::SelectNext | Action::SelectPrev => {
            let len = state.active_list_len();
            let forward = action == Action::SelectNext;
            step_selection(state.active_list_state(), len, forward);
        }
        Action::SelectIndex(i) => {
            if i < state.active_list_len() {
                state.active_list_state().select(Some(i));
            }
        }

        // --- Pack ---
        Action::ToggleItem => {
            if state.tab == Tab::Pack {
                if let Some(item) = state.selected_trip_item() {
                    return Some(Command::Toggle(item.to_string()));
                }
            }
        }
        Action::ResetTrip => {
            if state.tab == Tab::Pack && !state.document.current_trip.is_empty() {
                return Some(Command::ResetTrip);
            }
        }

        // --- New Trip ---
        Action::ToggleInclusion => {
            if state.tab == Tab::NewTrip {
                state.new_trip.toggle_selected(&state.document);
            }
        }
        Action::IncludeAll => state.new_trip.include_all(),
        Action::GenerateTrip => {
            let items = state.new_trip.selected_items(&state.document);
            if items.is_empty() {
                state.last_error = Some(ErrorState::warning("Select at least one item"));
                return None;
            }
            state.tab = Tab::Pack;
            state.pack.list_state.select(Some(0));
            return Some(Command::CreateTrip(items));
        }

        // --- Templates ---
        Action::AddCategoryIntent => {
            state.mode = AppMode::CategoryInput;
            state.input = Some(InputState::default());
        }
        Action::AddCategory(name) => {
            state.mode = AppMode::Normal;
            state.input = None;
            let name = name.trim().to_string();
            if name.is_empty() {
                return None;
            }
            if state.document.templates.contains_key(&name) {
                state.last_error = Some(ErrorState::warning(format!(
                    "Category \"{name}\" already exists"
                )));
                return None;
            }
            // The new category lands at the end of the list.
            state
                .templates
                .list_state
                .select(Some(state.document.templates.len()));
            return Some(Command::AddCategory(name));
        }
        Action::DeleteCategory => {
            if state.tab == Tab::Templates {
                if let Some(category) = state.selected_category() {
                    return Some(Command::DeleteCategory(category.to_string()));
                }
            }
        }
        Action::EditItemsIntent => {
            let items = state
                .selected_category()
                .and_then(|c| state.document.templates.get(c))
                .cloned();
            if let Some(items) = items {
                state.mode = AppMode::ItemsInput;
                state.input = Some(InputState {
                    text_area: AppTextArea::with_lines(items),
                });
            }
        }
        Action::SaveItems(items) => {
            state.mode = AppMode::Normal;
            state.input = None;
            if let Some(category) = state.selected_category() {
                return Some(Command::ReplaceItems(category.to_string(), items));
            }
        }

        // --- UI Mode Transitions ---
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
        }
        Action::CycleTheme => {
            state.palette_type = state.palette_type.next();
            state.theme = Theme::from_palette_type(state.palette_type);
            let msg = format!("Theme: {}", state.palette_type.label());
            set_status(state, msg);
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.input = None;
            state.last_error = None;
        }
        Action::TextAreaInput(key) => {
            if let Some(input) = &mut state.input {
                input.text_area.input(key);
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Store results ---
        Action::DocumentUpdated(document) => {
            state.set_document(*document);
        }
        Action::OperationCompleted(result) => match result {
            Ok(msg) => set_status(state, msg),
            Err(err) => state.last_error = Some(ErrorState::error(err)),
        },

        Action::Tick => {
            if state
                .status_clear_time
                .is_some_and(|t| Instant::now() >= t)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
        }
        Action::Resize(_, _) => {}
    }
    None
}

fn set_status(state: &mut AppState, msg: String) {
    state.status_message = Some(msg);
    state.status_clear_time = Some(Instant::now() + STATUS_TTL);
}
