use super::keymap::KeyMap;
use crate::domain::models::Document;
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;
use std::time::Instant;

pub mod error;
pub mod header;
pub mod input;
pub mod views;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use header::HeaderState;
pub use input::{AppTextArea, InputState};
pub use views::{
    clamp_selection, step_selection, Inclusion, NewTripState, PackState, TemplatesState, TripRow,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tab {
    Pack,      // Tick items off the current trip
    NewTrip,   // Build a trip from templates
    Templates, // Edit the categories and their items
}

impl Tab {
    #[must_use]
    pub fn all() -> &'static [Tab] {
        &[Tab::Pack, Tab::NewTrip, Tab::Templates]
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tab::Pack => "Pack",
            Tab::NewTrip => "New Trip",
            Tab::Templates => "Templates",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::all().iter().position(|t| *t == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Tab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    #[must_use]
    pub fn prev(self) -> Tab {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,        // Navigating the active tab
    CategoryInput, // Typing a new category name
    ItemsInput,    // Editing a category's items, one per line
    Help,          // Showing the help overlay
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub tab: Tab,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Data (mirrors the Store after every command) ---
    pub document: Document,

    // --- Per-view UI state ---
    pub pack: PackState,
    pub new_trip: NewTripState,
    pub templates: TemplatesState,

    // --- Derived ---
    pub header_state: HeaderState,

    // --- Input Handling ---
    pub input: Option<InputState<'a>>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(document: Document, target: &str, palette_type: PaletteType) -> Self {
        let mut state = Self {
            palette_type,
            theme: Theme::from_palette_type(palette_type),
            ..Default::default()
        };
        state.header_state.target_text = format!(" {target} ");
        state.set_document(document);
        state
    }

    /// Replace the rendered document and keep every selection in range.
    pub fn set_document(&mut self, document: Document) {
        self.document = document;
        self.header_state.refresh(&self.document);
        self.new_trip.retain_known(&self.document);
        clamp_selection(
            &mut self.pack.list_state,
            self.document.current_trip.len(),
        );
        clamp_selection(
            &mut self.new_trip.list_state,
            NewTripState::rows(&self.document).len(),
        );
        clamp_selection(
            &mut self.templates.list_state,
            self.document.templates.len(),
        );
    }

    /// Row count of the list shown on the active tab.
    #[must_use]
    pub fn active_list_len(&self) -> usize {
        match self.tab {
            Tab::Pack => self.document.current_trip.len(),
            Tab::NewTrip => NewTripState::rows(&self.document).len(),
            Tab::Templates => self.document.templates.len(),
        }
    }

    pub fn active_list_state(&mut self) -> &mut ratatui::widgets::ListState {
        match self.tab {
            Tab::Pack => &mut self.pack.list_state,
            Tab::NewTrip => &mut self.new_trip.list_state,
            Tab::Templates => &mut self.templates.list_state,
        }
    }

    /// First visible row of the active list.
    #[must_use]
    pub fn active_list_offset(&self) -> usize {
        match self.tab {
            Tab::Pack => self.pack.list_state.offset(),
            Tab::NewTrip => self.new_trip.list_state.offset(),
            Tab::Templates => self.templates.list_state.offset(),
        }
    }

    #[must_use]
    pub fn selected_trip_item(&self) -> Option<&str> {
        self.pack.selected_item(&self.document)
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.templates.selected_category(&self.document)
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            tab: Tab::Pack,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            document: Document::default(),
            pack: PackState::default(),
            new_trip: NewTripState::default(),
            templates: TemplatesState::default(),
            header_state: HeaderState::default(),
            input: None,
            keymap: Arc::new(KeyMap::default()),
            palette_type: PaletteType::default(),
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Pack.next(), Tab::NewTrip);
        assert_eq!(Tab::Templates.next(), Tab::Pack);
        assert_eq!(Tab::Pack.prev(), Tab::Templates);
        assert_eq!(Tab::NewTrip.index(), 1);
    }

    #[test]
    fn test_new_selects_first_rows() {
        let mut doc = Document::default();
        doc.create_trip(["A", "B"]);
        let state = AppState::new(doc, "/tmp/x.json", PaletteType::Nord);

        assert_eq!(state.pack.list_state.selected(), Some(0));
        assert_eq!(state.templates.list_state.selected(), Some(0));
        assert_eq!(state.selected_trip_item(), Some("A"));
        assert_eq!(state.selected_category(), Some("Electronics"));
        assert_eq!(state.header_state.target_text, " /tmp/x.json ");
        assert_eq!(state.header_state.stats_text, " 0/2 packed ");
        assert_eq!(state.theme, Theme::from_palette_type(PaletteType::Nord));
    }

    #[test]
    fn test_set_document_clamps_selection() {
        let mut doc = Document::empty();
        doc.create_trip(["A", "B", "C"]);
        let mut state = AppState::new(doc, "mem", PaletteType::default());
        state.pack.list_state.select(Some(2));

        let mut smaller = Document::empty();
        smaller.create_trip(["A"]);
        state.set_document(smaller);

        assert_eq!(state.pack.list_state.selected(), Some(0));
        assert_eq!(state.templates.list_state.selected(), None);
    }

    #[test]
    fn test_set_document_drops_stale_exclusions() {
        let mut doc = Document::empty();
        doc.add_category("Beach");
        doc.replace_items("Beach", ["Towel", "Sunscreen"]);
        let mut state = AppState::new(doc.clone(), "mem", PaletteType::default());
        state
            .new_trip
            .excluded
            .insert(("Beach".to_string(), "Towel".to_string()));

        let mut without = doc.clone();
        without.delete_category("Beach");
        state.set_document(without);
        assert!(state.new_trip.excluded.is_empty());

        state.set_document(doc);
        assert!(state.new_trip.is_included("Beach", "Towel"));
    }

    #[test]
    fn test_set_document_keeps_live_exclusions() {
        let mut state = AppState::default();
        let category = state.document.templates.keys().next().cloned().unwrap();
        let item = state.document.templates[&category][0].clone();
        state.new_trip.excluded.insert((category.clone(), item.clone()));

        state.set_document(state.document.clone());
        assert!(!state.new_trip.is_included(&category, &item));
    }
}
