use crate::domain::models::Document;
use ratatui::widgets::ListState;
use std::collections::HashSet;

/// Keep a list selection inside `len` rows (or clear it when empty).
pub fn clamp_selection(list_state: &mut ListState, len: usize) {
    if len == 0 {
        list_state.select(None);
    } else {
        let idx = list_state.selected().unwrap_or(0).min(len - 1);
        list_state.select(Some(idx));
    }
}

/// Move the selection by one row, wrapping at both ends.
pub fn step_selection(list_state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        list_state.select(None);
        return;
    }
    let next = match list_state.selected() {
        None => 0,
        Some(i) if forward => {
            if i >= len - 1 {
                0
            } else {
                i + 1
            }
        }
        Some(0) => len - 1,
        Some(i) => (i - 1).min(len - 1),
    };
    list_state.select(Some(next));
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackState {
    pub list_state: ListState,
}

impl PackState {
    #[must_use]
    pub fn selected_item<'d>(&self, document: &'d Document) -> Option<&'d str> {
        let idx = self.list_state.selected()?;
        document
            .current_trip
            .get_index(idx)
            .map(|(name, _)| name.as_str())
    }
}

/// One line of the new-trip picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripRow {
    Category(String),
    Item { category: String, item: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    All,
    Partial,
    None,
}

/// Which template items go into the next trip. Everything is included until
/// the user excludes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTripState {
    pub list_state: ListState,
    pub excluded: HashSet<(String, String)>,
}

impl NewTripState {
    #[must_use]
    pub fn rows(document: &Document) -> Vec<TripRow> {
        let mut rows = Vec::new();
        for (category, items) in &document.templates {
            rows.push(TripRow::Category(category.clone()));
            for item in items {
                rows.push(TripRow::Item {
                    category: category.clone(),
                    item: item.clone(),
                });
            }
        }
        rows
    }

    #[must_use]
    pub fn is_included(&self, category: &str, item: &str) -> bool {
        !self
            .excluded
            .contains(&(category.to_string(), item.to_string()))
    }

    #[must_use]
    pub fn category_inclusion(&self, document: &Document, category: &str) -> Inclusion {
        let Some(items) = document.templates.get(category) else {
            return Inclusion::None;
        };
        let included = items
            .iter()
            .filter(|item| self.is_included(category, item))
            .count();
        if included == 0 {
            Inclusion::None
        } else if included == items.len() {
            Inclusion::All
        } else {
            Inclusion::Partial
        }
    }

    /// Flip the selected row. On a category row the whole category follows:
    /// fully included becomes fully excluded, anything else fully included.
    pub fn toggle_selected(&mut self, document: &Document) {
        let rows = Self::rows(document);
        let Some(row) = self.list_state.selected().and_then(|i| rows.get(i)) else {
            return;
        };
        match row {
            TripRow::Item { category, item } => {
                let key = (category.clone(), item.clone());
                if !self.excluded.remove(&key) {
                    self.excluded.insert(key);
                }
            }
            TripRow::Category(category) => {
                let include = self.category_inclusion(document, category) != Inclusion::All;
                for item in document.templates.get(category).into_iter().flatten() {
                    let key = (category.clone(), item.clone());
                    if include {
                        self.excluded.remove(&key);
                    } else {
                        self.excluded.insert(key);
                    }
                }
            }
        }
    }

    /// Forget exclusions for items the templates no longer hold.
    pub fn retain_known(&mut self, document: &Document) {
        self.excluded.retain(|(category, item)| {
            document
                .templates
                .get(category)
                .is_some_and(|items| items.contains(item))
        });
    }

    pub fn include_all(&mut self) {
        self.excluded.clear();
    }

    /// Included items in template order.
    #[must_use]
    pub fn selected_items(&self, document: &Document) -> Vec<String> {
        document
            .templates
            .iter()
            .flat_map(|(category, items)| {
                items
                    .iter()
                    .filter(move |item| self.is_included(category, item))
                    .cloned()
            })
            .collect()
    }

    #[must_use]
    pub fn candidate_count(document: &Document) -> usize {
        document.templates.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplatesState {
    pub list_state: ListState,
}

impl TemplatesState {
    #[must_use]
    pub fn selected_category<'d>(&self, document: &'d Document) -> Option<&'d str> {
        let idx = self.list_state.selected()?;
        document
            .templates
            .get_index(idx)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        let mut doc = Document::empty();
        doc.templates.insert(
            "A".to_string(),
            vec!["a1".to_string(), "a2".to_string()],
        );
        doc.templates
            .insert("B".to_string(), vec!["b1".to_string()]);
        doc
    }

    #[test]
    fn test_step_selection_wraps() {
        let mut ls = ListState::default();
        step_selection(&mut ls, 3, true);
        assert_eq!(ls.selected(), Some(0));
        step_selection(&mut ls, 3, false);
        assert_eq!(ls.selected(), Some(2));
        step_selection(&mut ls, 3, true);
        assert_eq!(ls.selected(), Some(0));
        step_selection(&mut ls, 0, true);
        assert_eq!(ls.selected(), None);
    }

    #[test]
    fn test_clamp_selection() {
        let mut ls = ListState::default().with_selected(Some(7));
        clamp_selection(&mut ls, 3);
        assert_eq!(ls.selected(), Some(2));
        clamp_selection(&mut ls, 0);
        assert_eq!(ls.selected(), None);
    }

    #[test]
    fn test_rows_interleave_categories_and_items() {
        let rows = NewTripState::rows(&doc());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], TripRow::Category("A".to_string()));
        assert_eq!(
            rows[4],
            TripRow::Item {
                category: "B".to_string(),
                item: "b1".to_string()
            }
        );
    }

    #[test]
    fn test_everything_selected_by_default() {
        let state = NewTripState::default();
        assert_eq!(
            state.selected_items(&doc()),
            vec!["a1".to_string(), "a2".to_string(), "b1".to_string()]
        );
    }

    #[test]
    fn test_toggle_item_row() {
        let doc = doc();
        let mut state = NewTripState::default();
        state.list_state.select(Some(2)); // a2
        state.toggle_selected(&doc);
        assert_eq!(
            state.selected_items(&doc),
            vec!["a1".to_string(), "b1".to_string()]
        );
        assert_eq!(state.category_inclusion(&doc, "A"), Inclusion::Partial);

        state.toggle_selected(&doc);
        assert_eq!(state.category_inclusion(&doc, "A"), Inclusion::All);
    }

    #[test]
    fn test_toggle_category_row() {
        let doc = doc();
        let mut state = NewTripState::default();
        state.list_state.select(Some(0));

        state.toggle_selected(&doc);
        assert_eq!(state.category_inclusion(&doc, "A"), Inclusion::None);
        assert_eq!(state.selected_items(&doc), vec!["b1".to_string()]);

        state.toggle_selected(&doc);
        assert_eq!(state.category_inclusion(&doc, "A"), Inclusion::All);

        state.include_all();
        assert!(state.excluded.is_empty());
    }

    #[test]
    fn test_selected_trip_item_and_category() {
        let mut doc = doc();
        doc.create_trip(["x", "y"]);

        let mut pack = PackState::default();
        assert_eq!(pack.selected_item(&doc), None);
        pack.list_state.select(Some(1));
        assert_eq!(pack.selected_item(&doc), Some("y"));

        let mut templates = TemplatesState::default();
        templates.list_state.select(Some(1));
        assert_eq!(templates.selected_category(&doc), Some("B"));
    }
}
