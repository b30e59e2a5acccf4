use crate::domain::models::Document;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
    pub target_text: String,
    pub stats_text: String,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            target_text: " (no storage) ".to_string(),
            stats_text: " no active trip ".to_string(),
        }
    }
}

impl HeaderState {
    pub fn refresh(&mut self, document: &Document) {
        self.stats_text = if document.current_trip.is_empty() {
            " no active trip ".to_string()
        } else {
            format!(
                " {}/{} packed ",
                document.packed_count(),
                document.total_count()
            )
        };
    }
}
