use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category name -> ordered candidate items.
pub type Templates = IndexMap<String, Vec<String>>;

/// Item name -> packed flag, in the order the trip was generated.
pub type Trip = IndexMap<String, bool>;

/// The whole persisted state. Serialized as
/// `{"templates": {...}, "current_trip": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub templates: Templates,
    #[serde(default)]
    pub current_trip: Trip,
}

impl Default for Document {
    /// Seed categories and an empty trip.
    fn default() -> Self {
        let seed: [(&str, &[&str]); 4] = [
            (
                "Electronics",
                &[
                    "Phone charger",
                    "Power bank",
                    "Headphones",
                    "Laptop & charger",
                    "Travel adapter",
                ],
            ),
            (
                "Toiletries",
                &[
                    "Toothbrush & toothpaste",
                    "Face wash",
                    "Towel",
                    "Shampoo (travel size)",
                ],
            ),
            (
                "Clothing",
                &["Underwear (x3)", "Socks (x3)", "Pajamas", "Jacket"],
            ),
            (
                "Documents & Essentials",
                &["Passport / ID", "Cash / cards", "House keys"],
            ),
        ];

        Self {
            templates: seed
                .iter()
                .map(|(cat, items)| {
                    (
                        (*cat).to_string(),
                        items.iter().map(|i| (*i).to_string()).collect(),
                    )
                })
                .collect(),
            current_trip: Trip::new(),
        }
    }
}

impl Document {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: Templates::new(),
            current_trip: Trip::new(),
        }
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Replace the current trip with `items`, all unpacked. A repeated item
    /// keeps its first position.
    pub fn create_trip<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.current_trip = items.into_iter().map(|i| (i.into(), false)).collect();
    }

    /// Flip the packed flag of `item`. Returns the new flag, or `None` when
    /// the item is not on the trip.
    pub fn toggle(&mut self, item: &str) -> Option<bool> {
        let packed = self.current_trip.get_mut(item)?;
        *packed = !*packed;
        Some(*packed)
    }

    pub fn reset_trip(&mut self) {
        for packed in self.current_trip.values_mut() {
            *packed = false;
        }
    }

    /// Adds an empty category. Blank and already-present names are ignored.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.templates.contains_key(name) {
            return false;
        }
        self.templates.insert(name.to_string(), Vec::new());
        true
    }

    pub fn delete_category(&mut self, name: &str) -> bool {
        self.templates.shift_remove(name).is_some()
    }

    /// Replace a category's items, trimming entries and dropping blank ones.
    pub fn replace_items<I, S>(&mut self, category: &str, items: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(slot) = self.templates.get_mut(category) else {
            return false;
        };
        *slot = items
            .into_iter()
            .map(|i| i.as_ref().trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        true
    }

    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.current_trip.values().filter(|p| **p).count()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.current_trip.len()
    }

    /// Fraction packed, 0.0 for an empty trip.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            0.0
        } else {
            self.packed_count() as f64 / total as f64
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.current_trip.is_empty() && self.current_trip.values().all(|p| *p)
    }
}
