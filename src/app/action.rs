use crate::app::state::Tab;
use crate::domain::models::Document;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation ---
    NextTab,
    PrevTab,
    SwitchTab(Tab),
    SelectNext,
    SelectPrev,
    SelectIndex(usize),

    // --- Pack ---
    ToggleItem, // Flip the selected item's packed flag
    ResetTrip,  // Unpack everything

    // --- New Trip ---
    ToggleInclusion, // Include/exclude the selected item or category
    IncludeAll,      // Back to "everything included"
    GenerateTrip,    // Replace the current trip with the included items

    // --- Templates ---
    AddCategoryIntent,     // Open the category name input
    AddCategory(String),   // Submit the category name
    DeleteCategory,        // Delete the selected category
    EditItemsIntent,       // Open the item editor for the selected category
    SaveItems(Vec<String>), // Submit the edited item list

    // --- UI Mode Transitions ---
    ToggleHelp,
    CycleTheme,
    CancelMode,
    TextAreaInput(crossterm::event::KeyEvent),

    // --- Store results ---
    DocumentUpdated(Box<Document>),
    OperationCompleted(Result<String, String>),
}
