/// Document mutations. Each one is applied to the Store and followed by a
/// full write of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateTrip(Vec<String>),
    Toggle(String),
    ResetTrip,
    AddCategory(String),
    DeleteCategory(String),
    ReplaceItems(String, Vec<String>),
}
