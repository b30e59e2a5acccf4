pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";
pub const PARTIAL: &str = "[-]";
pub const CURSOR: &str = "\u{25b8} ";
pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const LUGGAGE: &str = "\u{1f9f3}";
