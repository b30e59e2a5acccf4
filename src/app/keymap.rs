use super::action::Action;
use super::state::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Consulted first, per tab
    pub tabs: HashMap<Tab, HashMap<KeyEvent, Action>>,
    pub global: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();

        // --- Global ---
        global.insert(ch('q'), Action::Quit);
        global.insert(ch('?'), Action::ToggleHelp);
        global.insert(ch('T'), Action::CycleTheme);
        global.insert(key(KeyCode::Esc), Action::CancelMode);
        global.insert(key(KeyCode::Tab), Action::NextTab);
        global.insert(key(KeyCode::BackTab), Action::PrevTab);
        global.insert(ch('1'), Action::SwitchTab(Tab::Pack));
        global.insert(ch('2'), Action::SwitchTab(Tab::NewTrip));
        global.insert(ch('3'), Action::SwitchTab(Tab::Templates));
        global.insert(ch('j'), Action::SelectNext);
        global.insert(key(KeyCode::Down), Action::SelectNext);
        global.insert(ch('k'), Action::SelectPrev);
        global.insert(key(KeyCode::Up), Action::SelectPrev);

        // --- Pack ---
        let mut pack = HashMap::new();
        pack.insert(ch(' '), Action::ToggleItem);
        pack.insert(key(KeyCode::Enter), Action::ToggleItem);
        pack.insert(ch('r'), Action::ResetTrip);

        // --- New Trip ---
        let mut new_trip = HashMap::new();
        new_trip.insert(ch(' '), Action::ToggleInclusion);
        new_trip.insert(ch('a'), Action::IncludeAll);
        new_trip.insert(ch('g'), Action::GenerateTrip);
        new_trip.insert(key(KeyCode::Enter), Action::GenerateTrip);

        // --- Templates ---
        let mut templates = HashMap::new();
        templates.insert(ch('n'), Action::AddCategoryIntent);
        templates.insert(ch('d'), Action::DeleteCategory);
        templates.insert(ch('e'), Action::EditItemsIntent);
        templates.insert(key(KeyCode::Enter), Action::EditItemsIntent);

        let tabs = HashMap::from([
            (Tab::Pack, pack),
            (Tab::NewTrip, new_trip),
            (Tab::Templates, templates),
        ]);

        Self { tabs, global }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, tab: Tab) -> Option<Action> {
        let event = normalize(event);
        if let Some(action) = self.tabs.get(&tab).and_then(|m| m.get(&event)) {
            return Some(action.clone());
        }
        self.global.get(&event).cloned()
    }
}

/// Strip what terminals disagree on: SHIFT on characters that already carry
/// their case, plus event kind and state.
fn normalize(event: KeyEvent) -> KeyEvent {
    let modifiers = match event.code {
        KeyCode::Char(_) | KeyCode::BackTab => event.modifiers - KeyModifiers::SHIFT,
        _ => event.modifiers,
    };
    KeyEvent::new(event.code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_bindings_shadow_global() {
        let map = KeyMap::default();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map.get_action(enter, Tab::Pack), Some(Action::ToggleItem));
        assert_eq!(
            map.get_action(enter, Tab::NewTrip),
            Some(Action::GenerateTrip)
        );
        assert_eq!(
            map.get_action(enter, Tab::Templates),
            Some(Action::EditItemsIntent)
        );
    }

    #[test]
    fn test_shifted_chars_match() {
        let map = KeyMap::default();
        let shifted_t = KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert_eq!(map.get_action(shifted_t, Tab::Pack), Some(Action::CycleTheme));

        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map.get_action(back_tab, Tab::Pack), Some(Action::PrevTab));
    }

    #[test]
    fn test_plain_char_bindings() {
        let map = KeyMap::default();
        let press = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(map.get_action(press('q'), Tab::Templates), Some(Action::Quit));
        assert_eq!(
            map.get_action(press('3'), Tab::Pack),
            Some(Action::SwitchTab(Tab::Templates))
        );
        assert_eq!(
            map.get_action(press(' '), Tab::NewTrip),
            Some(Action::ToggleInclusion)
        );
        assert_eq!(
            map.get_action(press('d'), Tab::Templates),
            Some(Action::DeleteCategory)
        );
    }

    #[test]
    fn test_control_chords_do_not_match_plain_keys() {
        let map = KeyMap::default();
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(map.get_action(ctrl_q, Tab::Pack), None);
    }

    #[test]
    fn test_unbound_on_other_tabs() {
        let map = KeyMap::default();
        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(map.get_action(r, Tab::Pack), Some(Action::ResetTrip));
        assert_eq!(map.get_action(r, Tab::Templates), None);
    }
}
