use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, Tab};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![FooterItem::new("Esc", "dismiss")],
        }];
    }

    match state.mode {
        AppMode::CategoryInput => vec![FooterGroup {
            name: "INPUT",
            items: vec![FooterItem::new("Enter", "add"), FooterItem::new("Esc", "cancel")],
        }],
        AppMode::ItemsInput => vec![FooterGroup {
            name: "EDIT",
            items: vec![
                FooterItem::new("Ctrl+S", "save"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc/?", "close")],
        }],
        AppMode::Normal => {
            let tab_group = match state.tab {
                Tab::Pack => FooterGroup {
                    name: "PACK",
                    items: vec![
                        FooterItem::new("Space", "toggle"),
                        FooterItem {
                            key: "r",
                            desc: "reset",
                            highlighted: state.document.is_complete(),
                        },
                    ],
                },
                Tab::NewTrip => FooterGroup {
                    name: "TRIP",
                    items: vec![
                        FooterItem::new("Space", "include"),
                        FooterItem {
                            key: "a",
                            desc: "all",
                            highlighted: !state.new_trip.excluded.is_empty(),
                        },
                        FooterItem::new("g", "generate"),
                    ],
                },
                Tab::Templates => FooterGroup {
                    name: "EDIT",
                    items: vec![
                        FooterItem::new("n", "new"),
                        FooterItem::new("e", "items"),
                        FooterItem::new("d", "delete"),
                    ],
                },
            };

            vec![
                FooterGroup {
                    name: "NAV",
                    items: vec![FooterItem::new("j/k", "move"), FooterItem::new("1-3", "tab")],
                },
                tab_group,
                FooterGroup {
                    name: "APP",
                    items: vec![
                        FooterItem::new("T", "theme"),
                        FooterItem::new("?", "help"),
                        FooterItem::new("q", "quit"),
                    ],
                },
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ErrorState;

    #[test]
    fn test_groups_follow_tab() {
        let mut state = AppState::default();
        state.tab = Tab::Templates;
        let groups = get_groups(&state);
        assert_eq!(groups[1].name, "EDIT");
        assert_eq!(groups[1].items[0].key, "n");
    }

    #[test]
    fn test_error_hides_everything_else() {
        let mut state = AppState::default();
        state.last_error = Some(ErrorState::error("boom"));
        let groups = get_groups(&state);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items[0].desc, "dismiss");
    }
}
