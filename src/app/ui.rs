use crate::app::state::{AppMode, AppState, Tab};
use crate::components::{
    checklist::PackView, footer::Footer, header::Header, modals::ModalManager, tab_bar::TabBar,
    template_editor::TemplatesView, trip_builder::NewTripView,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        tabs: main[1],
        body: main[2],
        footer: main[3],
    }
}

/// Where the active tab's selectable rows are drawn inside `body`. Mirrors
/// the layout of the view widgets.
pub fn list_area(app_state: &AppState, body: Rect) -> Rect {
    let inner = |r: Rect| r.inner(Margin::new(1, 1));
    let skip = |r: Rect, top: u16| Rect {
        y: r.y.saturating_add(top),
        height: r.height.saturating_sub(top),
        ..r
    };
    let doc = &app_state.document;
    match app_state.tab {
        Tab::Pack if doc.current_trip.is_empty() => Rect::default(),
        // Gauge, caption and the optional banner sit above the items
        Tab::Pack => skip(inner(body), 2 + u16::from(doc.is_complete())),
        Tab::NewTrip if doc.templates.is_empty() => Rect::default(),
        Tab::NewTrip => skip(inner(body), 1),
        Tab::Templates => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(body);
            inner(panes[0])
        }
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();
    let layout = get_layout(f.area());
    let focused = app_state.mode == AppMode::Normal && app_state.last_error.is_none();

    // --- Header ---
    f.render_widget(
        Header {
            state: &app_state.header_state,
            theme: &theme,
            complete: app_state.document.is_complete(),
        },
        layout.header,
    );

    // --- Tabs ---
    f.render_widget(
        TabBar {
            active: app_state.tab,
            theme: &theme,
        },
        layout.tabs,
    );

    // --- Body ---
    if layout.body.width > 0 && layout.body.height > 0 {
        match app_state.tab {
            Tab::Pack => f.render_stateful_widget(
                PackView {
                    document: &app_state.document,
                    theme: &theme,
                    focused,
                },
                layout.body,
                &mut app_state.pack.list_state,
            ),
            Tab::NewTrip => f.render_stateful_widget(
                NewTripView {
                    document: &app_state.document,
                    theme: &theme,
                    focused,
                },
                layout.body,
                &mut app_state.new_trip,
            ),
            Tab::Templates => f.render_stateful_widget(
                TemplatesView {
                    document: &app_state.document,
                    theme: &theme,
                    focused,
                },
                layout.body,
                &mut app_state.templates.list_state,
            ),
        }
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme: &theme,
        },
        layout.footer,
    );

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme: &theme,
            app_state,
        },
        f.area(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Document;
    use crate::theme::PaletteType;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_layout_rows() {
        let layout = get_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.tabs.y, 1);
        assert_eq!(layout.body, Rect::new(0, 2, 80, 21));
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_draw_each_tab() {
        let mut doc = Document::default();
        doc.create_trip(["Passport / ID"]);
        let mut state = AppState::new(doc, "/tmp/packlist.json", PaletteType::Gruvbox);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| draw(f, &mut state)).unwrap();
        let out = screen(&terminal);
        assert!(out.contains("/tmp/packlist.json"));
        assert!(out.contains("[ ] Passport / ID"));

        state.tab = Tab::NewTrip;
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        assert!(screen(&terminal).contains("16 of 16 items selected"));

        state.tab = Tab::Templates;
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        assert!(screen(&terminal).contains("CATEGORIES"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut state = AppState::default();
        state.mode = AppMode::Help;
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
