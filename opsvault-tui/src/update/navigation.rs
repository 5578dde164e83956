//! Navigation panel updates.

use crate::message::NavigationMessage;
use crate::model::state::LoginState;
use crate::model::{App, FocusPanel, NavEntry, Screen};

use super::content::apply_load;

pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Confirm => confirm(app),
    }
}

fn confirm(app: &mut App) {
    match app.navigation.current() {
        NavEntry::Page(kind) => {
            app.backend.set_page(kind);
            app.records.search = None;
            app.records.cursor = 0;
            app.records.col = 0;
            let outcome = app.backend.load(1, "");
            apply_load(app, outcome);
            app.focus = FocusPanel::Content;
        }
        NavEntry::Logout => {
            app.backend.logout();
            app.records = crate::model::state::RecordsState::new();
            app.login = LoginState::new();
            app.screen = Screen::Login;
            app.focus = FocusPanel::Navigation;
            app.clear_status();
        }
    }
}
