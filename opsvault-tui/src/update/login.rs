//! Login screen updates.

use crate::message::LoginMessage;
use crate::model::{App, FocusPanel, NavigationState, Screen};

use super::content::apply_load;

pub fn update(app: &mut App, msg: LoginMessage) {
    match msg {
        LoginMessage::NextField | LoginMessage::PrevField => {
            app.login.focus = app.login.focus.toggle();
        }
        LoginMessage::Input(ch) => {
            app.login.buffer_mut().push(ch);
            app.login.error = None;
        }
        LoginMessage::Backspace => {
            app.login.buffer_mut().pop();
        }
        LoginMessage::Submit => submit(app),
    }
}

fn submit(app: &mut App) {
    let username = app.login.username.trim().to_string();
    let password = app.login.password.clone();
    if username.is_empty() || password.is_empty() {
        return;
    }

    match app.backend.login(&username, &password) {
        Ok(()) => {
            app.login.password.clear();
            app.login.error = None;
            app.screen = Screen::Main;
            app.focus = FocusPanel::Content;
            app.navigation = NavigationState::new(app.backend.page());
            let outcome = app.backend.load(1, "");
            apply_load(app, outcome);
        }
        Err(e) => {
            app.login.error = Some(e.to_string());
        }
    }
}
