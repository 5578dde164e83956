//! State update logic. The only place the model is mutated.

mod content;
mod login;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Login(login_msg) => {
            login::update(app, login_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.records.search.is_some() {
                app.records.search = None;
            }
        }

        AppMessage::Refresh => {
            let outcome = app.backend.reload();
            content::apply_load(app, outcome);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::SwitchLanguage => {
            app.switch_language();
        }

        AppMessage::Noop => {}
    }

    // Surface whatever the backend reported during this update.
    app.sync_notices();
}
