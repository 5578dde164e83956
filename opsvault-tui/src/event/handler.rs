//! Event to message translation.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, LoginMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Screen};

pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key) => handle_key_event(key, app),
        // Resizes just trigger the next draw.
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Release/Repeat would double keystrokes on Windows.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.screen == Screen::Login {
        return handle_login_keys(key);
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // The search line swallows plain characters while open.
    if app.records.search.is_some() && app.focus.is_content() {
        return handle_search_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::SwitchLanguage;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key)
    }
}

fn handle_login_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Quit,
        KeyCode::Tab | KeyCode::Down => AppMessage::Login(LoginMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Login(LoginMessage::PrevField),
        KeyCode::Enter => AppMessage::Login(LoginMessage::Submit),
        KeyCode::Backspace => AppMessage::Login(LoginMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Login(LoginMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_BATCH_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::BatchDelete);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_IMPORT.matches(&key) {
        return AppMessage::Content(ContentMessage::Import);
    }
    if DefaultKeymap::ACTION_EXPORT.matches(&key) {
        return AppMessage::Content(ContentMessage::Export);
    }
    if DefaultKeymap::TOGGLE_SELECT.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSelect);
    }
    if DefaultKeymap::SELECT_ALL.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSelectAll);
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::SearchStart);
    }
    if DefaultKeymap::REVEAL.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSecret);
    }
    if DefaultKeymap::COPY.matches(&key) {
        return AppMessage::Content(ContentMessage::Copy);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Char('h') => AppMessage::Content(ContentMessage::PrevColumn),
        KeyCode::Char('l') => AppMessage::Content(ContentMessage::NextColumn),
        KeyCode::Left | KeyCode::PageUp => AppMessage::Content(ContentMessage::PrevPage),
        KeyCode::Right | KeyCode::PageDown => AppMessage::Content(ContentMessage::NextPage),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Edit),
        _ => AppMessage::Noop,
    }
}

fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Content(ContentMessage::SearchCancel),
        KeyCode::Enter => AppMessage::Content(ContentMessage::SearchSubmit),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Content(ContentMessage::SearchInput(ch))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Form { .. } => handle_form_keys(key),
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::ImportFile { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                AppMessage::Modal(ModalMessage::Input(ch))
            }
            _ => AppMessage::Noop,
        },
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::TOGGLE_SECRETS.matches(&key) {
        return AppMessage::Modal(ModalMessage::ToggleSecrets);
    }
    if DefaultKeymap::GENERATE.matches(&key) {
        return AppMessage::Modal(ModalMessage::GeneratePassword);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        // Option cycling; plain text fields ignore these.
        KeyCode::Left => AppMessage::Modal(ModalMessage::PrevOption),
        KeyCode::Right => AppMessage::Modal(ModalMessage::NextOption),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}
