//! Modal updates.

use std::fs;
use std::path::Path;

use opsvault_core::convert::capacity::StorageUnit;
use opsvault_core::form::{CapacityUnit, PortEntry, DEFAULT_PASSWORD_LEN};
use opsvault_core::{generate_password, FieldValue, FormState, PendingDelete, SaveOutcome};

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::state::Modal;
use crate::model::App;

use super::content::apply_load;

/// What happens to the modal after one message.
enum After {
    Keep,
    Close,
    Replace(Modal),
}

pub fn update(app: &mut App, msg: ModalMessage) {
    if msg == ModalMessage::Close {
        app.modal.close();
        app.clear_status();
        return;
    }

    // Take the modal out so backend calls can borrow the app freely.
    let Some(mut modal) = app.modal.active.take() else {
        return;
    };

    let after = match &mut modal {
        Modal::Form {
            form, ports_text, ..
        } => form_update(app, form, ports_text, msg),
        Modal::ConfirmDelete {
            pending,
            yes_focused,
        } => confirm_delete_update(app, pending, yes_focused, msg),
        Modal::ImportFile { path } => import_update(app, path, msg),
        Modal::Help | Modal::Error { .. } => After::Keep,
    };

    match after {
        After::Keep => app.modal.active = Some(modal),
        After::Close => app.clear_status(),
        After::Replace(next) => app.modal.active = Some(next),
    }
}

fn form_update(
    app: &mut App,
    form: &mut FormState,
    ports_text: &mut Option<String>,
    msg: ModalMessage,
) -> After {
    let count = form.fields.len();
    match msg {
        ModalMessage::NextField => {
            form.set_focus((form.focus + 1) % count);
        }
        ModalMessage::PrevField => {
            form.set_focus((form.focus + count - 1) % count);
        }
        ModalMessage::Input(ch) => {
            input_char(form, ports_text, ch);
        }
        ModalMessage::Backspace => {
            backspace(form, ports_text);
        }
        ModalMessage::ToggleSecrets => {
            for field in &mut form.fields {
                if let FieldValue::Text {
                    masked: true,
                    revealed,
                    ..
                } = &mut field.value
                {
                    *revealed = !*revealed;
                }
            }
        }
        ModalMessage::GeneratePassword => {
            if let FieldValue::Text {
                masked: true,
                buffer,
                ..
            } = &mut form.fields[form.focus].value
            {
                *buffer = generate_password(DEFAULT_PASSWORD_LEN);
            }
        }
        ModalMessage::PrevOption => cycle_option(form, false),
        ModalMessage::NextOption => cycle_option(form, true),
        ModalMessage::Confirm => return save(app, form, ports_text),
        ModalMessage::Close | ModalMessage::ToggleDeleteFocus => {}
    }
    After::Keep
}

fn input_char(form: &mut FormState, ports_text: &mut Option<String>, ch: char) {
    match &mut form.fields[form.focus].value {
        FieldValue::Ports { .. } => {
            if let Some(buffer) = ports_text {
                buffer.push(ch);
            }
        }
        FieldValue::Text { buffer, .. } | FieldValue::Json { buffer } => {
            buffer.push(ch);
            form.refresh_logo_enabled();
        }
        FieldValue::Capacity { buffer, .. } => {
            if ch.is_ascii_digit() || ch == '.' {
                buffer.push(ch);
            }
        }
        FieldValue::Logo { .. } | FieldValue::ReadOnly { .. } => {}
    }
}

fn backspace(form: &mut FormState, ports_text: &mut Option<String>) {
    match &mut form.fields[form.focus].value {
        FieldValue::Ports { .. } => {
            if let Some(buffer) = ports_text {
                buffer.pop();
            }
        }
        FieldValue::Text { buffer, .. }
        | FieldValue::Json { buffer }
        | FieldValue::Capacity { buffer, .. } => {
            buffer.pop();
            form.refresh_logo_enabled();
        }
        FieldValue::Logo { .. } | FieldValue::ReadOnly { .. } => {}
    }
}

fn step(pos: usize, len: usize, forward: bool) -> usize {
    if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    }
}

/// Cycle the focused field's option: storage units for capacities, the
/// icon choice (with an empty first entry) for enabled logo pickers.
fn cycle_option(form: &mut FormState, forward: bool) {
    match &mut form.fields[form.focus].value {
        FieldValue::Capacity {
            unit: CapacityUnit::Storage(unit),
            ..
        } => {
            let all = StorageUnit::ALL;
            let pos = all.iter().position(|u| u == unit).unwrap_or(0);
            *unit = all[step(pos, all.len(), forward)];
        }
        FieldValue::Logo {
            value,
            options,
            enabled: true,
        } if !options.is_empty() => {
            let mut choices = vec![String::new()];
            choices.extend(options.iter().cloned());
            let pos = choices.iter().position(|c| c == value).unwrap_or(0);
            value.clone_from(&choices[step(pos, choices.len(), forward)]);
        }
        _ => {}
    }
}

fn save(app: &mut App, form: &mut FormState, ports_text: &Option<String>) -> After {
    // Fold the raw ports text back into editable rows before validating.
    if let Some(text) = ports_text {
        let entries = parse_ports_text(text);
        for field in &mut form.fields {
            if let FieldValue::Ports {
                entries: slot,
            } = &mut field.value
            {
                *slot = entries.clone();
            }
        }
    }

    if !form.validate() {
        app.set_status(t().modal.field_required.to_string());
        return After::Keep;
    }

    match app.backend.save(form) {
        Ok(result) => {
            if result.outcome == SaveOutcome::NothingChanged {
                return After::Close;
            }
            if let Some(reload) = result.reload {
                apply_load(app, reload);
            }
            After::Close
        }
        Err(e) => {
            if e.is_expected() {
                app.set_status(e.to_string());
                After::Keep
            } else {
                After::Replace(Modal::Error {
                    message: e.to_string(),
                })
            }
        }
    }
}

fn confirm_delete_update(
    app: &mut App,
    pending: &PendingDelete,
    yes_focused: &mut bool,
    msg: ModalMessage,
) -> After {
    match msg {
        ModalMessage::ToggleDeleteFocus => {
            *yes_focused = !*yes_focused;
            After::Keep
        }
        ModalMessage::Confirm => {
            if !*yes_focused {
                return After::Close;
            }
            match app.backend.confirm_delete(pending) {
                Ok(outcome) => {
                    apply_load(app, outcome);
                    After::Close
                }
                Err(e) => {
                    if e.is_expected() {
                        app.set_status(e.to_string());
                        After::Close
                    } else {
                        After::Replace(Modal::Error {
                            message: e.to_string(),
                        })
                    }
                }
            }
        }
        _ => After::Keep,
    }
}

fn import_update(app: &mut App, path: &mut String, msg: ModalMessage) -> After {
    match msg {
        ModalMessage::Input(ch) => {
            path.push(ch);
            After::Keep
        }
        ModalMessage::Backspace => {
            path.pop();
            After::Keep
        }
        ModalMessage::Confirm => {
            let trimmed = path.trim();
            if trimmed.is_empty() {
                return After::Keep;
            }
            let bytes = match fs::read(trimmed) {
                Ok(bytes) => bytes,
                Err(e) => {
                    app.set_status(format!("Cannot read {trimmed}: {e}"));
                    return After::Keep;
                }
            };
            let filename = Path::new(trimmed)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(trimmed)
                .to_string();
            match app.backend.import_csv(&filename, bytes) {
                Ok(outcome) => {
                    apply_load(app, outcome);
                    After::Close
                }
                Err(e) => {
                    if e.is_expected() {
                        app.set_status(e.to_string());
                        After::Keep
                    } else {
                        After::Replace(Modal::Error {
                            message: e.to_string(),
                        })
                    }
                }
            }
        }
        _ => After::Keep,
    }
}

/// Parse `22:ssh, 443:https` into editable rows. Chunks without a colon
/// become port-only rows that collection will drop if left incomplete.
fn parse_ports_text(text: &str) -> Vec<PortEntry> {
    text.split(',')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| match chunk.split_once(':') {
            Some((port, service)) => PortEntry::new(port.trim(), service.trim()),
            None => PortEntry::new(chunk, ""),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ports_text_parses_pairs_and_partials() {
        let entries = parse_ports_text("22:ssh, 443:https, 80");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], PortEntry::new("22", "ssh"));
        assert_eq!(entries[2], PortEntry::new("80", ""));
        assert!(parse_ports_text("  ").is_empty());
    }
}
