//! Records panel updates.

use std::fs;
use std::path::Path;

use opsvault_core::{schema, FieldType, FieldValue, LoadOutcome, SelectionEvent};

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::state::Modal;
use crate::model::App;

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.records.select_previous(),
        ContentMessage::SelectNext => app.records.select_next(),
        ContentMessage::SelectFirst => app.records.select_first(),
        ContentMessage::SelectLast => app.records.select_last(),
        ContentMessage::PrevColumn => app.records.prev_column(),
        ContentMessage::NextColumn => app.records.next_column(),
        ContentMessage::PrevPage => flip_page(app, -1),
        ContentMessage::NextPage => flip_page(app, 1),
        ContentMessage::Add => open_form(app, None),
        ContentMessage::Edit => edit_cursor_row(app),
        ContentMessage::Delete => delete_cursor_row(app),
        ContentMessage::BatchDelete => {
            if let Some(pending) = app.backend.begin_batch_delete() {
                app.modal.active = Some(Modal::ConfirmDelete {
                    pending,
                    yes_focused: false,
                });
            }
        }
        ContentMessage::ToggleSelect => toggle_select(app),
        ContentMessage::ToggleSelectAll => toggle_select_all(app),
        ContentMessage::ToggleSecret => {
            let (row, col) = (app.records.cursor, app.records.col);
            if let Some(view) = app.records.view.as_mut() {
                view.toggle_secret(row, col);
            }
        }
        ContentMessage::Copy => copy_cell(app),
        ContentMessage::Import => {
            if csv_allowed(app) {
                app.modal.active = Some(Modal::ImportFile {
                    path: String::new(),
                });
            }
        }
        ContentMessage::Export => export_csv(app),
        ContentMessage::SearchStart => {
            app.records.search = Some(app.backend.keyword().to_string());
        }
        ContentMessage::SearchInput(ch) => {
            if let Some(buffer) = app.records.search.as_mut() {
                buffer.push(ch);
            }
        }
        ContentMessage::SearchBackspace => {
            if let Some(buffer) = app.records.search.as_mut() {
                buffer.pop();
            }
        }
        ContentMessage::SearchSubmit => {
            if let Some(keyword) = app.records.search.take() {
                let outcome = app.backend.load(1, &keyword);
                apply_load(app, outcome);
            }
        }
        ContentMessage::SearchCancel => {
            app.records.search = None;
        }
    }
}

pub fn apply_load(app: &mut App, outcome: LoadOutcome) {
    app.records.apply(outcome);
}

fn flip_page(app: &mut App, delta: i64) {
    let Some(pager) = app.records.view.as_ref().and_then(|v| v.pager.as_ref()) else {
        return;
    };
    let allowed = if delta < 0 {
        pager.prev_enabled
    } else {
        pager.next_enabled
    };
    if !allowed {
        return;
    }
    let target = if delta < 0 {
        pager.current - 1
    } else {
        pager.current + 1
    };
    let keyword = app.backend.keyword().to_string();
    let outcome = app.backend.load(target, &keyword);
    apply_load(app, outcome);
}

/// Build the form, fetch icon options for its logo fields, and open it.
fn open_form(app: &mut App, record: Option<&opsvault_client::Record>) {
    let creating = record.is_none();
    let mut form = app.backend.edit_form(record);

    let logo_fields: Vec<(String, opsvault_client::IconKind)> = form
        .fields
        .iter()
        .filter_map(|f| match f.def.field_type {
            FieldType::Logo { upload, .. } => Some((f.def.key.to_string(), upload)),
            _ => None,
        })
        .collect();
    for (key, kind) in logo_fields {
        let names = app.backend.icon_list(kind);
        form.set_logo_options(&key, names);
    }

    let ports_text = form.fields.iter().find_map(|f| match &f.value {
        FieldValue::Ports { entries } => {
            Some(opsvault_core::convert::ports::format(
                &opsvault_core::convert::ports::collect(entries),
            ))
        }
        _ => None,
    });

    app.modal.active = Some(Modal::Form {
        title: schema(app.backend.page()).title,
        creating,
        form,
        ports_text,
    });
}

fn edit_cursor_row(app: &mut App) {
    let record = app
        .records
        .view
        .as_ref()
        .and_then(|v| v.rows.get(app.records.cursor))
        .map(|row| row.record.clone());
    if let Some(record) = record {
        open_form(app, Some(&record));
    }
}

fn delete_cursor_row(app: &mut App) {
    if let Some(id) = app.records.cursor_id() {
        app.modal.active = Some(Modal::ConfirmDelete {
            pending: app.backend.begin_delete(id),
            yes_focused: false,
        });
    }
}

fn toggle_select(app: &mut App) {
    if let Some(id) = app.records.cursor_id() {
        let checked = !app.backend.is_selected(id);
        app.backend
            .apply_selection(&SelectionEvent::Single { checked, id });
    }
}

fn toggle_select_all(app: &mut App) {
    let Some(ids) = app.records.view.as_ref().map(|v| v.row_ids()) else {
        return;
    };
    let checked = !app.backend.all_selected(&ids);
    app.backend
        .apply_selection(&SelectionEvent::All { checked, ids });
}

fn copy_cell(app: &mut App) {
    let value = app
        .records
        .view
        .as_ref()
        .and_then(|v| v.copy_value(app.records.cursor, app.records.col));
    if let Some(value) = value {
        app.set_status(format!("Copied: {value}"));
    }
}

fn csv_allowed(app: &mut App) -> bool {
    if schema(app.backend.page()).csv_enabled {
        true
    } else {
        app.set_status(t().records.csv_unavailable.to_string());
        false
    }
}

fn export_csv(app: &mut App) {
    if !csv_allowed(app) {
        return;
    }
    match app.backend.export_csv() {
        Ok(export) => {
            let path = Path::new(&export.filename);
            match fs::write(path, &export.bytes) {
                Ok(()) => app.set_status(format!("Exported {}", export.filename)),
                Err(e) => app.set_status(format!("Export failed: {e}")),
            }
        }
        Err(e) => {
            if !e.is_expected() {
                app.modal.show_error(e.to_string());
            }
        }
    }
}
