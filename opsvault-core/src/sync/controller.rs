use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use opsvault_client::{
    record_id, CsvExport, Notifier, Record, ResourceApi, SessionStore, KEY_CURRENT_PAGE,
};

use crate::error::CoreResult;
use crate::form::FormState;
use crate::schema::{schema, PageKind};
use crate::table::{SelectionEvent, TableView};

use super::diff::changed_fields;

/// Fixed page size for all listings.
pub const PAGE_SIZE: u32 = 10;

/// Result of one load attempt.
#[derive(Debug)]
pub enum LoadOutcome {
    Table(TableView),
    /// The request failed; message for the empty-state placeholder. The
    /// transport already surfaced the toast.
    Failed { message: String },
    /// Dropped because another load was already in flight.
    Skipped,
    /// Completed but superseded by a newer load; result discarded.
    Stale,
}

/// Outcome of a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
    /// Edit produced no field changes; no network call was made.
    NothingChanged,
}

/// Save outcome plus the follow-up reload, when one ran.
#[derive(Debug)]
pub struct SaveResult {
    pub outcome: SaveOutcome,
    pub reload: Option<LoadOutcome>,
}

/// A delete awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub ids: Vec<i64>,
}

impl PendingDelete {
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }
}

/// Stateful coordinator for one UI session.
///
/// Owns the current page, listing parameters, row selection, and the edit
/// snapshot. All mutations flow through here so the UI stays a pure view
/// of the returned outcomes. CSV operations assume the caller respects
/// the page's `csv_enabled` flag.
pub struct SessionController {
    apis: HashMap<PageKind, Arc<dyn ResourceApi>>,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    page: PageKind,
    page_num: u32,
    keyword: String,
    selected: BTreeSet<i64>,
    /// Snapshot of the record under edit, diffed against on save.
    original: Option<Record>,
    loading: bool,
    generation: u64,
}

impl SessionController {
    /// Build a controller, restoring the last visited page from the
    /// session store.
    #[must_use]
    pub fn new(
        apis: HashMap<PageKind, Arc<dyn ResourceApi>>,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let page = store
            .get(KEY_CURRENT_PAGE)
            .and_then(|key| PageKind::from_key(&key))
            .unwrap_or(PageKind::Accounts);
        Self {
            apis,
            store,
            notifier,
            page,
            page_num: 1,
            keyword: String::new(),
            selected: BTreeSet::new(),
            original: None,
            loading: false,
            generation: 0,
        }
    }

    #[must_use]
    pub fn page(&self) -> PageKind {
        self.page
    }

    #[must_use]
    pub fn page_num(&self) -> u32 {
        self.page_num
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Whether every row on the given page is selected.
    #[must_use]
    pub fn all_selected(&self, page_ids: &[i64]) -> bool {
        crate::table::all_checked(page_ids, &self.selected)
    }

    fn api(&self) -> Arc<dyn ResourceApi> {
        Arc::clone(&self.apis[&self.page])
    }

    /// Switch pages: resets listing parameters, clears selection and any
    /// edit snapshot, and persists the choice for the next session.
    pub fn set_page(&mut self, kind: PageKind) {
        self.page = kind;
        self.page_num = 1;
        self.keyword.clear();
        self.selected.clear();
        self.original = None;
        self.generation += 1;
        self.store.set(KEY_CURRENT_PAGE, kind.key());
    }

    /// Load one page of the current resource.
    ///
    /// Re-entrant calls are dropped while a load is in flight, and a
    /// completed load whose generation was superseded (page switch) is
    /// discarded instead of rendered.
    pub async fn load(&mut self, page_num: u32, keyword: &str) -> LoadOutcome {
        if self.loading {
            return LoadOutcome::Skipped;
        }
        self.loading = true;
        self.generation += 1;
        let generation = self.generation;
        self.page_num = page_num;
        if self.keyword != keyword {
            keyword.clone_into(&mut self.keyword);
        }
        self.selected.clear();

        let api = self.api();
        let result = if keyword.is_empty() {
            api.list(page_num, PAGE_SIZE).await
        } else {
            api.find(keyword, page_num, PAGE_SIZE).await
        };
        self.loading = false;

        if generation != self.generation {
            log::debug!("discarding stale load (generation {generation})");
            return LoadOutcome::Stale;
        }
        match result {
            Ok(page) => LoadOutcome::Table(TableView::build(
                schema(self.page),
                page.items,
                page_num,
                page.total,
                PAGE_SIZE,
            )),
            Err(e) => LoadOutcome::Failed {
                message: e.to_string(),
            },
        }
    }

    /// Reload the current page with the current keyword.
    pub async fn reload(&mut self) -> LoadOutcome {
        let page_num = self.page_num;
        let keyword = self.keyword.clone();
        self.load(page_num, &keyword).await
    }

    /// Fold a table selection event into the selected set.
    pub fn apply_selection(&mut self, event: &SelectionEvent) {
        crate::table::apply(&mut self.selected, event);
    }

    /// Stage a batch delete of the selected rows. Warns and stages nothing
    /// when the selection is empty.
    pub fn begin_batch_delete(&mut self) -> Option<PendingDelete> {
        if self.selected.is_empty() {
            self.notifier.warning("No items selected");
            return None;
        }
        Some(PendingDelete {
            ids: self.selected.iter().copied().collect(),
        })
    }

    /// Stage a single-row delete.
    #[must_use]
    pub fn begin_delete(&self, id: i64) -> PendingDelete {
        PendingDelete { ids: vec![id] }
    }

    /// Execute a confirmed delete, then reload.
    pub async fn confirm_delete(&mut self, pending: &PendingDelete) -> CoreResult<LoadOutcome> {
        self.api().delete(&pending.ids).await?;
        self.selected.clear();
        Ok(self.reload().await)
    }

    /// Open the edit form. `record` is Some for edit (snapshotted for the
    /// save-time diff) and None for create.
    pub fn edit_form(&mut self, record: Option<&Record>) -> FormState {
        self.original = record.cloned();
        FormState::build(schema(self.page), record)
    }

    /// Persist the form: create when no snapshot exists, otherwise update
    /// with only the changed fields. An unchanged edit makes no network
    /// call and leaves the table as is.
    pub async fn save(&mut self, form: &FormState) -> CoreResult<SaveResult> {
        let data = form.collect()?;
        let snapshot_id = self.original.as_ref().and_then(record_id);

        let outcome = if let Some(id) = snapshot_id {
            let original = self.original.as_ref().cloned().unwrap_or_default();
            match changed_fields(&data, &original) {
                None => {
                    self.notifier.info("No changes to save");
                    return Ok(SaveResult {
                        outcome: SaveOutcome::NothingChanged,
                        reload: None,
                    });
                }
                Some(changes) => {
                    self.api().update(id, &changes).await?;
                    SaveOutcome::Updated
                }
            }
        } else {
            self.api().create(&data).await?;
            SaveOutcome::Created
        };

        self.original = None;
        let reload = self.reload().await;
        Ok(SaveResult {
            outcome,
            reload: Some(reload),
        })
    }

    /// Export the current resource as CSV. The caller writes the bytes to
    /// disk and reports the outcome.
    pub async fn export_csv(&self) -> CoreResult<CsvExport> {
        Ok(self.api().export_csv().await?)
    }

    /// Import a CSV file, report the summary in a single notice, and
    /// reload. Partial failure still reloads: some records landed.
    pub async fn import_csv(&mut self, filename: &str, bytes: Vec<u8>) -> CoreResult<LoadOutcome> {
        let summary = self.api().import_csv(filename, bytes).await?;
        if summary.failed_count > 0 {
            self.notifier.warning(&format!(
                "Import finished: {} succeeded, {} failed",
                summary.success_count, summary.failed_count
            ));
        } else {
            self.notifier
                .success(&format!("Imported {} records", summary.success_count));
        }
        Ok(self.reload().await)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use opsvault_client::{MemorySessionStore, NoticeLevel, RecordingNotifier};

    use crate::test_utils::MockResourceApi;

    use super::*;

    fn record(value: serde_json::Value) -> Record {
        let serde_json::Value::Object(map) = value else {
            panic!("fixture must be an object");
        };
        map
    }

    struct Fixture {
        controller: SessionController,
        api: Arc<MockResourceApi>,
        notifier: Arc<RecordingNotifier>,
        store: Arc<MemorySessionStore>,
    }

    fn fixture() -> Fixture {
        let api = Arc::new(MockResourceApi::new("accounts"));
        let notifier = Arc::new(RecordingNotifier::new());
        let store = Arc::new(MemorySessionStore::new());
        let mut apis: HashMap<PageKind, Arc<dyn ResourceApi>> = HashMap::new();
        for kind in PageKind::ALL {
            apis.insert(kind, api.clone());
        }
        let controller =
            SessionController::new(apis, store.clone(), notifier.clone());
        Fixture {
            controller,
            api,
            notifier,
            store,
        }
    }

    #[tokio::test]
    async fn load_renders_linked_rows() {
        let f = fixture();
        let mut controller = f.controller;
        f.api.push_item(record(json!({
            "ID": 1,
            "platform": "GitHub",
            "platform_url": "https://github.com",
            "username": "octo",
            "password": "s3cret",
        })));

        let outcome = controller.load(1, "").await;
        let LoadOutcome::Table(view) = outcome else {
            panic!("expected a table");
        };
        assert_eq!(view.rows.len(), 1);
        assert_eq!(
            view.rows[0].cells[1].link.as_deref(),
            Some("https://github.com")
        );
        assert!(view.pager.is_none());
        assert_eq!(f.api.calls(), ["list:1"]);
    }

    #[tokio::test]
    async fn keyword_routes_to_find() {
        let f = fixture();
        let mut controller = f.controller;
        let _ = controller.load(2, "gh").await;
        assert_eq!(f.api.calls(), ["find:gh:2"]);
        assert_eq!(controller.keyword(), "gh");
        assert_eq!(controller.page_num(), 2);
    }

    #[tokio::test]
    async fn set_page_resets_state_and_persists() {
        let f = fixture();
        let mut controller = f.controller;
        let _ = controller.load(3, "kw").await;
        controller.apply_selection(&SelectionEvent::Single {
            checked: true,
            id: 9,
        });

        controller.set_page(PageKind::Hosts);
        assert_eq!(controller.page(), PageKind::Hosts);
        assert_eq!(controller.page_num(), 1);
        assert_eq!(controller.keyword(), "");
        assert_eq!(controller.selected_count(), 0);
        assert_eq!(
            f.store.get(KEY_CURRENT_PAGE).as_deref(),
            Some("hosts")
        );
    }

    #[tokio::test]
    async fn restores_last_page_from_store() {
        let f = fixture();
        drop(f.controller);
        f.store.set(KEY_CURRENT_PAGE, "secrets");
        let mut apis: HashMap<PageKind, Arc<dyn ResourceApi>> = HashMap::new();
        for kind in PageKind::ALL {
            apis.insert(kind, f.api.clone());
        }
        let controller = SessionController::new(apis, f.store.clone(), f.notifier.clone());
        assert_eq!(controller.page(), PageKind::Secrets);
    }

    #[tokio::test]
    async fn unchanged_edit_skips_the_network() {
        let f = fixture();
        let mut controller = f.controller;
        let original = record(json!({
            "ID": 5,
            "platform": "GitHub",
            "platform_url": "https://github.com",
            "username": "octo",
            "password": "s3cret",
            "security_email": null,
        }));
        let form = controller.edit_form(Some(&original));
        let result = controller.save(&form).await.unwrap();
        assert_eq!(result.outcome, SaveOutcome::NothingChanged);
        assert!(result.reload.is_none());
        assert!(f.api.calls().is_empty());
        assert_eq!(
            f.notifier.taken(),
            [(NoticeLevel::Info, "No changes to save".to_string())]
        );
    }

    #[tokio::test]
    async fn changed_edit_updates_then_reloads() {
        let f = fixture();
        let mut controller = f.controller;
        let original = record(json!({
            "ID": 5,
            "platform": "GitHub",
            "platform_url": "https://github.com",
            "username": "octo",
            "password": "s3cret",
        }));
        let mut form = controller.edit_form(Some(&original));
        for field in &mut form.fields {
            if field.def.key == "username" {
                if let crate::form::FieldValue::Text { buffer, .. } = &mut field.value {
                    *buffer = "newname".to_string();
                }
            }
        }
        let result = controller.save(&form).await.unwrap();
        assert_eq!(result.outcome, SaveOutcome::Updated);
        assert!(result.reload.is_some());
        let calls = f.api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], "update:5:{\"username\":\"newname\"}");
        assert_eq!(calls[1], "list:1");
    }

    #[tokio::test]
    async fn cleared_logo_is_saved_as_empty() {
        let f = fixture();
        let mut controller = f.controller;
        controller.set_page(PageKind::Sites);
        let original = record(json!({
            "ID": 7,
            "name": "wiki",
            "url": "https://wiki.example.com",
            "logo": "old.png",
        }));
        let mut form = controller.edit_form(Some(&original));
        for field in &mut form.fields {
            if let crate::form::FieldValue::Logo { value, .. } = &mut field.value {
                value.clear();
            }
        }
        let result = controller.save(&form).await.unwrap();
        assert_eq!(result.outcome, SaveOutcome::Updated);
        let calls = f.api.calls();
        assert_eq!(calls[0], "update:7:{\"logo\":\"\"}");
    }

    #[tokio::test]
    async fn create_sends_full_payload() {
        let f = fixture();
        let mut controller = f.controller;
        let mut form = controller.edit_form(None);
        for field in &mut form.fields {
            if let crate::form::FieldValue::Text { buffer, .. } = &mut field.value {
                if field.def.required {
                    *buffer = "x".to_string();
                }
            }
        }
        let result = controller.save(&form).await.unwrap();
        assert_eq!(result.outcome, SaveOutcome::Created);
        let calls = f.api.calls();
        assert!(calls[0].starts_with("create:"));
        assert_eq!(calls[1], "list:1");
    }

    #[tokio::test]
    async fn batch_delete_requires_selection() {
        let f = fixture();
        let mut controller = f.controller;
        assert!(controller.begin_batch_delete().is_none());
        assert_eq!(
            f.notifier.taken(),
            [(NoticeLevel::Warning, "No items selected".to_string())]
        );

        controller.apply_selection(&SelectionEvent::All {
            checked: true,
            ids: vec![3, 1],
        });
        let pending = controller.begin_batch_delete().unwrap();
        assert_eq!(pending.ids, vec![1, 3]);
        assert_eq!(pending.count(), 2);
    }

    #[tokio::test]
    async fn confirmed_delete_clears_selection_and_reloads() {
        let f = fixture();
        let mut controller = f.controller;
        controller.apply_selection(&SelectionEvent::Single {
            checked: true,
            id: 4,
        });
        let pending = controller.begin_batch_delete().unwrap();
        let _ = controller.confirm_delete(&pending).await.unwrap();
        assert_eq!(controller.selected_count(), 0);
        assert_eq!(f.api.calls(), ["delete:[4]", "list:1"]);
    }

    #[tokio::test]
    async fn partial_import_warns_once_and_reloads() {
        let f = fixture();
        let mut controller = f.controller;
        f.api.set_import_result(8, 2);
        let _ = controller.import_csv("rows.csv", vec![1, 2]).await.unwrap();
        assert_eq!(
            f.notifier.taken(),
            [(
                NoticeLevel::Warning,
                "Import finished: 8 succeeded, 2 failed".to_string()
            )]
        );
        assert_eq!(f.api.calls(), ["import:rows.csv", "list:1"]);
    }

    #[tokio::test]
    async fn clean_import_reports_success() {
        let f = fixture();
        let mut controller = f.controller;
        f.api.set_import_result(3, 0);
        let _ = controller.import_csv("rows.csv", vec![]).await.unwrap();
        assert_eq!(
            f.notifier.taken(),
            [(NoticeLevel::Success, "Imported 3 records".to_string())]
        );
    }

    #[tokio::test]
    async fn failed_load_reports_placeholder_message() {
        let f = fixture();
        let mut controller = f.controller;
        f.api.fail_next(opsvault_client::ClientError::Business {
            code: Some(110_001),
            message: "backend down".to_string(),
        });
        let outcome = controller.load(1, "").await;
        let LoadOutcome::Failed { message } = outcome else {
            panic!("expected failure");
        };
        assert!(message.contains("backend down"));
    }
}
