//! Backend layer: the bridge between the synchronous UI loop and the
//! async client stack.
//!
//! Owns a tokio runtime and blocks on network calls at the message
//! boundary; the rest of the TUI never touches async code. The draw loop
//! stalls for the duration of a call, which is acceptable for an admin
//! console talking to one backend.

mod notifier;
mod store;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use opsvault_client::{
    CsvExport, IconApi, IconKind, NoticeLevel, Record, ResourceApi, ResourceClient, SessionStore,
    Transport, UserApi, KEY_JWT_TOKEN, KEY_LANGUAGE,
};
use opsvault_core::{
    FormState, LoadOutcome, PageKind, PendingDelete, SaveResult, SelectionEvent, SessionController,
};

pub use notifier::StatusNotifier;
pub use store::JsonFileSessionStore;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub struct Backend {
    runtime: Runtime,
    controller: SessionController,
    users: UserApi,
    icons: IconApi,
    store: Arc<dyn SessionStore>,
    notices: Arc<StatusNotifier>,
}

impl Backend {
    /// Wire up the client stack. The base URL comes from `OPSVAULT_BASE_URL`
    /// when set.
    pub fn new() -> Result<Self> {
        let base_url =
            std::env::var("OPSVAULT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let runtime = Runtime::new().context("starting async runtime")?;

        let store: Arc<dyn SessionStore> = Arc::new(JsonFileSessionStore::new());
        let notices = Arc::new(StatusNotifier::new());
        let transport = Arc::new(Transport::new(base_url, store.clone(), notices.clone()));

        let mut apis: HashMap<PageKind, Arc<dyn ResourceApi>> = HashMap::new();
        for kind in PageKind::ALL {
            apis.insert(
                kind,
                Arc::new(ResourceClient::new(transport.clone(), kind.key())),
            );
        }

        Ok(Self {
            runtime,
            controller: SessionController::new(apis, store.clone(), notices.clone()),
            users: UserApi::new(transport.clone(), store.clone()),
            icons: IconApi::new(transport),
            store,
            notices,
        })
    }

    // ─── Session ───

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.store.get(KEY_JWT_TOKEN).is_some()
    }

    pub fn login(&self, username: &str, password: &str) -> opsvault_client::Result<()> {
        self.runtime.block_on(self.users.login(username, password))
    }

    pub fn logout(&self) {
        self.runtime.block_on(self.users.logout());
    }

    #[must_use]
    pub fn stored_language(&self) -> Option<String> {
        self.store.get(KEY_LANGUAGE)
    }

    pub fn store_language(&self, code: &str) {
        self.store.set(KEY_LANGUAGE, code);
    }

    // ─── Listing ───

    #[must_use]
    pub fn page(&self) -> PageKind {
        self.controller.page()
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        self.controller.keyword()
    }

    pub fn set_page(&mut self, kind: PageKind) {
        self.controller.set_page(kind);
    }

    pub fn load(&mut self, page_num: u32, keyword: &str) -> LoadOutcome {
        self.runtime.block_on(self.controller.load(page_num, keyword))
    }

    pub fn reload(&mut self) -> LoadOutcome {
        self.runtime.block_on(self.controller.reload())
    }

    // ─── Selection ───

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.controller.selected_count()
    }

    #[must_use]
    pub fn is_selected(&self, id: i64) -> bool {
        self.controller.is_selected(id)
    }

    #[must_use]
    pub fn all_selected(&self, page_ids: &[i64]) -> bool {
        self.controller.all_selected(page_ids)
    }

    pub fn apply_selection(&mut self, event: &SelectionEvent) {
        self.controller.apply_selection(event);
    }

    // ─── Mutations ───

    pub fn edit_form(&mut self, record: Option<&Record>) -> FormState {
        self.controller.edit_form(record)
    }

    pub fn save(&mut self, form: &FormState) -> opsvault_core::CoreResult<SaveResult> {
        self.runtime.block_on(self.controller.save(form))
    }

    pub fn begin_delete(&self, id: i64) -> PendingDelete {
        self.controller.begin_delete(id)
    }

    pub fn begin_batch_delete(&mut self) -> Option<PendingDelete> {
        self.controller.begin_batch_delete()
    }

    pub fn confirm_delete(
        &mut self,
        pending: &PendingDelete,
    ) -> opsvault_core::CoreResult<LoadOutcome> {
        self.runtime.block_on(self.controller.confirm_delete(pending))
    }

    // ─── CSV ───

    pub fn export_csv(&self) -> opsvault_core::CoreResult<CsvExport> {
        self.runtime.block_on(self.controller.export_csv())
    }

    pub fn import_csv(
        &mut self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> opsvault_core::CoreResult<LoadOutcome> {
        self.runtime.block_on(self.controller.import_csv(filename, bytes))
    }

    // ─── Icons ───

    pub fn icon_list(&self, kind: IconKind) -> Vec<String> {
        match self.runtime.block_on(self.icons.list(kind)) {
            Ok(names) => names,
            Err(e) => {
                log::debug!("icon listing failed: {e}");
                Vec::new()
            }
        }
    }

    // ─── Notices ───

    pub fn drain_notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.drain()
    }
}
