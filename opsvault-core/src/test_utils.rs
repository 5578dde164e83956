//! In-memory [`ResourceApi`] used by controller tests.

use std::sync::Mutex;

use async_trait::async_trait;

use opsvault_client::{
    ClientError, CsvExport, Envelope, ImportSummary, ListPage, Record, ResourceApi, Result,
};

/// Records every call and serves canned data.
pub struct MockResourceApi {
    resource: &'static str,
    items: Mutex<Vec<Record>>,
    calls: Mutex<Vec<String>>,
    fail_next: Mutex<Option<ClientError>>,
    import_result: Mutex<ImportSummary>,
}

impl MockResourceApi {
    #[must_use]
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            items: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
            import_result: Mutex::new(ImportSummary::default()),
        }
    }

    pub fn push_item(&self, record: Record) {
        if let Ok(mut items) = self.items.lock() {
            items.push(record);
        }
    }

    pub fn set_import_result(&self, success_count: u64, failed_count: u64) {
        if let Ok(mut result) = self.import_result.lock() {
            *result = ImportSummary {
                success_count,
                failed_count,
            };
        }
    }

    /// Make the next call fail with the given error.
    pub fn fail_next(&self, error: ClientError) {
        if let Ok(mut slot) = self.fail_next.lock() {
            *slot = Some(error);
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record_call(&self, call: String) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if let Ok(mut slot) = self.fail_next.lock() {
            if let Some(error) = slot.take() {
                return Err(error);
            }
        }
        Ok(())
    }

    fn page(&self) -> ListPage {
        let items = self.items.lock().map(|i| i.clone()).unwrap_or_default();
        let total = u64::try_from(items.len()).unwrap_or(u64::MAX);
        ListPage { items, total }
    }
}

#[async_trait]
impl ResourceApi for MockResourceApi {
    fn resource(&self) -> &str {
        self.resource
    }

    async fn create(&self, data: &Record) -> Result<Envelope> {
        let payload = serde_json::to_string(data).unwrap_or_default();
        self.record_call(format!("create:{payload}"))?;
        Ok(Envelope::default())
    }

    async fn update(&self, id: i64, changes: &Record) -> Result<Envelope> {
        let payload = serde_json::to_string(changes).unwrap_or_default();
        self.record_call(format!("update:{id}:{payload}"))?;
        Ok(Envelope::default())
    }

    async fn delete(&self, ids: &[i64]) -> Result<Envelope> {
        self.record_call(format!("delete:{ids:?}"))?;
        Ok(Envelope::default())
    }

    async fn find(&self, keyword: &str, page: u32, _size: u32) -> Result<ListPage> {
        self.record_call(format!("find:{keyword}:{page}"))?;
        Ok(self.page())
    }

    async fn list(&self, page: u32, _size: u32) -> Result<ListPage> {
        self.record_call(format!("list:{page}"))?;
        Ok(self.page())
    }

    async fn export_csv(&self) -> Result<CsvExport> {
        self.record_call("export".to_string())?;
        Ok(CsvExport {
            filename: format!("{}_test.csv", self.resource),
            bytes: b"ID,platform\n".to_vec(),
        })
    }

    async fn import_csv(&self, filename: &str, _bytes: Vec<u8>) -> Result<ImportSummary> {
        self.record_call(format!("import:{filename}"))?;
        Ok(self
            .import_result
            .lock()
            .map(|r| *r)
            .unwrap_or_default())
    }
}
