//! Parameterized CRUD client, built once per resource kind.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::csv::CsvTransfer;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::transport::{RequestOptions, Transport};
use crate::types::{CsvExport, ImportSummary, ListPage, Record};

/// Singular form of a resource name, per the backend's fixed convention:
/// drop the trailing `s` (`accounts` → `account`).
#[must_use]
pub fn singular(resource: &str) -> &str {
    resource.strip_suffix('s').unwrap_or(resource)
}

/// Uniform CRUD surface over one resource collection.
///
/// This is the seam the sync controller depends on; tests substitute an
/// in-memory implementation.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// Plural resource name (`accounts`, `hosts`, ...).
    fn resource(&self) -> &str;

    async fn create(&self, data: &Record) -> Result<Envelope>;
    async fn update(&self, id: i64, changes: &Record) -> Result<Envelope>;
    /// Always transmits an array; single-id callers pass a one-element slice.
    async fn delete(&self, ids: &[i64]) -> Result<Envelope>;
    async fn find(&self, keyword: &str, page: u32, size: u32) -> Result<ListPage>;
    async fn list(&self, page: u32, size: u32) -> Result<ListPage>;
    async fn export_csv(&self) -> Result<CsvExport>;
    async fn import_csv(&self, filename: &str, bytes: Vec<u8>) -> Result<ImportSummary>;
}

/// HTTP-backed [`ResourceApi`] for `{base}/R/...` routes.
pub struct ResourceClient {
    transport: Arc<Transport>,
    resource: String,
    base: String,
}

impl ResourceClient {
    #[must_use]
    pub fn new(transport: Arc<Transport>, resource: impl Into<String>) -> Self {
        let resource = resource.into();
        let base = format!("/api/{resource}");
        Self {
            transport,
            resource,
            base,
        }
    }

    fn id_field(&self) -> String {
        format!("{}_id", singular(&self.resource))
    }

    fn ids_field(&self) -> String {
        format!("{}_ids", singular(&self.resource))
    }
}

#[async_trait]
impl ResourceApi for ResourceClient {
    fn resource(&self) -> &str {
        &self.resource
    }

    async fn create(&self, data: &Record) -> Result<Envelope> {
        self.transport
            .post(
                &format!("{}/create", self.base),
                data,
                &RequestOptions::with_success_toast(),
            )
            .await
    }

    async fn update(&self, id: i64, changes: &Record) -> Result<Envelope> {
        let mut body = changes.clone();
        body.insert(self.id_field(), json!(id));
        self.transport
            .put(
                &format!("{}/update", self.base),
                &Value::Object(body),
                &RequestOptions::with_success_toast(),
            )
            .await
    }

    async fn delete(&self, ids: &[i64]) -> Result<Envelope> {
        let body = json!({ self.ids_field(): ids });
        self.transport
            .delete(
                &format!("{}/delete", self.base),
                &body,
                &RequestOptions::with_success_toast(),
            )
            .await
    }

    async fn find(&self, keyword: &str, page: u32, size: u32) -> Result<ListPage> {
        let envelope = self
            .transport
            .get(
                &format!("{}/find", self.base),
                &[
                    ("keyword", keyword.to_string()),
                    ("page", page.to_string()),
                    ("size", size.to_string()),
                ],
                &RequestOptions::default(),
            )
            .await?;
        Ok(ListPage::from_data(envelope.data.as_ref()))
    }

    async fn list(&self, page: u32, size: u32) -> Result<ListPage> {
        let envelope = self
            .transport
            .get(
                &format!("{}/list", self.base),
                &[("page", page.to_string()), ("size", size.to_string())],
                &RequestOptions::default(),
            )
            .await?;
        Ok(ListPage::from_data(envelope.data.as_ref()))
    }

    async fn export_csv(&self) -> Result<CsvExport> {
        let filename = format!(
            "{}_{}.csv",
            self.resource,
            chrono::Utc::now().format("%Y-%m-%d")
        );
        CsvTransfer::new(self.transport.clone())
            .export(&format!("{}/export", self.base), filename)
            .await
    }

    async fn import_csv(&self, filename: &str, bytes: Vec<u8>) -> Result<ImportSummary> {
        CsvTransfer::new(self.transport.clone())
            .import(&format!("{}/import", self.base), filename, bytes)
            .await
    }
}
