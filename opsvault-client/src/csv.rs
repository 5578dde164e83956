//! CSV import/export transfer helper.
//!
//! Same credential and 401/error handling as [`Transport`], but the export
//! path returns the raw byte stream instead of an envelope, and the import
//! path sends a multipart form and decodes the `{success_count,
//! failed_count}` summary.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::envelope::Envelope;
use crate::error::{ClientError, Result};
use crate::transport::{classify, RequestOptions, Transport};
use crate::types::{CsvExport, ImportSummary};

pub struct CsvTransfer {
    transport: Arc<Transport>,
}

impl CsvTransfer {
    #[must_use]
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.transport.bearer_token() {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Download the resource's CSV stream.
    pub async fn export(&self, path: &str, filename: String) -> Result<CsvExport> {
        let url = self.transport.url(path);
        log::debug!("GET {url} (csv export)");

        let response = self
            .authorized(self.transport.http().get(&url))
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status().as_u16();
        if status == 401 {
            self.transport.expire_session();
            return Err(ClientError::Unauthorized);
        }
        if !(200..300).contains(&status) {
            let text = response.text().await.unwrap_or_default();
            let envelope = Envelope::from_text(&text, status);
            return Err(ClientError::Business {
                code: None,
                message: envelope.best_message(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network {
                detail: format!("Failed to read export stream: {e}"),
            })?
            .to_vec();

        Ok(CsvExport { filename, bytes })
    }

    /// Upload a CSV file as multipart field `file` and decode the summary.
    pub async fn import(
        &self,
        path: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ImportSummary> {
        let url = self.transport.url(path);
        log::debug!("POST {url} (csv import, {} bytes)", bytes.len());

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("text/csv")
            .map_err(|e| ClientError::Serialization {
                detail: e.to_string(),
            })?;
        let form = Form::new().part("file", part);

        let response = self
            .authorized(self.transport.http().post(&url))
            .multipart(form)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        let text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        let envelope = if is_json {
            serde_json::from_str::<Envelope>(&text).map_err(|e| ClientError::Parse {
                detail: e.to_string(),
            })?
        } else {
            Envelope::from_text(&text, status)
        };

        let disposition = classify(status, false, &envelope);
        self.transport
            .settle(disposition, &envelope, &RequestOptions::default())?;

        let summary = envelope
            .data
            .map(|data| {
                serde_json::from_value::<ImportSummary>(data).map_err(|e| ClientError::Parse {
                    detail: e.to_string(),
                })
            })
            .transpose()?
            .unwrap_or_default();
        Ok(summary)
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    let err = if e.is_timeout() {
        ClientError::Timeout {
            detail: e.to_string(),
        }
    } else {
        ClientError::Network {
            detail: e.to_string(),
        }
    };
    log::error!("csv transfer failed: {err}");
    err
}
