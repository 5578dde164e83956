//! Icon subsystem surface (consumed, not implemented here).
//!
//! Logo pickers list previously uploaded icon filenames and upload new ones
//! into a namespace per resource kind. Static files are served under the
//! matching public path.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::{RequestOptions, Transport};

/// Icon namespaces the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Platform,
    Os,
    Site,
}

impl IconKind {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Os => "os",
            Self::Site => "site",
        }
    }

    /// Public path icons of this kind are served under.
    #[must_use]
    pub fn public_path(self) -> &'static str {
        match self {
            Self::Platform => "/platform-icons",
            Self::Os => "/os-icons",
            Self::Site => "/site-icons",
        }
    }
}

pub struct IconApi {
    transport: Arc<Transport>,
}

impl IconApi {
    #[must_use]
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List available icon filenames in a namespace.
    pub async fn list(&self, kind: IconKind) -> Result<Vec<String>> {
        let envelope = self
            .transport
            .get(
                &format!("/api/icons/{}-icons", kind.slug()),
                &[],
                &RequestOptions::default(),
            )
            .await?;
        let names = envelope
            .data
            .as_ref()
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(names)
    }

    /// Upload an icon file into a namespace; returns the stored filename.
    pub async fn upload(&self, kind: IconKind, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let url = self
            .transport
            .url(&format!("/api/icons/upload-{}-icon", kind.slug()));
        log::debug!("POST {url} (icon upload)");

        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let mut builder = self.transport.http().post(&url).multipart(form);
        if let Some(token) = self.transport.bearer_token() {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let response = builder.send().await.map_err(|e| ClientError::Network {
            detail: e.to_string(),
        })?;

        let status = response.status().as_u16();
        if status == 401 {
            self.transport.expire_session();
            return Err(ClientError::Unauthorized);
        }
        let envelope: crate::envelope::Envelope = response
            .json()
            .await
            .map_err(|e| ClientError::Parse {
                detail: e.to_string(),
            })?;
        let disposition = crate::transport::classify(status, true, &envelope);
        self.transport
            .settle(disposition, &envelope, &RequestOptions::with_success_toast())?;

        let stored = envelope
            .data
            .as_ref()
            .and_then(|d| d.get("filename"))
            .and_then(Value::as_str)
            .unwrap_or(filename)
            .to_string();
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_kind_paths() {
        assert_eq!(IconKind::Platform.slug(), "platform");
        assert_eq!(IconKind::Site.public_path(), "/site-icons");
        assert_eq!(IconKind::Os.public_path(), "/os-icons");
    }
}
