//! Single entry point for all network calls.
//!
//! Every request goes through [`Transport::request`]: bearer injection,
//! JSON/non-JSON normalization into the uniform [`Envelope`], outcome
//! classification, and the toast/logout side effects. Classification itself
//! is a pure function so the auth-expiry and business-error contracts are
//! testable without a server.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::envelope::{is_error_code, is_success_code, Envelope};
use crate::error::{ClientError, Result};
use crate::notify::{NoticeLevel, Notifier};
use crate::session::{SessionStore, KEY_JWT_TOKEN, KEY_USER};

/// Per-call behavior switches.
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions {
    /// Suppress the global 401 handling. Used exactly by the login call so a
    /// wrong password cannot trigger a logout/redirect loop.
    pub skip_auth_check: bool,
    /// Surface a success toast when the envelope carries a success code.
    /// Off by default; mutating calls opt in.
    pub notify_success: bool,
    /// Surface an error toast on business failures. On by default.
    pub notify_error: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            skip_auth_check: false,
            notify_success: false,
            notify_error: true,
        }
    }
}

impl RequestOptions {
    /// Defaults plus a success toast, for create/update/delete calls.
    #[must_use]
    pub fn with_success_toast() -> Self {
        Self {
            notify_success: true,
            ..Self::default()
        }
    }
}

/// How a normalized response must be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// 401 without `skip_auth_check`: terminal for the session.
    Expired,
    /// Success by code range or HTTP status.
    Success,
    /// Business-rule rejection (error-range code, or non-2xx with no code).
    Business { code: Option<i64>, message: String },
}

/// Classify a normalized response. 401 short-circuits before any result-code
/// inspection; an explicit code otherwise wins over the HTTP status.
pub(crate) fn classify(status: u16, skip_auth_check: bool, envelope: &Envelope) -> Disposition {
    if status == 401 && !skip_auth_check {
        return Disposition::Expired;
    }
    if let Some(code) = envelope.code {
        if is_success_code(code) {
            return Disposition::Success;
        }
        if is_error_code(code) {
            return Disposition::Business {
                code: Some(code),
                message: envelope.best_message(),
            };
        }
    }
    if (200..300).contains(&status) {
        Disposition::Success
    } else {
        Disposition::Business {
            code: None,
            message: envelope.best_message(),
        }
    }
}

/// HTTP transport with bearer auth and uniform error handling.
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl Transport {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            store,
            notifier,
        }
    }

    /// Absolute URL for an API path (`/api/...`).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Stored bearer credential, if any. Absence silently omits the header;
    /// the backend rejects on its own.
    pub(crate) fn bearer_token(&self) -> Option<String> {
        self.store.get(KEY_JWT_TOKEN)
    }

    /// Tear down the expired session: clear credential and user, surface a
    /// single notice. The UI layer reacts to the raised `Unauthorized` by
    /// returning to the login surface.
    pub(crate) fn expire_session(&self) {
        self.store.remove(KEY_JWT_TOKEN);
        self.store.remove(KEY_USER);
        self.notifier
            .notify(NoticeLevel::Error, "Session expired, please log in again");
    }

    /// Apply a disposition's side effects and convert it to a result.
    pub(crate) fn settle(
        &self,
        disposition: Disposition,
        envelope: &Envelope,
        opts: &RequestOptions,
    ) -> Result<()> {
        match disposition {
            Disposition::Expired => {
                self.expire_session();
                Err(ClientError::Unauthorized)
            }
            Disposition::Success => {
                if opts.notify_success {
                    self.notifier
                        .notify(NoticeLevel::Success, &envelope.best_message());
                }
                Ok(())
            }
            Disposition::Business { code, message } => {
                if opts.notify_error {
                    self.notifier.notify(NoticeLevel::Error, &message);
                }
                Err(ClientError::Business { code, message })
            }
        }
    }

    /// Perform a request and return the normalized envelope.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
        opts: &RequestOptions,
    ) -> Result<Envelope> {
        let url = self.url(path);
        log::debug!("{method} {url}");

        let mut builder = self.client.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = self.bearer_token() {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::Network {
                    detail: e.to_string(),
                }
            };
            log::error!("{url}: {err}");
            err
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network {
                detail: format!("Failed to read response body: {e}"),
            })?;

        let envelope = if is_json {
            serde_json::from_str::<Envelope>(&text).map_err(|e| {
                log::error!("JSON parse failed: {e}");
                ClientError::Parse {
                    detail: e.to_string(),
                }
            })?
        } else {
            Envelope::from_text(&text, status)
        };

        let disposition = classify(status, opts.skip_auth_check, &envelope);
        self.settle(disposition, &envelope, opts)?;
        Ok(envelope)
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        opts: &RequestOptions,
    ) -> Result<Envelope> {
        self.request(Method::GET, path, query, None, opts).await
    }

    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        opts: &RequestOptions,
    ) -> Result<Envelope> {
        let body = to_value(body)?;
        self.request(Method::POST, path, &[], Some(&body), opts)
            .await
    }

    pub async fn put<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        opts: &RequestOptions,
    ) -> Result<Envelope> {
        let body = to_value(body)?;
        self.request(Method::PUT, path, &[], Some(&body), opts).await
    }

    /// DELETE with a JSON body (the backend's batch-delete contract).
    pub async fn delete<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        opts: &RequestOptions,
    ) -> Result<Envelope> {
        let body = to_value(body)?;
        self.request(Method::DELETE, path, &[], Some(&body), opts)
            .await
    }
}

fn to_value<T: Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ClientError::Serialization {
        detail: e.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::envelope::info_code;
    use crate::notify::RecordingNotifier;
    use crate::session::MemorySessionStore;

    fn envelope_with_code(code: i64, info: &str) -> Envelope {
        Envelope {
            code: Some(code),
            info: Some(info.to_string()),
            ..Envelope::default()
        }
    }

    // ---- classify ----

    #[test]
    fn unauthorized_short_circuits_before_code_parsing() {
        // Even with an error-range code in the body, 401 wins.
        let env = envelope_with_code(info_code::EXPIRED_TOKEN, "expired");
        assert_eq!(classify(401, false, &env), Disposition::Expired);
    }

    #[test]
    fn login_call_tolerates_401() {
        let env = envelope_with_code(info_code::FAILED_TO_LOGIN, "bad credentials");
        assert_eq!(
            classify(401, true, &env),
            Disposition::Business {
                code: Some(info_code::FAILED_TO_LOGIN),
                message: "bad credentials".to_string(),
            }
        );
    }

    #[test]
    fn success_code_wins_over_status() {
        let env = envelope_with_code(info_code::SUCCESSFUL_FIND, "ok");
        assert_eq!(classify(200, false, &env), Disposition::Success);
    }

    #[test]
    fn error_code_raises_business() {
        let env = envelope_with_code(info_code::RECORD_NOT_FOUND, "record not found");
        assert_eq!(
            classify(200, false, &env),
            Disposition::Business {
                code: Some(info_code::RECORD_NOT_FOUND),
                message: "record not found".to_string(),
            }
        );
    }

    #[test]
    fn no_code_falls_back_to_http_status() {
        let ok = Envelope::default();
        assert_eq!(classify(200, false, &ok), Disposition::Success);
        assert_eq!(classify(204, false, &ok), Disposition::Success);

        let bad = Envelope {
            message: Some("boom".into()),
            ..Envelope::default()
        };
        assert_eq!(
            classify(500, false, &bad),
            Disposition::Business {
                code: None,
                message: "boom".to_string(),
            }
        );
    }

    // ---- settle side effects ----

    fn transport() -> (Transport, Arc<MemorySessionStore>, Arc<RecordingNotifier>) {
        let store = Arc::new(MemorySessionStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let transport = Transport::new(
            "http://localhost:8080",
            store.clone(),
            notifier.clone(),
        );
        (transport, store, notifier)
    }

    #[test]
    fn expired_clears_credentials_and_notifies_once() {
        let (transport, store, notifier) = transport();
        store.set(KEY_JWT_TOKEN, "tok");
        store.set(KEY_USER, "{\"username\":\"admin\"}");

        let result = transport.settle(
            Disposition::Expired,
            &Envelope::default(),
            &RequestOptions::default(),
        );

        assert!(matches!(result, Err(ClientError::Unauthorized)));
        assert_eq!(store.get(KEY_JWT_TOKEN), None);
        assert_eq!(store.get(KEY_USER), None);
        assert_eq!(notifier.taken().len(), 1);
    }

    #[test]
    fn skip_auth_check_keeps_credentials() {
        let (transport, store, _notifier) = transport();
        store.set(KEY_JWT_TOKEN, "tok");

        let env = envelope_with_code(info_code::FAILED_TO_LOGIN, "bad credentials");
        let disposition = classify(401, true, &env);
        let result = transport.settle(disposition, &env, &RequestOptions::default());

        assert!(matches!(result, Err(ClientError::Business { .. })));
        assert_eq!(store.get(KEY_JWT_TOKEN).as_deref(), Some("tok"));
    }

    #[test]
    fn business_toast_is_suppressible() {
        let (transport, _store, notifier) = transport();
        let env = envelope_with_code(info_code::FAILED_TO_CREATE, "duplicate");

        let opts = RequestOptions {
            notify_error: false,
            ..RequestOptions::default()
        };
        let result = transport.settle(classify(200, false, &env), &env, &opts);
        assert!(matches!(result, Err(ClientError::Business { .. })));
        assert!(notifier.taken().is_empty());
    }

    #[test]
    fn success_toast_only_when_requested() {
        let (transport, _store, notifier) = transport();
        let env = envelope_with_code(info_code::SUCCESSFUL_UPDATE, "updated");

        transport
            .settle(Disposition::Success, &env, &RequestOptions::default())
            .unwrap();
        assert!(notifier.taken().is_empty());

        transport
            .settle(
                Disposition::Success,
                &env,
                &RequestOptions::with_success_toast(),
            )
            .unwrap();
        let notices = notifier.taken();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].1, "updated");
    }

    #[test]
    fn url_joins_base_and_path() {
        let (transport, _, _) = transport();
        assert_eq!(
            transport.url("/api/accounts/list"),
            "http://localhost:8080/api/accounts/list"
        );
    }
}
