//! User/session API (`/api/sys/users/...`).

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::{ClientError, Result};
use crate::session::{SessionStore, KEY_JWT_TOKEN, KEY_USER};
use crate::transport::{RequestOptions, Transport};
use crate::types::Record;

const BASE: &str = "/api/sys/users";

pub struct UserApi {
    transport: Arc<Transport>,
    store: Arc<dyn SessionStore>,
}

impl UserApi {
    #[must_use]
    pub fn new(transport: Arc<Transport>, store: Arc<dyn SessionStore>) -> Self {
        Self { transport, store }
    }

    /// Authenticate and persist the issued credential.
    ///
    /// Runs with `skip_auth_check`: a 401 here means bad credentials and
    /// must surface as a plain business failure, never as a global logout.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let opts = RequestOptions {
            skip_auth_check: true,
            ..RequestOptions::default()
        };
        let envelope = self
            .transport
            .post(
                &format!("{BASE}/login"),
                &json!({ "username": username, "password": password }),
                &opts,
            )
            .await?;

        let token = envelope
            .data
            .as_ref()
            .and_then(|d| d.get("jwt_token"))
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::Parse {
                detail: "login response missing jwt_token".to_string(),
            })?;

        self.store.set(KEY_JWT_TOKEN, token);
        self.store
            .set(KEY_USER, &json!({ "username": username }).to_string());
        Ok(())
    }

    /// End the session. The backend call is best-effort; local credentials
    /// are cleared regardless.
    pub async fn logout(&self) {
        if let Err(e) = self
            .transport
            .post(&format!("{BASE}/logout"), &json!({}), &RequestOptions::default())
            .await
        {
            log::debug!("logout call failed (clearing session anyway): {e}");
        }
        self.store.remove(KEY_JWT_TOKEN);
        self.store.remove(KEY_USER);
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Record>> {
        self.find(&[
            ("type", "username".to_string()),
            ("username", username.to_string()),
        ])
        .await
    }

    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<Record>> {
        self.find(&[
            ("type", "user_id".to_string()),
            ("user_id", user_id.to_string()),
        ])
        .await
    }

    async fn find(&self, query: &[(&str, String)]) -> Result<Option<Record>> {
        let envelope = self
            .transport
            .get(&format!("{BASE}/find"), query, &RequestOptions::default())
            .await?;
        Ok(envelope.data.and_then(|d| d.as_object().cloned()))
    }

    /// Update the current user's profile fields.
    pub async fn update(&self, user_id: i64, changes: &Record) -> Result<()> {
        let mut body = changes.clone();
        body.insert("user_id".to_string(), json!(user_id));
        self.transport
            .put(
                &format!("{BASE}/update"),
                &Value::Object(body),
                &RequestOptions::with_success_toast(),
            )
            .await?;
        Ok(())
    }

    /// Deserialized current-user object from the session store.
    #[must_use]
    pub fn current_user(&self) -> Option<Record> {
        let raw = self.store.get(KEY_USER)?;
        serde_json::from_str(&raw).ok()
    }
}
