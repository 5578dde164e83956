//! opsvault backend client
//!
//! Thin REST client for the opsvault admin backend:
//! - [`Transport`] — single network entry point with bearer auth, response
//!   normalization, and the three-way failure contract (auth expiry,
//!   business rejection, system fault)
//! - [`ResourceClient`] — CRUD + CSV operations parameterized by resource
//!   kind (accounts, hosts, secrets, sites)
//! - [`UserApi`] / [`IconApi`] — session and icon collaborator surfaces
//!
//! Storage and notification are trait seams ([`SessionStore`],
//! [`Notifier`]) so the crate stays platform-independent.

pub mod csv;
pub mod envelope;
pub mod error;
pub mod icons;
pub mod notify;
pub mod resource;
pub mod session;
pub mod transport;
pub mod types;
pub mod users;

pub use csv::CsvTransfer;
pub use envelope::{info_code, is_error_code, is_success_code, Envelope};
pub use error::{ClientError, Result};
pub use icons::{IconApi, IconKind};
pub use notify::{NoopNotifier, NoticeLevel, Notifier, RecordingNotifier};
pub use resource::{singular, ResourceApi, ResourceClient};
pub use session::{
    MemorySessionStore, SessionStore, KEY_CURRENT_PAGE, KEY_JWT_TOKEN, KEY_LANGUAGE, KEY_THEME,
    KEY_USER,
};
pub use transport::{RequestOptions, Transport};
pub use types::{record_id, CsvExport, ImportSummary, ListPage, Record};
pub use users::UserApi;
