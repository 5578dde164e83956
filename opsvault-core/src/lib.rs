//! opsvault engine layer
//!
//! Everything between the REST client and the terminal UI:
//! - [`schema`] — static page schemas for the four admin pages
//! - [`form`] — schema-driven edit state, validation, and collection
//! - [`table`] — render-ready table views with formatting, pagination,
//!   and selection
//! - [`sync`] — the per-session controller coordinating loads, saves,
//!   deletes, and CSV transfer
//! - [`convert`] — capacity, port-map, and timestamp conversions shared
//!   by the engines
//!
//! No module here draws anything; the UI layer renders the returned view
//! models.

pub mod convert;
pub mod error;
pub mod form;
pub mod schema;
pub mod sync;
pub mod table;

#[cfg(test)]
mod test_utils;

pub use error::{CoreError, CoreResult};
pub use form::{generate_password, FieldState, FieldValue, FormState};
pub use schema::{schema, Column, ColumnFormat, FieldDef, FieldItem, FieldType, PageKind, PageSchema};
pub use sync::{LoadOutcome, PendingDelete, SaveOutcome, SaveResult, SessionController, PAGE_SIZE};
pub use table::{Cell, Pager, SelectionEvent, TableRow, TableView, PLACEHOLDER, SECRET_MASK};
