//! The table engine.
//!
//! Turns one page of records into a render-ready [`TableView`]: formatted
//! cells, secret masking, pagination window, and selection bookkeeping.
//! Rendering itself belongs to the UI layer.

mod formatters;
mod pager;
mod selection;
mod view;

pub use formatters::{PLACEHOLDER, SECRET_MASK};
pub use pager::Pager;
pub use selection::{all_checked, apply, SelectionEvent};
pub use view::{Cell, TableRow, TableView};
