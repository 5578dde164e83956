//! Static page schemas.
//!
//! Every admin page is described by a [`PageSchema`]: the resource it talks
//! to, the fields its edit form renders, and the columns its table shows.
//! Schemas are authoring-time constants; there is no runtime plugin surface.

mod column;
mod field;
mod registry;

pub use column::{Column, ColumnFormat};
pub use field::{CapacityKind, FieldDef, FieldItem, FieldType};
pub use registry::{schema, PageKind, PageSchema};
