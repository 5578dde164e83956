//! Screen-level pages.

pub mod login;
pub mod records;
