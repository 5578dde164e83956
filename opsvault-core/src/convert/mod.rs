//! Value conversions shared by the form and table engines.

pub mod capacity;
pub mod datetime;
pub mod ports;
