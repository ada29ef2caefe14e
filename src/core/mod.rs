//! Business logic, independent of the web layer.

pub mod greeting;
