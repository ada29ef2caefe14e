//! The HTTP features of the application, one module per API.

pub mod greeting;
