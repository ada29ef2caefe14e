//! A small REST service that greets people.

pub mod app;
pub mod core;
pub mod feature;
pub mod infra;
