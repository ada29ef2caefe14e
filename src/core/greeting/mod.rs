//! Greetings and the counter that numbers them.

pub mod greeting_record;
pub mod greeting_service;
