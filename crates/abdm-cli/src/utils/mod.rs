//! Terminal helpers shared by handlers.

pub mod input;
