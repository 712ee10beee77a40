//! Campus Paths CLI library.
//!
//! Command handlers and output formatting live here so they can be driven
//! from integration tests as well as from the binary.

pub mod commands;
pub mod output;
