//! # CLI Layer
//!
//! This module is **one possible UI client** for stockroom, not the application
//! itself. It is the only place that:
//! - Parses arguments (clap)
//! - Turns user text into typed values (blank names, non-numeric stock)
//! - Writes to stdout/stderr and installs the log subscriber
//!
//! Business rules live in the library's command layer.

mod commands;
mod print;
mod setup;

pub use commands::run;
