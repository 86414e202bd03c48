//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory library**: a small product catalog (item name
//! to stock count) persisted to a local JSON file, with CSV import and export. The
//! `stockroom` binary is one client of it; a desktop or web front end would call the
//! same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates user text, prints results    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, update, delete, search, list, import, export        │
//! │  - Outcomes and status messages, never terminal output      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore: in-memory catalog + full-file persistence  │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! "Already exists", "not found" and "no matches" are ordinary outcomes carried in
//! [`commands::CmdResult`]. Malformed CSV rows are skipped and listed in the import
//! report. Errors ([`error::StockroomError`]) are for I/O, a corrupt catalog file on
//! load, undecodable CSV, stock text that is not a whole number, and stock arithmetic
//! that leaves the `i64` range. A failed operation leaves the catalog as it was.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Catalog store and storage backends
//! - [`model`]: `Catalog`, `Record`, `Item`, `ImportMode`, stock parsing
//! - [`table`]: CSV reading and writing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod table;
