//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic contact book library**; the interactive
//! shell in `main.rs` is just one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (main.rs + args.rs)                                  │
//! │  - Prompts, menu dispatch, index translation, rendering     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the book and the store   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract BookStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal.
//!
//! ## The Index System
//!
//! Listings number contacts 1-based relative to the listing they came
//! from (a search shows its own 1..N). Those numbers are transient:
//! they are recomputed per listing and go stale on the next mutation.
//! See `index.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`book`]: The ordered contact collection, search, field access
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `Field`)
//! - [`index`]: Transient display indexing
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
