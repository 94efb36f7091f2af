//! # Todz Architecture
//!
//! Todz is a **UI-agnostic to-do list library**. The binary is a thin CLI
//! client over it; the same core could back a TUI or a web UI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - State holder: collection + filter + storage backend      │
//! │  - Dispatches intents, persists the collection after each   │
//! │  - Returns structured Result types, never terminal strings  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transform Layer (items.rs, filter.rs)                      │
//! │  - Pure collection transforms, total functions              │
//! │  - Missing keys degrade to no-ops, never errors             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KvStore trait, one JSON blob per key            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Control flow
//!
//! The CLI raises an intent, the API applies a pure transform to produce
//! the next collection, persists it in full, and the CLI re-renders from a
//! fresh [`api::ViewState`]. Loading happens exactly once, at startup;
//! absent or malformed data starts the collection empty rather than
//! failing.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`items`]: Pure transforms over the item collection
//! - [`filter`]: The filter engine (all/active/completed views)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The core [`model::Item`] type
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod items;
pub mod model;
pub mod store;
