//! # Notebook Architecture
//!
//! Notebook keeps short personal notes in a single JSON file. The crate is a
//! small library with a thin CLI client on top: everything the binary does
//! goes through [`manager::NoteManager`], and nothing below the CLI prints or
//! exits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, colors output, owns the exit code      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Manager (manager.rs)                                       │
//! │  - Owns the in-memory collection, loaded once               │
//! │  - Rewrites the whole store after each mutation             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure functions over the collection, return CmdResult     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait, FileStore and InMemoryStore             │
//! │  - Id allocation (next_id)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes vs errors
//!
//! A delete or status change on an unknown id is not an error: the command
//! returns a [`CmdResult`](commands::CmdResult) whose `found()` is false.
//! Errors ([`error::NotebookError`]) are reserved for bad input, unreadable
//! or corrupt storage, and failed writes.
//!
//! ## Module Overview
//!
//! - [`manager`]: entry point for all operations
//! - [`commands`]: add, list, search, delete, status
//! - [`store`]: storage trait, file and in-memory stores, id allocation
//! - [`model`]: `Note`, `Status`, `Priority` and the persisted `NoteRecord`
//! - [`config`]: user configuration (`config.json`)
//! - [`init`]: resolves config and notes file and builds a ready manager
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod manager;
pub mod model;
pub mod store;
