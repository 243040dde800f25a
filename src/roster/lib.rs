//! # Roster Architecture
//!
//! Roster is an interactive, in-memory employee record manager. It is a
//! library with a thin terminal client, and the layering matters more than
//! the size:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Renders the menu, reads lines, runs the retry loops      │
//! │  - The ONLY place that touches stdin/stdout/exit codes      │
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
//! │  - Pure business logic, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store/)                                      │
//! │  - Owned in-memory keyed container, id allocation           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing persists: the store lives for one session and is dropped on exit.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, store), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Input validation ([`input`]) is pure text-in/result-out, so every
//! diagnostic the operator can trigger is testable without a terminal. The
//! controller reads through the [`cli::reader::LineReader`] trait, so whole
//! menu sessions run against a scripted in-memory feed in tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`store`]: The in-memory record store
//! - [`model`]: Core data types (`Employee`, `EmployeeFields`)
//! - [`input`]: Pure parsing and validation of operator input
//! - [`error`]: Error types
//! - [`cli`]: Menu loop, prompts, and printing for the binary

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod model;
pub mod store;
