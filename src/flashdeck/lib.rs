//! # Flashdeck Architecture
//!
//! Flashdeck turns markdown documents into decks of flashcards: every heading
//! starts a card, and everything up to the next heading is that card's body.
//! Documents are kept in a local collection that can be browsed card by card,
//! searched across all cards, edited and exported.
//!
//! Like any well-behaved tool it is a library first; the CLI is one client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AppState, loads it once, persists on mutation   │
//! │  - Normalizes inputs (arguments → selectors)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over AppState                             │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (parser.rs, search.rs, state.rs, store/)              │
//! │  - Pure parsing and search                                  │
//! │  - KeyValueStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cards
//!
//! A line whose first character is `#` is a heading; the number of leading
//! `#` is the card level and the rest, trimmed, is the title. Text before the
//! first heading is not part of any card. Parsing never fails.
//!
//! ## Indexes
//!
//! Documents are addressed on the command line by display index (`1`, `p1`,
//! ranges like `2-4`) or by a name fragment. See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`parser`]: Markdown to cards, and back
//! - [`search`]: Cross-document search and highlight segmentation
//! - [`state`]: The mutable session state and card navigation
//! - [`store`]: Key-value persistence
//! - [`model`]: `Card` and `Document`
//! - [`index`]: Display indexes and selectors
//! - [`render`]: Markdown rendering for the terminal
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`init`]: Data directory and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod parser;
pub mod render;
pub mod search;
pub mod state;
pub mod store;
