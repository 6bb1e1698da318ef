//! # Trolley Architecture
//!
//! Trolley is a **UI-agnostic storefront library** with a terminal client on
//! top. The product catalog lives behind a remote HTTP API; the basket is a
//! purely in-process state container that lives exactly as long as one
//! interactive session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, cli/, wired by main.rs)                │
//! │  - Parses the session line, renders output, runs the REPL   │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the BasketStore          │
//! │  - Generic over the catalog backend                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns CmdResult                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                        │
//!                   ▼                        ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Basket core             │  │  Catalog (catalog/)          │
//! │  - basket.rs: the store, │  │  - ProductSource trait       │
//! │    actions, pub/sub      │  │  - HttpCatalog (production)  │
//! │  - quantity.rs: pure     │  │  - FixedCatalog (tests,      │
//! │    ±1 reducer            │  │    offline demo)             │
//! └──────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Key principle: the store is the single source of truth
//!
//! [`basket::BasketStore`] exclusively owns the entry list. Consumers read
//! borrowed projections (entries, distinct count, quantity by id, formatted
//! total) or register a listener; mutation happens only through the five
//! actions (add, remove, increase, decrease, reset). Listeners are invoked
//! synchronously after each committed mutation with the fully-updated state,
//! so no observer ever sees a half-applied change.
//!
//! ## Module overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic per operation
//! - [`basket`]: the basket state container
//! - [`quantity`]: the pure quantity update policy
//! - [`catalog`]: catalog trait and backends
//! - [`model`]: core data types (`Product`, `BasketEntry`)
//! - [`config`]: configuration management
//! - [`error`]: error types
//! - `args`/`cli`: parsing, rendering, and the interactive session (binary
//!   concerns, not part of the lib API proper)

pub mod api;
pub mod args;
pub mod basket;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod quantity;
