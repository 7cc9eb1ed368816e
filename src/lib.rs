//! Catalog DJ transitions and find the longest playable mix chain.
//!
//! Core modules:
//! - [`store`] - The authoritative transition catalog
//! - [`graph`] - Derived adjacency view of the catalog
//! - [`chain`] - Longest simple-chain search
//! - [`db`] - SQLite persistence
//!
//! ### Supporting Modules
//!
//! - [`config`] - Data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation for enhanced UX
//! - [`meta`] - "Artist - Title" key parsing and duration estimates
//! - [`render`] - Plain-text output formatting
//!
//! ## Quick Start Example
//!
//! ```
//! use segue::chain;
//! use segue::store::TransitionStore;
//!
//! // Catalog a few transitions
//! let mut store = TransitionStore::new();
//! store.add_transition("Daft Punk - One More Time", "Modjo - Lady", None)?;
//! store.add_transition("Modjo - Lady", "Stardust - Music Sounds Better", None)?;
//! store.add_transition("Daft Punk - One More Time", "Stardust - Music Sounds Better", None)?;
//!
//! // The longest chain prefers the route through Modjo - Lady
//! let graph = store.graph();
//! let best = chain::find_longest_chain(&graph, "Daft Punk - One More Time");
//! assert_eq!(best.len(), 3);
//!
//! # Ok::<(), segue::store::ValidationError>(())
//! ```
//!
//! ## Chain Search
//!
//! [`chain::find_longest_chain`] runs a depth-first search that follows
//! transitions in insertion order and keeps the strictly longest
//! continuation per song. Edges back into the active path are pruned, so
//! the search terminates on any graph; the price is that on cyclic
//! catalogs the result is a long chain rather than a provably optimal
//! one. Finding the true longest simple path in a general graph is
//! NP-hard and deliberately out of scope.
//!
//! ## Error Handling
//!
//! The store reports rejected input as [`store::ValidationError`] values
//! for callers to display; deleting an unknown id is a `false` return,
//! not an error. Binary-side failures (database, filesystem) use
//! `anyhow::Result` with context.
//!
//! ## Testing
//!
//! Run tests with:
//! ```bash
//! cargo test
//! cargo bench  # chain search benchmarks
//! ```

pub mod chain;
pub mod cli;
pub mod completion;
pub mod config;
pub mod db;
pub mod graph;
pub mod meta;
pub mod render;
pub mod store;
pub mod transition;
