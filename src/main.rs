//! # Segue - DJ Transition Catalog
//!
//! Segue catalogs directed "song A mixes into song B" transitions and finds
//! the longest playable chain through them. All data lives in a local
//! SQLite database; there is no server and no network.
//!
//! ## Architecture
//!
//! - `cli`: Command-line interface definitions
//! - `store`: The authoritative transition catalog (core)
//! - `graph` / `chain`: Derived adjacency view and chain search (core)
//! - `db`: SQLite persistence
//! - `render`: Plain-text output formatting
//! - `config`: Data directory management
//!
//! ## Usage
//!
//! ```bash
//! # Catalog a transition
//! segue add "Daft Punk - One More Time" "Modjo - Lady" --notes "filter sweep"
//!
//! # Longest chain from a starting song
//! segue chain "Daft Punk - One More Time"
//!
//! # Longest chain over all starting songs
//! segue best
//! ```

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::info;
use rusqlite::Connection;

use segue::store::TransitionStore;
use segue::{chain, cli, completion, config, db, render};

/// Open the on-disk catalog and rebuild the in-memory store from it.
fn open_catalog() -> Result<(TransitionStore, Connection)> {
    let db_path = config::get_db_path()?;
    let conn = db::connect(&db_path)?;
    db::init(&conn)?;
    let store = TransitionStore::from_transitions(db::load_transitions(&conn)?);
    Ok((store, conn))
}

/// Main entry point for the Segue application.
///
/// Initializes logging, parses command-line arguments, and routes commands
/// to the appropriate module functions.
///
/// # Logging
///
/// Controlled via `RUST_LOG`:
/// - `RUST_LOG=debug segue command` - Enable debug logging
/// - `RUST_LOG=segue::chain=trace segue chain "..."` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    match args.command {
        cli::Command::Add { from, to, notes } => {
            let (mut store, conn) = open_catalog()?;
            let transition = store.add_transition(&from, &to, notes.as_deref())?;
            db::insert_transition(&conn, transition)?;
            println!("Added [{}] {}", transition.id, transition.edge_label());
        }
        cli::Command::Rm { id } => {
            let (mut store, conn) = open_catalog()?;
            if store.delete_transition(id) {
                db::delete_transition(&conn, id)?;
                println!("Deleted transition {id}.");
            } else {
                println!("No transition with id {id}.");
            }
        }
        cli::Command::List => {
            let (store, _conn) = open_catalog()?;
            print!("{}", render::transition_list(store.transitions()));
        }
        cli::Command::Songs => {
            let (store, _conn) = open_catalog()?;
            print!("{}", render::song_list(&store.songs()));
        }
        cli::Command::Chain { song } => {
            let (store, _conn) = open_catalog()?;
            let song = song.trim();
            if !store.contains_song(song) {
                return Err(anyhow::anyhow!(
                    "`{song}` is not in the catalog. Use `segue songs` to see what is."
                ));
            }

            info!("Searching for the longest chain from: {song}");
            let graph = store.graph();
            let found = chain::find_longest_chain(&graph, song);
            if found.len() == 1 {
                println!("`{song}` has no outgoing transitions.");
            } else {
                print!("{}", render::chain(&found));
            }
        }
        cli::Command::Best => {
            let (store, _conn) = open_catalog()?;
            if store.is_empty() {
                println!("No transitions catalogued yet.");
            } else {
                info!("Scanning all {} songs for the longest chain.", store.song_count());
                let graph = store.graph();
                let found = chain::find_longest_chain_overall(&graph);
                print!("{}", render::chain(&found));
            }
        }
        cli::Command::Graph => {
            let (store, _conn) = open_catalog()?;
            print!("{}", render::graph(&store.graph()));
        }
        cli::Command::Clear { force } => {
            let (mut store, conn) = open_catalog()?;
            if store.is_empty() {
                println!("Catalog is already empty.");
                return Ok(());
            }
            if !force {
                print!(
                    "Delete all {} transition(s)? This cannot be undone. [y/N] ",
                    store.len()
                );
                io::stdout().flush()?;
                let mut answer = String::new();
                io::stdin().read_line(&mut answer)?;
                if !answer.trim().eq_ignore_ascii_case("y") {
                    println!("Aborted.");
                    return Ok(());
                }
            }
            store.clear();
            db::clear(&conn)?;
            println!("Catalog cleared.");
        }
        cli::Command::Export { path } => {
            let (store, _conn) = open_catalog()?;
            let path = match path {
                Some(path) => path,
                None => config::default_snapshot_path()?,
            };
            let json = serde_json::to_string_pretty(&store.snapshot())
                .context("Failed to serialize the catalog snapshot")?;
            fs::write(&path, json)
                .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
            println!(
                "Exported {} transition(s) to {}",
                store.len(),
                path.display()
            );
        }
        cli::Command::Import { path } => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read snapshot from {}", path.display()))?;
            let snapshot = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a valid segue snapshot", path.display()))?;
            let store = TransitionStore::from_snapshot(snapshot);

            let db_path = config::get_db_path()?;
            let mut conn = db::connect(&db_path)?;
            db::init(&conn)?;
            db::replace_all(&mut conn, store.transitions())?;
            println!(
                "Imported {} transition(s) covering {} song(s).",
                store.len(),
                store.song_count()
            );
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
        cli::Command::CompletionEnhanced { shell } => match shell {
            cli::Shell::Bash => completion::generate_enhanced_bash_completion(),
            cli::Shell::Fish => completion::generate_enhanced_fish_completion(),
            _ => {
                return Err(anyhow::anyhow!(
                    "Enhanced completions only supported for bash and fish"
                ))
            }
        },
        cli::Command::CompleteSongs => {
            // Used by shell completion scripts to get available songs
            completion::print_song_completions()?;
        }
        cli::Command::CompleteSongsFish => {
            completion::print_song_completions_for_shell(Some("fish"))?;
        }
    }

    Ok(())
}
