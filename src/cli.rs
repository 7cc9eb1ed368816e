//! # Command-Line Interface Module
//!
//! Defines the command-line surface of Segue using Clap derive macros.
//! Each subcommand maps to one user action on the transition catalog.
//!
//! ## Commands
//!
//! - `add`: Catalog a new song-to-song transition
//! - `rm`: Delete a transition by id
//! - `list`: Show all catalogued transitions
//! - `songs`: Show all songs referenced by the catalog
//! - `chain`: Find the longest mix chain from a starting song
//! - `best`: Find the longest mix chain over every starting song
//! - `graph`: Print the transition graph as an adjacency list
//! - `export` / `import`: JSON snapshots of the whole catalog
//!
//! ## Examples
//!
//! ```bash
//! segue add "Daft Punk - One More Time" "Modjo - Lady" --notes "filter sweep"
//! segue chain "Daft Punk - One More Time"
//! segue best
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
///
/// Uses Clap derive macros to generate argument parsing, help text, and
/// validation. All functionality is reached through subcommands.
#[derive(Parser)]
#[command(name = "segue")]
#[command(about = "Segue: DJ transition catalog & longest mix-chain finder")]
#[command(version)]
pub struct Args {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Catalog a new transition between two songs
    ///
    /// Records that FROM mixes into TO. Song names are free-form keys;
    /// "Artist - Title" is the recommended convention. A song cannot
    /// transition into itself, and each (from, to) pair can only be
    /// catalogued once.
    Add {
        /// Song the mix starts from
        #[arg(value_hint = clap::ValueHint::Other)]
        from: String,

        /// Song the mix lands on
        #[arg(value_hint = clap::ValueHint::Other)]
        to: String,

        /// Free-text mixing notes (key match, EQ moves, cue points, ...)
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a transition by its id
    ///
    /// Ids are shown by `segue list`. Deleting the last transition that
    /// references a song also drops the song from the catalog.
    Rm {
        /// Id of the transition to delete
        id: u32,
    },

    /// List all catalogued transitions
    ///
    /// Shows every transition with its id, endpoints and notes, in the
    /// order they were added.
    List,

    /// List all songs in the catalog
    ///
    /// A song appears here as long as at least one transition references
    /// it. Output is sorted alphabetically.
    Songs,

    /// Find the longest mix chain starting from a song
    ///
    /// Follows catalogued transitions from SONG, never repeating a song,
    /// and prints the longest chain found together with a rough playing
    /// time estimate. Cycles in the catalog are handled by truncating,
    /// so the result is a long chain, not necessarily the optimal one.
    Chain {
        /// Song to start the chain from
        #[arg(value_hint = clap::ValueHint::Other)]
        song: String,
    },

    /// Find the longest mix chain over every starting song
    ///
    /// Runs the chain search from each catalogued song (in parallel) and
    /// prints the overall winner. Ties go to the alphabetically first
    /// starting song.
    Best,

    /// Print the transition graph as an adjacency list
    ///
    /// One line per song listing its direct successors — a quick text
    /// view of how the catalog hangs together.
    Graph,

    /// Delete the entire catalog
    ///
    /// Removes every transition and song. Asks for confirmation unless
    /// --force is given.
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Export the catalog as a JSON snapshot
    ///
    /// Writes `{"transitions": [...], "songs": [...]}` to PATH, or to the
    /// default snapshot location in the segue data directory when PATH is
    /// omitted.
    Export {
        /// Destination file (default: transitions.json in the data dir)
        path: Option<PathBuf>,
    },

    /// Import a JSON snapshot, replacing the current catalog
    ///
    /// Reads a snapshot produced by `segue export`. Missing fields load
    /// as empty; entries that violate catalog rules are skipped with a
    /// warning.
    Import {
        /// Snapshot file to read
        path: PathBuf,
    },

    /// Generate shell completions
    ///
    /// Usage: segue completion bash > ~/.local/share/bash-completion/completions/segue
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Generate enhanced completion with song name completion
    ///
    /// The enhanced scripts complete song names for `chain` from the live
    /// catalog. Currently bash and fish are supported.
    ///
    /// Usage: segue completion-enhanced fish > ~/.config/fish/completions/segue.fish
    CompletionEnhanced {
        /// Shell to generate enhanced completions for
        shell: Shell,
    },

    /// List available songs for completion (hidden command)
    #[command(hide = true)]
    CompleteSongs,

    /// List available songs for fish shell completion (hidden command)
    #[command(hide = true)]
    CompleteSongsFish,
}
