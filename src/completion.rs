//! # Shell Completion Module
//!
//! Completion support for Segue:
//! - Standard completion scripts via clap_complete
//! - Enhanced bash/fish scripts that complete song names for `chain`
//!   straight from the catalog
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! segue completion bash > ~/.local/share/bash-completion/completions/segue
//!
//! # Enhanced fish completions with dynamic song names
//! segue completion-enhanced fish > ~/.config/fish/completions/segue.fish
//! ```

use crate::config;
use crate::db;
use crate::store::TransitionStore;
use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Convert our Shell enum to clap_complete's Shell enum
pub fn shell_to_completion_shell(shell: &crate::cli::Shell) -> CompletionShell {
    match shell {
        crate::cli::Shell::Bash => CompletionShell::Bash,
        crate::cli::Shell::Zsh => CompletionShell::Zsh,
        crate::cli::Shell::Fish => CompletionShell::Fish,
        crate::cli::Shell::PowerShell => CompletionShell::PowerShell,
        crate::cli::Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Generate enhanced fish completion script with song name completion
pub fn generate_enhanced_fish_completion() {
    println!(
        r#"# Enhanced Segue completion script for Fish shell with song name completion
# Install with: segue completion-enhanced fish > ~/.config/fish/completions/segue.fish

# Function to get song completions
function __segue_complete_songs
    if command -sq segue
        segue complete-songs-fish 2>/dev/null
    end
end

# Clear existing completions to avoid conflicts
complete -c segue -e

# Global options
complete -c segue -s h -l help -d 'Print help information'
complete -c segue -s V -l version -d 'Print version information'

# Main commands
complete -c segue -f -n '__fish_is_first_token' -a 'add' -d 'Catalog a new song-to-song transition'
complete -c segue -f -n '__fish_is_first_token' -a 'rm' -d 'Delete a transition by id'
complete -c segue -f -n '__fish_is_first_token' -a 'list' -d 'List all catalogued transitions'
complete -c segue -f -n '__fish_is_first_token' -a 'songs' -d 'List all songs in the catalog'
complete -c segue -f -n '__fish_is_first_token' -a 'chain' -d 'Find the longest mix chain from a song'
complete -c segue -f -n '__fish_is_first_token' -a 'best' -d 'Find the longest mix chain overall'
complete -c segue -f -n '__fish_is_first_token' -a 'graph' -d 'Print the transition graph'
complete -c segue -f -n '__fish_is_first_token' -a 'clear' -d 'Delete the entire catalog'
complete -c segue -f -n '__fish_is_first_token' -a 'export' -d 'Export the catalog as a JSON snapshot'
complete -c segue -f -n '__fish_is_first_token' -a 'import' -d 'Import a JSON snapshot'
complete -c segue -f -n '__fish_is_first_token' -a 'completion' -d 'Generate shell completions'
complete -c segue -f -n '__fish_is_first_token' -a 'completion-enhanced' -d 'Generate enhanced shell completions'
complete -c segue -f -n '__fish_is_first_token' -a 'help' -d 'Print help for commands'

# add command - complete both endpoints with song names
complete -c segue -n '__fish_seen_subcommand_from add' -a '(__segue_complete_songs)' -d 'Song name'
complete -c segue -f -n '__fish_seen_subcommand_from add' -s n -l notes -d 'Free-text mixing notes' -r

# chain command - complete with song names
complete -c segue -n '__fish_seen_subcommand_from chain' -a '(__segue_complete_songs)' -d 'Starting song'

# clear command
complete -c segue -f -n '__fish_seen_subcommand_from clear' -l force -d 'Skip the confirmation prompt'

# completion commands - complete with shell types
complete -c segue -f -n '__fish_seen_subcommand_from completion' -a 'bash zsh fish power-shell elvish' -d 'Shell'
complete -c segue -f -n '__fish_seen_subcommand_from completion-enhanced' -a 'bash fish' -d 'Shell'
"#
    );
}

/// Generate enhanced bash completion script with song name completion
pub fn generate_enhanced_bash_completion() {
    println!(
        r#"#!/bin/bash
# Enhanced Segue completion script with song name completion
# Install with: segue completion-enhanced bash > ~/.local/share/bash-completion/completions/segue

_segue_complete_songs() {{
    local songs
    if command -v segue >/dev/null 2>&1; then
        mapfile -t songs < <(segue complete-songs 2>/dev/null)
        printf '%s\n' "${{songs[@]}}"
    fi
}}

_segue() {{
    local cur prev words cword
    _init_completion || return

    case "${{prev}}" in
        chain|add)
            mapfile -t COMPREPLY < <(_segue_complete_songs | grep -i "^${{cur}}")
            return 0
            ;;
        completion)
            COMPREPLY=($(compgen -W "bash zsh fish power-shell elvish" -- "${{cur}}"))
            return 0
            ;;
        completion-enhanced)
            COMPREPLY=($(compgen -W "bash fish" -- "${{cur}}"))
            return 0
            ;;
        export|import)
            _filedir
            return 0
            ;;
    esac

    local subcommands="add rm list songs chain best graph clear export import completion completion-enhanced help"

    if [[ $cword -eq 1 ]]; then
        COMPREPLY=($(compgen -W "$subcommands --help --version" -- "${{cur}}"))
    else
        case "${{words[1]}}" in
            add)
                COMPREPLY=($(compgen -W "--notes -n --help" -- "${{cur}}"))
                ;;
            clear)
                COMPREPLY=($(compgen -W "--force --help" -- "${{cur}}"))
                ;;
            *)
                COMPREPLY=($(compgen -W "$subcommands" -- "${{cur}}"))
                ;;
        esac
    fi
}} &&
complete -F _segue segue

# ex: filetype=sh
"#
    );
}

/// Get available song names for completion.
///
/// Loads the catalog from the default database; any failure (no database
/// yet, unreadable file) degrades to an empty list so completion never
/// breaks the shell.
pub fn get_song_completions() -> Result<Vec<String>> {
    let db_path = match config::get_db_path() {
        Ok(path) => path,
        Err(_) => return Ok(Vec::new()),
    };

    if !db_path.exists() {
        return Ok(Vec::new());
    }

    let conn = match db::connect(&db_path) {
        Ok(conn) => conn,
        Err(_) => return Ok(Vec::new()),
    };
    match db::load_transitions(&conn) {
        Ok(transitions) => Ok(TransitionStore::from_transitions(transitions).songs()),
        Err(_) => Ok(Vec::new()),
    }
}

/// Print available completions for song names
/// This is used by shell completion systems to get dynamic completions
pub fn print_song_completions() -> Result<()> {
    print_song_completions_for_shell(None)
}

/// Print available completions for song names, formatted for a specific shell
pub fn print_song_completions_for_shell(shell: Option<&str>) -> Result<()> {
    let completions = get_song_completions()?;

    for completion in completions {
        match shell {
            Some("fish") => {
                // Fish handles escaping automatically, don't add quotes
                println!("{completion}");
            }
            _ => {
                // For bash, zsh, and other shells, quote names with whitespace
                if completion.contains(' ') || completion.contains('\t') || completion.contains('\n') {
                    println!("\"{}\"", completion.replace('"', "\\\""));
                } else {
                    println!("{completion}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_conversion() {
        assert_eq!(
            shell_to_completion_shell(&crate::cli::Shell::Bash),
            CompletionShell::Bash
        );
        assert_eq!(
            shell_to_completion_shell(&crate::cli::Shell::Zsh),
            CompletionShell::Zsh
        );
    }

    #[test]
    fn test_get_song_completions_never_fails() {
        // Must not panic or error even with no database present.
        let result = get_song_completions();
        assert!(result.is_ok());
    }
}
