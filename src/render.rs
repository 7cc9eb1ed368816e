//! Plain-text rendering for the CLI.
//!
//! These functions format store and search output for a terminal; they
//! never touch or mutate the catalog. Rendering returns strings so it can
//! be unit-tested without capturing stdout.

use crate::graph::SongGraph;
use crate::meta;
use crate::transition::Transition;

/// Numbered transition list with notes, one block per transition.
#[must_use]
pub fn transition_list(transitions: &[Transition]) -> String {
    if transitions.is_empty() {
        return "No transitions catalogued yet.\n".to_string();
    }

    let mut out = String::new();
    for t in transitions {
        out.push_str(&format!("[{}] {} -> {}\n", t.id, t.from, t.to));
        if let Some(notes) = &t.notes {
            out.push_str(&format!("      {notes}\n"));
        }
    }
    out.push_str(&format!("{} transition(s)\n", transitions.len()));
    out
}

/// A found chain, one numbered song per line, with length and a rough
/// playing-time estimate at the end.
#[must_use]
pub fn chain(songs: &[String]) -> String {
    if songs.is_empty() {
        return "No chain found.\n".to_string();
    }

    let mut out = String::new();
    for (i, song) in songs.iter().enumerate() {
        if i + 1 < songs.len() {
            out.push_str(&format!("{:3}. {song}\n     |\n     v\n", i + 1));
        } else {
            out.push_str(&format!("{:3}. {song}\n", i + 1));
        }
    }
    out.push_str(&format!(
        "{} song(s), ~{}\n",
        songs.len(),
        meta::estimate_chain_duration(songs.len())
    ));
    out
}

/// Adjacency view of the whole graph, one song per line.
#[must_use]
pub fn graph(graph: &SongGraph) -> String {
    if graph.is_empty() {
        return "No transitions to display.\n".to_string();
    }

    let mut out = String::new();
    for song in graph.songs() {
        let successors = graph.successors(song);
        if successors.is_empty() {
            out.push_str(&format!("{song}  (no outgoing transitions)\n"));
        } else {
            out.push_str(&format!("{song} -> {}\n", successors.join(", ")));
        }
    }
    out.push_str(&format!(
        "{} song(s), {} transition(s)\n",
        graph.song_count(),
        graph.edge_count()
    ));
    out
}

/// Sorted song list, one per line.
#[must_use]
pub fn song_list(songs: &[String]) -> String {
    if songs.is_empty() {
        return "No songs catalogued yet.\n".to_string();
    }

    let mut out = String::new();
    for song in songs {
        out.push_str(song);
        out.push('\n');
    }
    out.push_str(&format!("{} song(s)\n", songs.len()));
    out
}
