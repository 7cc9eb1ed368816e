//! Derived adjacency view of the transition catalog.
//!
//! The graph is never mutated in place: it is rebuilt in full from the
//! transition list whenever a caller asks for it, so it can never drift
//! out of sync with the store.

use std::collections::HashMap;

use crate::transition::Transition;

/// Read-only mapping from a song key to its ordered successors.
///
/// Successor order is the insertion order of the transitions that produced
/// the edges — the chain finder depends on this for stable tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct SongGraph {
    edges: HashMap<String, Vec<String>>,
}

impl SongGraph {
    /// Build the adjacency view from scratch.
    ///
    /// Every song that appears as either endpoint becomes a node; songs
    /// with no outgoing transitions map to an empty successor list.
    #[must_use]
    pub fn from_transitions(transitions: &[Transition]) -> Self {
        let mut edges: HashMap<String, Vec<String>> = HashMap::new();

        for t in transitions {
            edges.entry(t.from.clone()).or_default().push(t.to.clone());
            edges.entry(t.to.clone()).or_default();
        }

        log::trace!(
            "Rebuilt song graph: {} songs, {} edges.",
            edges.len(),
            transitions.len()
        );
        Self { edges }
    }

    /// Successors of `song` in edge insertion order.
    /// A song the graph has never seen has no successors.
    #[must_use]
    pub fn successors(&self, song: &str) -> &[String] {
        self.edges.get(song).map_or(&[], Vec::as_slice)
    }

    /// All song keys in the graph, sorted for stable output.
    #[must_use]
    pub fn songs(&self) -> Vec<&str> {
        let mut songs: Vec<&str> = self.edges.keys().map(String::as_str).collect();
        songs.sort_unstable();
        songs
    }

    #[must_use]
    pub fn song_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
