//! The authoritative transition catalog.
//!
//! A [`TransitionStore`] owns the append-only transition list; the song set
//! and the adjacency graph are derived from it on demand, never cached, so
//! they cannot go stale. Stores are plain constructible values — tests and
//! callers make as many as they like, there is no process-wide instance.
//!
//! The store performs no I/O. Persistence ([`crate::db`], JSON snapshots)
//! and rendering ([`crate::render`]) are collaborator concerns layered on
//! top of the accessors here.

use std::collections::BTreeSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::SongGraph;
use crate::transition::Transition;

/// Why an `add` was rejected. All of these are user-facing, recoverable
/// outcomes; the store is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("song name cannot be empty")]
    EmptySong,
    #[error("`{0}` cannot transition into itself")]
    SelfLoop(String),
    #[error("transition `{from}` -> `{to}` is already catalogued")]
    Duplicate { from: String, to: String },
}

/// Serializable shape handed to the persistence collaborator.
///
/// Matches the on-disk JSON layout: both fields may be missing or `null`
/// on load and default to empty. The `songs` list is informational — on
/// restore the song set is always re-derived from the transitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transitions: Vec<Transition>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub songs: Vec<String>,
}

/// Accept an explicit JSON `null` where a list is expected.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// In-memory catalog of directed song transitions.
#[derive(Debug)]
pub struct TransitionStore {
    transitions: Vec<Transition>,
    next_id: u32,
}

impl Default for TransitionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from previously persisted transitions.
    ///
    /// Entries that violate store invariants (empty endpoint, self-loop,
    /// duplicate pair) are skipped with a warning instead of failing the
    /// whole load — a damaged data file degrades, it does not brick the
    /// catalog. Ids are preserved; fresh ids continue after the highest.
    #[must_use]
    pub fn from_transitions(transitions: Vec<Transition>) -> Self {
        let mut store = Self::new();

        for t in transitions {
            let from = t.from.trim().to_string();
            let to = t.to.trim().to_string();
            if from.is_empty() || to.is_empty() {
                log::warn!("Skipping stored transition {} with an empty song name.", t.id);
                continue;
            }
            if from == to {
                log::warn!("Skipping stored self-loop transition {} (`{from}`).", t.id);
                continue;
            }
            if store.find_pair(&from, &to).is_some() {
                log::warn!("Skipping stored duplicate transition {} ({from} -> {to}).", t.id);
                continue;
            }
            store.next_id = store.next_id.max(t.id + 1);
            store.transitions.push(Transition { from, to, ..t });
        }

        store
    }

    /// Restore from a snapshot. Missing fields already defaulted to empty
    /// during deserialization; the song list inside is ignored in favour of
    /// the derived set.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::from_transitions(snapshot.transitions)
    }

    /// Catalog a new transition.
    ///
    /// Song names are trimmed before validation. Fails if either name is
    /// empty, the songs are the same, or the `(from, to)` pair already
    /// exists. On success the new transition gets the next sequential id
    /// and the current UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the rejected input; the
    /// store is unchanged in that case.
    pub fn add_transition(
        &mut self,
        from: &str,
        to: &str,
        notes: Option<&str>,
    ) -> Result<&Transition, ValidationError> {
        let from = from.trim();
        let to = to.trim();

        if from.is_empty() || to.is_empty() {
            return Err(ValidationError::EmptySong);
        }
        if from == to {
            return Err(ValidationError::SelfLoop(from.to_string()));
        }
        if self.find_pair(from, to).is_some() {
            return Err(ValidationError::Duplicate {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(ToString::to_string);

        let transition = Transition {
            id: self.next_id,
            from: from.to_string(),
            to: to.to_string(),
            notes,
            created_at: Utc::now(),
        };
        self.next_id += 1;

        log::debug!("Catalogued transition {}.", transition.edge_label());
        self.transitions.push(transition);
        Ok(self.transitions.last().expect("just pushed"))
    }

    /// Remove the transition with `id`. Returns whether anything was
    /// removed; an unknown id is a no-op, not an error.
    pub fn delete_transition(&mut self, id: u32) -> bool {
        match self.transitions.iter().position(|t| t.id == id) {
            Some(index) => {
                let removed = self.transitions.remove(index);
                log::debug!("Deleted transition {}.", removed.edge_label());
                true
            }
            None => false,
        }
    }

    /// Drop every transition (and with them, every song).
    pub fn clear(&mut self) {
        self.transitions.clear();
        self.next_id = 1;
    }

    /// All transitions in insertion order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Look up a transition by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.id == id)
    }

    /// The sorted set of songs referenced by at least one transition.
    #[must_use]
    pub fn songs(&self) -> Vec<String> {
        self.song_set().into_iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn contains_song(&self, song: &str) -> bool {
        self.transitions
            .iter()
            .any(|t| t.from == song || t.to == song)
    }

    #[must_use]
    pub fn song_count(&self) -> usize {
        self.song_set().len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Derive a fresh adjacency view of the catalog.
    #[must_use]
    pub fn graph(&self) -> SongGraph {
        SongGraph::from_transitions(&self.transitions)
    }

    /// Serializable copy of the current state for the persistence layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            transitions: self.transitions.clone(),
            songs: self.songs(),
        }
    }

    fn find_pair(&self, from: &str, to: &str) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.to == to)
    }

    fn song_set(&self) -> BTreeSet<&str> {
        self.transitions
            .iter()
            .flat_map(|t| [t.from.as_str(), t.to.as_str()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(edges: &[(&str, &str)]) -> TransitionStore {
        let mut store = TransitionStore::new();
        for (from, to) in edges {
            store.add_transition(from, to, None).unwrap();
        }
        store
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let store = store_with(&[("A", "B"), ("B", "C")]);
        let ids: Vec<u32> = store.transitions().iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn self_loop_is_rejected_and_store_unchanged() {
        let mut store = store_with(&[("A", "B")]);
        let err = store.add_transition("C", "C", None).unwrap_err();
        assert_eq!(err, ValidationError::SelfLoop("C".to_string()));
        assert_eq!(store.len(), 1);
        assert!(!store.contains_song("C"));
    }

    #[test]
    fn trimmed_self_loop_is_still_a_self_loop() {
        let mut store = TransitionStore::new();
        let err = store.add_transition("  A  ", "A", None).unwrap_err();
        assert_eq!(err, ValidationError::SelfLoop("A".to_string()));
    }

    #[test]
    fn empty_song_name_is_rejected() {
        let mut store = TransitionStore::new();
        assert_eq!(
            store.add_transition("   ", "B", None).unwrap_err(),
            ValidationError::EmptySong
        );
        assert_eq!(
            store.add_transition("A", "", None).unwrap_err(),
            ValidationError::EmptySong
        );
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_pair_is_rejected_but_reverse_is_fine() {
        let mut store = store_with(&[("A", "B")]);
        let err = store.add_transition("A", "B", Some("again")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Duplicate {
                from: "A".to_string(),
                to: "B".to_string()
            }
        );
        assert_eq!(store.len(), 1);

        // The opposite direction is a different transition.
        assert!(store.add_transition("B", "A", None).is_ok());
    }

    #[test]
    fn notes_are_trimmed_and_empty_notes_dropped() {
        let mut store = TransitionStore::new();
        let id = store
            .add_transition("A", "B", Some("  smooth blend  "))
            .unwrap()
            .id;
        assert_eq!(store.get(id).unwrap().notes.as_deref(), Some("smooth blend"));

        let id = store.add_transition("B", "C", Some("   ")).unwrap().id;
        assert_eq!(store.get(id).unwrap().notes, None);
    }

    #[test]
    fn songs_always_equal_union_of_endpoints() {
        let mut store = store_with(&[("A", "B"), ("B", "C"), ("A", "C")]);
        assert_eq!(store.songs(), ["A", "B", "C"]);

        store.delete_transition(2);
        assert_eq!(store.songs(), ["A", "B", "C"]);

        // Dropping the last transition touching B drops B itself.
        store.delete_transition(1);
        assert_eq!(store.songs(), ["A", "C"]);
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop() {
        let mut store = store_with(&[("A", "B")]);
        assert!(!store.delete_transition(99));
        assert_eq!(store.len(), 1);
        assert!(store.delete_transition(1));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_transitions_and_songs() {
        let mut store = store_with(&[("A", "B"), ("B", "C")]);
        store.clear();
        assert!(store.is_empty());
        assert!(store.songs().is_empty());
        // Ids restart after a full clear.
        assert_eq!(store.add_transition("X", "Y", None).unwrap().id, 1);
    }

    #[test]
    fn snapshot_round_trip_preserves_everything() {
        let mut store = TransitionStore::new();
        store.add_transition("A", "B", Some("echo out")).unwrap();
        store.add_transition("B", "C", None).unwrap();

        let snapshot = store.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored = TransitionStore::from_snapshot(serde_json::from_str(&json).unwrap());

        assert_eq!(restored.transitions(), store.transitions());
        assert_eq!(restored.songs(), store.songs());
    }

    #[test]
    fn snapshot_with_missing_fields_loads_empty() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        let store = TransitionStore::from_snapshot(snapshot);
        assert!(store.is_empty());
        assert!(store.songs().is_empty());
    }

    #[test]
    fn restore_skips_invalid_entries() {
        let json = r#"{
            "transitions": [
                {"id": 1, "from": "A", "to": "B", "created_at": "2025-01-01T00:00:00Z"},
                {"id": 2, "from": "C", "to": "C", "created_at": "2025-01-01T00:00:00Z"},
                {"id": 3, "from": "A", "to": "B", "created_at": "2025-01-01T00:00:00Z"},
                {"id": 4, "from": "", "to": "D", "created_at": "2025-01-01T00:00:00Z"},
                {"id": 9, "from": "B", "to": "D", "created_at": "2025-01-01T00:00:00Z"}
            ]
        }"#;
        let mut store = TransitionStore::from_snapshot(serde_json::from_str(json).unwrap());

        let ids: Vec<u32> = store.transitions().iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 9]);
        assert_eq!(store.songs(), ["A", "B", "D"]);

        // New ids continue after the highest surviving id.
        assert_eq!(store.add_transition("D", "E", None).unwrap().id, 10);
    }

    #[test]
    fn ids_do_not_get_reused_after_delete() {
        let mut store = store_with(&[("A", "B")]);
        store.delete_transition(1);
        assert_eq!(store.add_transition("C", "D", None).unwrap().id, 2);
    }
}
