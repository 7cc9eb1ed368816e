use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed, annotated edge between two songs: "this mixes into that".
///
/// Songs have no lifecycle of their own — a song exists exactly as long as
/// at least one transition references it. Transitions are immutable after
/// creation; there is no edit operation, only add and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Sequential id, assigned by the store. Stable across save/load.
    pub id: u32,
    /// Song key the mix starts from. Conventionally "Artist - Title",
    /// but any non-empty string is a valid key.
    pub from: String,
    /// Song key the mix lands on. Never equal to `from`.
    pub to: String,
    /// Free-text mixing notes ("cut on the drop", "long echo out", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the transition was catalogued.
    pub created_at: DateTime<Utc>,
}

impl Transition {
    /// The `(from, to)` pair as a displayable edge, e.g. `A -> B`.
    #[must_use]
    pub fn edge_label(&self) -> String {
        format!("{} -> {}", self.from, self.to)
    }
}
