//! Client-side song metadata helpers.
//!
//! Song keys conventionally look like `"Artist - Title"`. Everything here
//! is plain string parsing — no lookups, no network. The store accepts any
//! opaque key; these helpers only make display nicer when the convention
//! holds.

/// Metadata parsed out of a song key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongMeta {
    pub artist: Option<String>,
    pub title: String,
}

impl SongMeta {
    /// Split a key on the first `" - "` separator. Keys without the
    /// separator are treated as a bare title.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key.split_once(" - ") {
            Some((artist, title)) if !artist.trim().is_empty() && !title.trim().is_empty() => Self {
                artist: Some(artist.trim().to_string()),
                title: title.trim().to_string(),
            },
            _ => Self {
                artist: None,
                title: key.trim().to_string(),
            },
        }
    }

    /// Canonical display form: `Artist - Title`, or just the title.
    #[must_use]
    pub fn display_key(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} - {}", artist, self.title),
            None => self.title.clone(),
        }
    }
}

/// Average song length assumed when estimating how long a chain plays for.
pub const MINUTES_PER_SONG: f64 = 3.5;

/// Rough playing time of a chain with `songs` entries, formatted `m:ss`.
#[must_use]
pub fn estimate_chain_duration(songs: usize) -> String {
    format_duration(songs as f64 * MINUTES_PER_SONG)
}

/// Format fractional minutes as `m:ss`.
#[must_use]
pub fn format_duration(minutes: f64) -> String {
    let whole = minutes.floor();
    let secs = ((minutes - whole) * 60.0).round() as u32;
    // 59.6s rounds up to a full minute.
    if secs == 60 {
        format!("{}:00", whole as u64 + 1)
    } else {
        format!("{}:{secs:02}", whole as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_artist_and_title() {
        let meta = SongMeta::parse("Daft Punk - One More Time");
        assert_eq!(meta.artist.as_deref(), Some("Daft Punk"));
        assert_eq!(meta.title, "One More Time");
    }

    #[test]
    fn splits_on_first_separator_only() {
        let meta = SongMeta::parse("A - B - C");
        assert_eq!(meta.artist.as_deref(), Some("A"));
        assert_eq!(meta.title, "B - C");
    }

    #[test]
    fn key_without_separator_is_title_only() {
        let meta = SongMeta::parse("Intro");
        assert_eq!(meta.artist, None);
        assert_eq!(meta.title, "Intro");
        assert_eq!(meta.display_key(), "Intro");
    }

    #[test]
    fn hyphen_without_spaces_is_not_a_separator() {
        let meta = SongMeta::parse("Jay-Z");
        assert_eq!(meta.artist, None);
        assert_eq!(meta.title, "Jay-Z");
    }

    #[test]
    fn display_key_round_trips_conventional_keys() {
        let key = "Modjo - Lady";
        assert_eq!(SongMeta::parse(key).display_key(), key);
    }

    #[test]
    fn duration_formats_minutes_and_seconds() {
        assert_eq!(format_duration(3.5), "3:30");
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(10.0), "10:00");
    }

    #[test]
    fn chain_duration_uses_per_song_estimate() {
        assert_eq!(estimate_chain_duration(2), "7:00");
        assert_eq!(estimate_chain_duration(3), "10:30");
    }
}
