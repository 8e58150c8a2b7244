use serde::{Deserialize, Serialize};

use crate::spotify::Track;

/// A chain needs at least a trigger and a follower.
pub const MIN_CHAIN_LEN: usize = 2;

/// The user-curated, ordered list of tracks pending submission.
///
/// Invariant: no two entries share an `id`. Lives only in view state for
/// the lifetime of the dashboard; cleared wholesale after a successful save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    tracks: Vec<Track>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `track` unless an entry with the same id is already present.
    /// Returns whether the track was added, so callers can skip redraws.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Remove the entry with the given id. No-op if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != id);
        self.tracks.len() != before
    }

    /// Move the entry at `from` to `to`, shifting the elements in between.
    /// All non-moved entries keep their relative order. Out-of-range
    /// indices (a drop outside the list) are a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.tracks.len() || to >= self.tracks.len() {
            return;
        }
        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether the selection is long enough to be saved as a chain.
    pub fn is_chainable(&self) -> bool {
        self.tracks.len() >= MIN_CHAIN_LEN
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn to_vec(&self) -> Vec<Track> {
        self.tracks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spotify::{Album, AlbumImage, Artist};

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            name: format!("Track {id}"),
            artists: vec![Artist {
                name: "Artist".into(),
            }],
            album: Album {
                name: "Album".into(),
                images: vec![AlbumImage {
                    url: "u".into(),
                    width: None,
                    height: None,
                }],
            },
            uri: None,
        }
    }

    fn selection(ids: &[&str]) -> Selection {
        let mut sel = Selection::new();
        for id in ids {
            sel.add(track(id));
        }
        sel
    }

    fn ids(sel: &Selection) -> Vec<&str> {
        sel.tracks().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn add_is_idempotent() {
        let mut sel = Selection::new();
        assert!(sel.add(track("t1")));
        assert!(!sel.add(track("t1")));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn remove_twice_is_a_noop_the_second_time() {
        let mut sel = selection(&["t1", "t2"]);
        assert!(sel.remove("t1"));
        assert!(!sel.remove("t1"));
        assert_eq!(ids(&sel), ["t2"]);
    }

    #[test]
    fn reorder_moves_one_and_keeps_the_rest_in_order() {
        let mut sel = selection(&["t1", "t2", "t3"]);
        sel.reorder(0, 2);
        assert_eq!(ids(&sel), ["t2", "t3", "t1"]);
    }

    #[test]
    fn reorder_preserves_the_multiset_of_ids() {
        let mut sel = selection(&["a", "b", "c", "d"]);
        sel.reorder(3, 1);
        let mut sorted = ids(&sel);
        sorted.sort_unstable();
        assert_eq!(sorted, ["a", "b", "c", "d"]);
        // relative order of a, c, d (the unmoved ones) is intact
        assert_eq!(ids(&sel), ["a", "d", "b", "c"]);
    }

    #[test]
    fn reorder_out_of_range_is_a_noop() {
        let mut sel = selection(&["t1", "t2"]);
        sel.reorder(0, 5);
        sel.reorder(5, 0);
        sel.reorder(1, 1);
        assert_eq!(ids(&sel), ["t1", "t2"]);
    }

    #[test]
    fn chainable_requires_two_entries() {
        let mut sel = Selection::new();
        assert!(!sel.is_chainable());
        sel.add(track("t1"));
        assert!(!sel.is_chainable());
        sel.add(track("t2"));
        assert!(sel.is_chainable());
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut sel = selection(&["t1", "t2"]);
        sel.clear();
        assert!(sel.is_empty());
        // and membership starts fresh afterwards
        assert!(sel.add(track("t1")));
    }

    #[test]
    fn search_scenario_add_from_results() {
        // query "Imagine" -> one result -> adding it twice keeps length 1
        let payload: crate::spotify::SearchResponse = serde_json::from_str(
            r#"{"tracks": {"items": [{
                "id": "t1",
                "name": "Imagine",
                "artists": [{"name": "John Lennon"}],
                "album": {"name": "Imagine", "images": [{"url": "a"}, {"url": "b"}, {"url": "c"}]}
            }]}}"#,
        )
        .unwrap();
        assert_eq!(payload.tracks.items.len(), 1);

        let mut sel = Selection::new();
        assert!(sel.add(payload.tracks.items[0].clone()));
        assert!(!sel.add(payload.tracks.items[0].clone()));
        assert_eq!(ids(&sel), ["t1"]);
    }
}
