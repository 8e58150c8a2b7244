use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An artist credit as returned by the catalog search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// One album cover rendition. Spotify orders these large to small.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

/// A track from the catalog search. Never mutated client-side; the
/// selection only tracks membership by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub album: Album,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Default for Album {
    fn default() -> Self {
        Self {
            name: String::new(),
            images: Vec::new(),
        }
    }
}

impl Track {
    /// Comma-joined artist names for display.
    pub fn artist_line(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Smallest cover rendition. Spotify sends three sizes, largest first;
    /// fall back to whatever is last if fewer are present.
    pub fn thumbnail(&self) -> Option<&str> {
        self.album
            .images
            .get(2)
            .or_else(|| self.album.images.last())
            .map(|img| img.url.as_str())
    }
}

/// Token details the backend exposes alongside the session check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub expires_at: i64,
}

impl TokenInfo {
    /// Expiry as a UTC timestamp, `None` if the backend sent garbage.
    pub fn expires_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.expires_at, 0)
    }
}

/// Session state as confirmed by the backend. Read-only for the client:
/// re-fetched on demand, never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub token_info: Option<TokenInfo>,
}

impl AuthStatus {
    pub fn logged_out() -> Self {
        Self {
            authenticated: false,
            token_info: None,
        }
    }
}

/// A lightweight reference to a song inside a persisted chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

// Wire shapes for the backend contract. Deserialization happens against
// these at the boundary; a success body missing a field is a malformed
// response, not a crash further in.

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveRelationshipsRequest {
    /// Order matters: index n triggers index n + 1.
    pub songs: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipsResponse {
    pub relationships: HashMap<String, SongRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imagine() -> Track {
        serde_json::from_str(
            r#"{
                "id": "t1",
                "name": "Imagine",
                "artists": [{"name": "John Lennon"}],
                "album": {"name": "Imagine", "images": [{"url": "a"}, {"url": "b"}, {"url": "c"}]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_catalog_track() {
        let track = imagine();
        assert_eq!(track.id, "t1");
        assert_eq!(track.artist_line(), "John Lennon");
        assert_eq!(track.thumbnail(), Some("c"));
    }

    #[test]
    fn artist_line_joins_multiple_credits() {
        let mut track = imagine();
        track.artists.push(Artist {
            name: "Plastic Ono Band".into(),
        });
        assert_eq!(track.artist_line(), "John Lennon, Plastic Ono Band");
    }

    #[test]
    fn thumbnail_falls_back_to_last_image() {
        let mut track = imagine();
        track.album.images.truncate(1);
        assert_eq!(track.thumbnail(), Some("a"));
        track.album.images.clear();
        assert_eq!(track.thumbnail(), None);
    }

    #[test]
    fn auth_status_tolerates_missing_token_info() {
        let status: AuthStatus = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert!(!status.authenticated);
        assert!(status.token_info.is_none());

        let status: AuthStatus = serde_json::from_str(
            r#"{"authenticated": true, "token_info": {"access_token": "tok", "expires_at": 1700000000}}"#,
        )
        .unwrap();
        assert!(status.authenticated);
        assert_eq!(status.token_info.unwrap().expires_at, 1700000000);
    }

    #[test]
    fn search_response_preserves_item_order() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"tracks": {"items": [
                {"id": "t2", "name": "Two"},
                {"id": "t1", "name": "One"}
            ]}}"#,
        )
        .unwrap();
        let ids: Vec<_> = response.tracks.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t2", "t1"]);
    }

    #[test]
    fn save_request_serializes_songs_in_order() {
        let mut a = imagine();
        a.id = "a".into();
        let mut b = imagine();
        b.id = "b".into();

        let body = serde_json::to_value(SaveRelationshipsRequest { songs: vec![a, b] }).unwrap();
        let ids: Vec<_> = body["songs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn relationships_round_trip() {
        let json = r#"{"relationships": {"t1": {"id": "t2", "name": null, "uri": null}}}"#;
        let parsed: RelationshipsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.relationships["t1"].id, "t2");

        let back = serde_json::to_string(&parsed).unwrap();
        let again: RelationshipsResponse = serde_json::from_str(&back).unwrap();
        assert_eq!(parsed, again);
    }
}
