pub mod selection;
pub mod spotify;

pub use selection::{Selection, MIN_CHAIN_LEN};
pub use spotify::{
    Album, AlbumImage, Artist, AuthStatus, LoginResponse, RelationshipsResponse,
    SaveRelationshipsRequest, SearchResponse, SongRef, TokenInfo, Track, TrackPage,
};
