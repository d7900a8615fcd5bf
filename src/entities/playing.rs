use serde::Serialize;
use crate::entities::spotify::{SpotifyInfo, SpotifyInfoArtist};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ArtistRef {
    pub name: String,
    pub id: String
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NowPlaying {
    pub img_src: String,
    pub artists: Vec<ArtistRef>,
    pub album_name: String,
    pub track_name: String,
    pub track_ms_total: i64,
    pub track_ms_progress: i64,
    pub track_is_playing: bool,
    pub track_uri: String
}

impl NowPlaying {
    /// `None` when the body carries no item.
    pub fn from_info(info: SpotifyInfo) -> Option<Self> {
        let item = info.item?;

        let img_src = item.album.images.into_iter()
            .next()
            .map(|image| image.url)
            .unwrap_or_default();

        Some(Self {
            img_src,
            artists: item.artists.into_iter().map(|SpotifyInfoArtist { name, id }| ArtistRef { name, id }).collect(),
            album_name: item.album.name,
            track_name: item.name,
            track_ms_total: item.duration_ms,
            track_ms_progress: info.progress_ms,
            track_is_playing: info.is_playing,
            track_uri: item.uri
        })
    }

    /// Placeholder served by `/api/current/`.
    pub fn demo() -> Self {
        Self {
            img_src: "https://vsupalov.com/images/avatar.png".to_string(),
            artists: vec![ArtistRef { name: "Nobody".to_string(), id: "".to_string() }],
            album_name: "Album".to_string(),
            track_name: "Track".to_string(),
            track_ms_total: 100,
            track_ms_progress: 20,
            track_is_playing: true,
            track_uri: "some uri".to_string()
        }
    }

    pub fn artist_names(&self) -> String {
        self.artists.iter().map(|artist| artist.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

/// JSON shape of the current status, `{"error": "nothing_playing", ...}` when idle.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum CurrentStatus {
    Playing(NowPlaying),
    Idle {
        error: &'static str,
        nothing_playing: bool
    },
    Failed {
        error: &'static str
    }
}

impl CurrentStatus {
    pub fn nothing_playing() -> Self {
        CurrentStatus::Idle { error: "nothing_playing", nothing_playing: true }
    }

    pub fn relogin() -> Self {
        CurrentStatus::Failed { error: "relogin" }
    }

    pub fn try_again() -> Self {
        CurrentStatus::Failed { error: "try_again" }
    }
}
