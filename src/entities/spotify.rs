use std::collections::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SpotifyImage {
    pub url: String
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SpotifyInfoArtist {
    pub name: String,
    pub id: String
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SpotifyInfoAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<SpotifyImage>
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SpotifyInfoItem {
    pub name: String,
    pub duration_ms: i64,
    pub artists: Vec<SpotifyInfoArtist>,
    pub album: SpotifyInfoAlbum,
    pub uri: String
}

/// Body of the currently-playing endpoint. A missing `item` means the token
/// was not accepted.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SpotifyInfo {
    #[serde(default)]
    pub progress_ms: i64,
    pub item: Option<SpotifyInfoItem>,
    #[serde(default)]
    pub is_playing: bool
}

#[derive(Debug, Deserialize)]
pub struct SpotifyCallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub state: Option<String>
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SpotifyAuthTokenPayload {
    pub code: String,
    pub redirect_uri : String,
    pub grant_type: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SpotifyAuthTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: i32
}

#[derive(Serialize, Debug)]
pub struct SpotifyAuthorizeQuery<'a> {
    pub client_id: &'a str,
    pub response_type: &'a str,
    pub redirect_uri: &'a str,
    pub scope: &'a str,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SpotifyUser {
    pub id: String
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SpotifyArtist {
    #[serde(default)]
    pub images: Vec<SpotifyImage>
}

/// One album item as the artist albums endpoint returns it.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct SpotifyAlbumItem {
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>
}

/// A page of artist albums. `items` is absent when the provider answered with
/// an error body instead of a listing.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct SpotifyAlbumPage {
    pub items: Option<Vec<SpotifyAlbumItem>>,
    pub next: Option<String>
}
