use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;
use crate::entities::spotify::{SpotifyAlbumItem, SpotifyAlbumPage, SpotifyArtist, SpotifyAuthTokenResponse, SpotifyImage, SpotifyInfo, SpotifyUser};
use crate::http::spotify::SpotifyApi;
use crate::http::{ProviderError, SpotifyValue};

pub enum Playing {
    Info(SpotifyInfo),
    Empty,
    Expired
}

/// Scripted stand-in for the Spotify API that records every call it gets.
#[derive(Default)]
pub struct FakeSpotify {
    pub pages: Mutex<VecDeque<Result<SpotifyAlbumPage, ProviderError>>>,
    pub album_calls: Mutex<Vec<(String, u32, u32)>>,
    pub playing: Mutex<Option<Playing>>,
    pub user_id: String,
    pub token: String,
    pub artist_images: Vec<String>,
    pub reject_code: bool
}

impl FakeSpotify {
    pub fn new() -> Self {
        Self {
            user_id: "listener".to_string(),
            token: "fresh-token".to_string(),
            ..Default::default()
        }
    }

    pub fn push_page(&self, page: Result<SpotifyAlbumPage, ProviderError>) {
        self.pages.lock().unwrap().push_back(page);
    }

    pub fn set_playing(&self, playing: Playing) {
        *self.playing.lock().unwrap() = Some(playing);
    }

    pub fn album_calls(&self) -> Vec<(String, u32, u32)> {
        self.album_calls.lock().unwrap().clone()
    }
}

pub fn album_item(album_type: &str, release_date: &str) -> SpotifyAlbumItem {
    SpotifyAlbumItem {
        album_type: Some(album_type.to_string()),
        release_date: Some(release_date.to_string()),
        external_urls: [("spotify".to_string(), format!("https://open.spotify.com/album/{}", release_date))].into_iter().collect(),
        images: vec![SpotifyImage { url: format!("https://i.scdn.co/{}", release_date) }]
    }
}

pub fn page(items: Vec<SpotifyAlbumItem>, next: bool) -> SpotifyAlbumPage {
    SpotifyAlbumPage {
        items: Some(items),
        next: next.then(|| "https://api.spotify.com/v1/artists/x/albums?offset=50".to_string())
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn request_token(&self, code: &str) -> Result<SpotifyAuthTokenResponse, ProviderError> {
        if self.reject_code || code.is_empty() {
            return Err(ProviderError::Status(400));
        }

        Ok(SpotifyAuthTokenResponse {
            access_token: self.token.clone(),
            expires_in: 3600
        })
    }

    async fn current_user(&self, token: &str) -> Result<SpotifyUser, ProviderError> {
        if token != self.token {
            return Err(ProviderError::AuthExpired);
        }

        Ok(SpotifyUser { id: self.user_id.clone() })
    }

    async fn currently_playing(&self, _token: &str) -> Result<SpotifyValue, ProviderError> {
        let playing = self.playing.lock().unwrap().take();

        match playing {
            Some(Playing::Info(info)) => Ok(SpotifyValue::Info(info)),
            Some(Playing::Empty) | None => Ok(SpotifyValue::Empty),
            Some(Playing::Expired) => Err(ProviderError::AuthExpired)
        }
    }

    async fn artist(&self, _token: &str, _artist_id: &str) -> Result<SpotifyArtist, ProviderError> {
        Ok(SpotifyArtist {
            images: self.artist_images.iter().map(|url| SpotifyImage { url: url.clone() }).collect()
        })
    }

    async fn artist_albums(&self, _token: &str, artist_id: &str, offset: u32, limit: u32) -> Result<SpotifyAlbumPage, ProviderError> {
        self.album_calls.lock().unwrap().push((artist_id.to_string(), offset, limit));

        let next = self.pages.lock().unwrap().pop_front();

        next.unwrap_or_else(|| Ok(page(vec![], false)))
    }
}
