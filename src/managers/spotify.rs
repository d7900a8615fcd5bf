use std::sync::Arc;
use log::{debug, info};
use thiserror::Error;
use crate::entities::account::Account;
use crate::entities::album::Album;
use crate::entities::playing::NowPlaying;
use crate::http::spotify::SpotifyApi;
use crate::http::{ProviderError, SpotifyValue};
use crate::managers::accounts::{AccountStore, StoreError};
use crate::managers::discography::fetch_discography;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Spotify denied the authorization: {0}")]
    Denied(String),
    #[error("No code found in the callback query")]
    MissingCode,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Store(#[from] StoreError)
}

/// Every Spotify-backed operation, on behalf of an explicit account.
pub struct Spotify {
    api: Arc<dyn SpotifyApi>,
    accounts: Arc<dyn AccountStore>
}

impl Spotify {
    pub fn new(api: Arc<dyn SpotifyApi>, accounts: Arc<dyn AccountStore>) -> Self {
        Self {
            api,
            accounts
        }
    }

    pub fn accounts(&self) -> &Arc<dyn AccountStore> {
        &self.accounts
    }

    /// Trades the callback code for a token, then stores it on the account of
    /// whoever the token belongs to.
    pub async fn login(&self, code: Option<&str>, error: Option<&str>) -> Result<Account, LoginError> {
        if let Some(error) = error {
            return Err(LoginError::Denied(error.to_string()));
        }

        let code = code.filter(|code| !code.is_empty()).ok_or(LoginError::MissingCode)?;

        let token = self.api.request_token(code).await?;
        debug!("Got a token valid for {}s", token.expires_in);
        let user = self.api.current_user(&token.access_token).await?;

        let account = self.accounts.upsert_token(&user.id, &token.access_token).await?;

        Ok(account)
    }

    /// `Ok(None)` when nothing is playing.
    pub async fn now_playing(&self, account: &Account) -> Result<Option<NowPlaying>, ProviderError> {
        match self.api.currently_playing(&account.spotify_token).await? {
            SpotifyValue::Info(info) => NowPlaying::from_info(info)
                .map(Some)
                .ok_or(ProviderError::AuthExpired),
            SpotifyValue::Empty => Ok(None)
        }
    }

    /// Only the first picture of the artist is available.
    pub async fn artist_images(&self, account: &Account, artist_id: &str) -> Result<Vec<String>, ProviderError> {
        let artist = self.api.artist(&account.spotify_token, artist_id).await?;

        Ok(artist.images.into_iter().take(1).map(|image| image.url).collect())
    }

    pub async fn discography(&self, account: &Account, artist_id: &str) -> Result<Vec<Album>, ProviderError> {
        let albums = fetch_discography(self.api.as_ref(), artist_id, &account.spotify_token).await?;

        info!("Fetched {} albums of artist {} for user {}", albums.len(), artist_id, account.id);

        Ok(albums)
    }
}
