use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use crate::entities::config::{ConfigFile, ConfigFileSpotify};
use crate::entities::spotify::{SpotifyAlbumPage, SpotifyArtist, SpotifyAuthTokenPayload, SpotifyAuthTokenResponse, SpotifyAuthorizeQuery, SpotifyInfo, SpotifyUser};
use crate::http::{ProviderError, SpotifyValue};
use crate::utils::http::with_query;

/// The Spotify endpoints the application talks to.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    async fn request_token(&self, code: &str) -> Result<SpotifyAuthTokenResponse, ProviderError>;

    async fn current_user(&self, token: &str) -> Result<SpotifyUser, ProviderError>;

    async fn currently_playing(&self, token: &str) -> Result<SpotifyValue, ProviderError>;

    async fn artist(&self, token: &str, artist_id: &str) -> Result<SpotifyArtist, ProviderError>;

    async fn artist_albums(&self, token: &str, artist_id: &str, offset: u32, limit: u32) -> Result<SpotifyAlbumPage, ProviderError>;
}

pub fn authorize_url(spotify: &ConfigFileSpotify) -> String {
    let query = SpotifyAuthorizeQuery {
        client_id: &spotify.client_id,
        response_type: "code",
        redirect_uri: &spotify.callback_url,
        scope: &spotify.scopes
    };

    with_query(&format!("{}/authorize", spotify.accounts_url), &query)
}

/// Joins `segments` onto `base`, percent-encoding each one, so an id can't
/// leave its path segment.
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url, ProviderError> {
    let mut url = Url::parse(base).map_err(|err| ProviderError::Endpoint(format!("{}: {}", base, err)))?;

    url.path_segments_mut()
        .map_err(|_| ProviderError::Endpoint(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Turns an API response into `T`: 204 is `UpstreamEmpty`, 401 `AuthExpired`,
/// anything else must decode.
pub fn classify<T: DeserializeOwned>(code: StatusCode, body: &str) -> Result<T, ProviderError> {
    if code == StatusCode::NO_CONTENT {
        return Err(ProviderError::UpstreamEmpty)
    }

    if code == StatusCode::UNAUTHORIZED {
        return Err(ProviderError::AuthExpired)
    }

    serde_json::from_str(body).map_err(|err| ProviderError::UpstreamMalformed(err.to_string()))
}

/// Nothing playing comes back as 204.
pub fn playing_value(result: Result<SpotifyInfo, ProviderError>) -> Result<SpotifyValue, ProviderError> {
    match result {
        Ok(info) => Ok(SpotifyValue::Info(info)),
        Err(ProviderError::UpstreamEmpty) => Ok(SpotifyValue::Empty),
        Err(err) => Err(err)
    }
}

pub struct SpotifyHttp {
    http: Client,
    spotify: ConfigFileSpotify,
    auth: String
}

impl SpotifyHttp {
    pub fn new(http: Client, cfg: &ConfigFile) -> Self {
        Self {
            http,
            spotify: cfg.spotify.clone(),
            auth: cfg.get_auth_base64()
        }
    }

    fn get(&self, segments: &[&str], token: &str) -> Result<RequestBuilder, ProviderError> {
        let url = endpoint_url(&self.spotify.api_url, segments)?;

        Ok(self.http.get(url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ProviderError> {
        let res = request.send().await?;
        let code = res.status();

        debug!("{} {}", code, res.url());

        let body = res.text().await?;

        classify(code, &body)
    }
}

#[async_trait]
impl SpotifyApi for SpotifyHttp {
    async fn request_token(&self, code: &str) -> Result<SpotifyAuthTokenResponse, ProviderError> {
        let payload = SpotifyAuthTokenPayload {
            code: code.to_string(),
            redirect_uri: self.spotify.callback_url.clone(),
            grant_type: "authorization_code".to_string()
        };

        let payload_data = serde_urlencoded::to_string(payload)
            .map_err(|err| ProviderError::UpstreamMalformed(err.to_string()))?;

        let res = self.http.post(format!("{}/api/token", self.spotify.accounts_url))
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(reqwest::header::AUTHORIZATION, format!("{} {}", "Basic", self.auth))
            .body(payload_data)
            .send()
            .await?;

        let code = res.status();

        if !code.is_success() {
            return Err(ProviderError::Status(code.as_u16()))
        }

        res.json::<SpotifyAuthTokenResponse>().await
            .map_err(|err| ProviderError::UpstreamMalformed(err.to_string()))
    }

    async fn current_user(&self, token: &str) -> Result<SpotifyUser, ProviderError> {
        self.fetch(self.get(&["me"], token)?).await
    }

    async fn currently_playing(&self, token: &str) -> Result<SpotifyValue, ProviderError> {
        playing_value(self.fetch(self.get(&["me", "player", "currently-playing"], token)?).await)
    }

    async fn artist(&self, token: &str, artist_id: &str) -> Result<SpotifyArtist, ProviderError> {
        self.fetch(self.get(&["artists", artist_id], token)?).await
    }

    async fn artist_albums(&self, token: &str, artist_id: &str, offset: u32, limit: u32) -> Result<SpotifyAlbumPage, ProviderError> {
        let request = self.get(&["artists", artist_id, "albums"], token)?
            .query(&[("limit", limit), ("offset", offset)]);

        self.fetch(request).await
    }
}
