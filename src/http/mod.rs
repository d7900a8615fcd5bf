use thiserror::Error;
use crate::entities::spotify::SpotifyInfo;

pub mod spotify;

#[cfg(test)]
pub mod fake;

pub enum SpotifyValue {
    Info(SpotifyInfo),
    Empty
}

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The token was rejected or the answer lacked the expected payload; the
    /// user has to authorize again.
    #[error("Spotify rejected the access token")]
    AuthExpired,
    #[error("Spotify returned no content")]
    UpstreamEmpty,
    #[error("Unexpected Spotify response: {0}")]
    UpstreamMalformed(String),
    #[error("Can't build a Spotify URL from {0}")]
    Endpoint(String),
    #[error("Spotify answered with status {0}")]
    Status(u16),
    #[error("Request to Spotify failed: {0}")]
    Transport(#[from] reqwest::Error)
}
