use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest, HttpResponse};
use log::warn;
use crate::entities::account::Account;
use crate::entities::config::ConfigFile;
use crate::http::spotify::authorize_url;
use crate::http::ProviderError;
use crate::managers::sessions::{SessionStore, SESSION_COOKIE};
use crate::managers::spotify::Spotify;

pub mod activity;
pub mod artist;
pub mod current;
pub mod render;
pub mod spotify;

#[derive(Clone)]
pub struct WebData {
    pub config: Arc<ConfigFile>,
    pub spotify: Arc<Spotify>,
    pub sessions: Arc<SessionStore>
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.service(spotify::start)
        .service(spotify::logout)
        .service(spotify::callback)
        .service(artist::artist_images)
        .service(artist::artist_albums_default)
        .service(artist::artist_albums)
        .service(current::current)
        .service(current::api_current)
        .service(activity::track_load)
        .service(activity::track_tick);
}

/// The logged in account, resolved from the session cookie. Handlers that take
/// it answer 401 to anonymous requests; `Option<AccountContext>` makes it optional.
pub struct AccountContext {
    pub account: Account,
    pub session_id: String
}

impl FromRequest for AccountContext {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let data = req.app_data::<web::Data<WebData>>().cloned();
        let session_id = req.cookie(SESSION_COOKIE).map(|cookie| cookie.value().to_string());

        Box::pin(async move {
            let (data, session_id) = match (data, session_id) {
                (Some(data), Some(session_id)) => (data, session_id),
                _ => return Err(ErrorUnauthorized("Login required"))
            };

            let spotify_id = data.sessions.resolve(&session_id).await
                .ok_or_else(|| ErrorUnauthorized("Login required"))?;

            let account = data.spotify.accounts().find_by_spotify_id(&spotify_id).await
                .map_err(ErrorInternalServerError)?
                .ok_or_else(|| ErrorUnauthorized("Login required"))?;

            Ok(AccountContext {
                account,
                session_id
            })
        })
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found().insert_header((header::LOCATION, location)).finish()
}

/// An expired token sends the user back through authorization, anything else
/// is a plain "try again".
pub fn provider_failure(err: ProviderError, config: &ConfigFile) -> HttpResponse {
    match err {
        ProviderError::AuthExpired => redirect(&authorize_url(&config.spotify)),
        err => {
            warn!("{}", err);
            HttpResponse::BadGateway().body("Something went wrong, try again.")
        }
    }
}
