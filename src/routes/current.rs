use actix_web::{get, web, HttpResponse, Responder};
use log::warn;
use crate::entities::playing::{CurrentStatus, NowPlaying};
use crate::http::ProviderError;
use crate::routes::{AccountContext, WebData};

#[get("/current/")]
pub async fn current(context: Option<AccountContext>, data: web::Data<WebData>) -> impl Responder {
    let status = match context {
        None => CurrentStatus::relogin(),
        Some(context) => match data.spotify.now_playing(&context.account).await {
            Ok(Some(playing)) => CurrentStatus::Playing(playing),
            Ok(None) => CurrentStatus::nothing_playing(),
            Err(ProviderError::AuthExpired) => CurrentStatus::relogin(),
            Err(err) => {
                warn!("{}", err);
                CurrentStatus::try_again()
            }
        }
    };

    HttpResponse::Ok().json(status)
}

#[get("/api/current/")]
pub async fn api_current() -> impl Responder {
    HttpResponse::Ok().json(CurrentStatus::Playing(NowPlaying::demo()))
}
