use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::{info, warn};
use crate::entities::spotify::SpotifyCallbackQuery;
use crate::http::spotify::authorize_url;
use crate::managers::activity::{log_activity, Action};
use crate::managers::sessions::SESSION_COOKIE;
use crate::managers::spotify::LoginError;
use crate::routes::render::{nothing_playing_page, now_playing_page, start_page};
use crate::routes::{provider_failure, redirect, AccountContext, WebData};

fn session_cookie(value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

#[get("/")]
pub async fn start(context: Option<AccountContext>, data: web::Data<WebData>) -> impl Responder {
    let context = match context {
        None => {
            let html = start_page(&authorize_url(&data.config.spotify));
            return HttpResponse::Ok().content_type(ContentType::html()).body(html);
        }
        Some(context) => context
    };

    match data.spotify.now_playing(&context.account).await {
        Ok(Some(playing)) => HttpResponse::Ok().content_type(ContentType::html()).body(now_playing_page(&playing)),
        Ok(None) => HttpResponse::Ok().content_type(ContentType::html()).body(nothing_playing_page()),
        Err(err) => provider_failure(err, &data.config)
    }
}

#[get("/callback/")]
pub async fn callback(req: HttpRequest, query: web::Query<SpotifyCallbackQuery>, data: web::Data<WebData>) -> impl Responder {
    if let Some(state) = &query.state {
        info!("Callback with state {}", state);
    }

    match data.spotify.login(query.code.as_deref(), query.error.as_deref()).await {
        Ok(account) => {
            // Re-authorizing after an expired token replaces the old session.
            if let Some(previous) = req.cookie(SESSION_COOKIE) {
                data.sessions.close(previous.value()).await;
            }

            let session_id = data.sessions.open(&account.spotify_id).await;

            log_activity(&account, Action::Login);

            let mut cookie = session_cookie(session_id);
            if let Ok(max_age) = Duration::try_from(data.sessions.max_age()) {
                cookie.set_max_age(max_age);
            }

            let mut response = redirect("/");
            if let Err(err) = response.add_cookie(&cookie) {
                warn!("Couldn't set the session cookie: {}", err);
            }
            response
        }
        Err(err @ (LoginError::Denied(_) | LoginError::MissingCode)) => {
            warn!("{}", err);
            HttpResponse::BadRequest().body("Couldn't log you in with Spotify, try again.")
        }
        Err(err) => {
            warn!("{}", err);
            HttpResponse::BadGateway().body("Something went wrong, try again.")
        }
    }
}

#[get("/logout/")]
pub async fn logout(context: AccountContext, data: web::Data<WebData>) -> impl Responder {
    log_activity(&context.account, Action::Logout);

    data.sessions.close(&context.session_id).await;

    let mut removal = session_cookie(String::new());
    removal.make_removal();

    let mut response = redirect("/");
    if let Err(err) = response.add_cookie(&removal) {
        warn!("Couldn't clear the session cookie: {}", err);
    }
    response
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::cookie::SameSite;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use crate::http::fake::{FakeSpotify, Playing};
    use crate::managers::sessions::SESSION_COOKIE;
    use crate::routes::configure_service;
    use crate::routes::test_support::{logged_in, web_data};

    #[actix_web::test]
    async fn test_anonymous_start_page_links_to_spotify() {
        let data = web_data(Arc::new(FakeSpotify::new()));
        let app = test::init_service(App::new().app_data(actix_web::web::Data::new(data)).configure(configure_service)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("https://accounts.spotify.com/authorize?client_id=client"));
    }

    #[actix_web::test]
    async fn test_callback_opens_session() {
        let data = web_data(Arc::new(FakeSpotify::new()));
        let sessions = data.sessions.clone();
        let app = test::init_service(App::new().app_data(actix_web::web::Data::new(data)).configure(configure_service)).await;

        let req = test::TestRequest::get().uri("/callback/?code=abc&state=xyz").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

        let cookie = resp.response().cookies().find(|c| c.name() == SESSION_COOKIE).unwrap();
        assert_eq!(sessions.resolve(cookie.value()).await.as_deref(), Some("listener"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.http_only(), Some(true));
        assert!(cookie.max_age().is_some());
    }

    #[actix_web::test]
    async fn test_login_again_replaces_session() {
        let data = web_data(Arc::new(FakeSpotify::new()));
        let sessions = data.sessions.clone();
        let old = logged_in(&data).await;
        let old_id = old.value().to_string();
        let app = test::init_service(App::new().app_data(actix_web::web::Data::new(data)).configure(configure_service)).await;

        let req = test::TestRequest::get().uri("/callback/?code=abc").cookie(old).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        let new = resp.response().cookies().find(|c| c.name() == SESSION_COOKIE).unwrap();
        assert_ne!(new.value(), old_id);
        assert!(sessions.resolve(&old_id).await.is_none());
        assert_eq!(sessions.resolve(new.value()).await.as_deref(), Some("listener"));
        assert_eq!(sessions.count().await, 1);
    }

    #[actix_web::test]
    async fn test_callback_error_is_reported() {
        let data = web_data(Arc::new(FakeSpotify::new()));
        let app = test::init_service(App::new().app_data(actix_web::web::Data::new(data)).configure(configure_service)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/callback/?error=access_denied").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/callback/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_expired_token_redirects_to_authorize() {
        let api = Arc::new(FakeSpotify::new());
        let data = web_data(api.clone());
        let cookie = logged_in(&data).await;
        let app = test::init_service(App::new().app_data(actix_web::web::Data::new(data)).configure(configure_service)).await;

        api.set_playing(Playing::Expired);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").cookie(cookie).to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap();
        assert!(location.starts_with("https://accounts.spotify.com/authorize?"));
    }

    #[actix_web::test]
    async fn test_logout_closes_session() {
        let data = web_data(Arc::new(FakeSpotify::new()));
        let sessions = data.sessions.clone();
        let cookie = logged_in(&data).await;
        let session_id = cookie.value().to_string();
        let app = test::init_service(App::new().app_data(actix_web::web::Data::new(data)).configure(configure_service)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/logout/").cookie(cookie).to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert!(sessions.resolve(&session_id).await.is_none());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/logout/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
