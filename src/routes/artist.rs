use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse, Responder};
use crate::entities::album::{AlbumCategories, DisplayMode};
use crate::routes::render::{albums_categories_page, albums_chronological_page, artist_images_page};
use crate::routes::{provider_failure, AccountContext, WebData};

#[get("/artist/{artist_id}")]
pub async fn artist_images(path: web::Path<String>, context: AccountContext, data: web::Data<WebData>) -> impl Responder {
    let artist_id = path.into_inner();

    match data.spotify.artist_images(&context.account, &artist_id).await {
        Ok(images) => HttpResponse::Ok().content_type(ContentType::html()).body(artist_images_page(&images)),
        Err(err) => provider_failure(err, &data.config)
    }
}

#[get("/artist/{artist_id}/albums/")]
pub async fn artist_albums_default(path: web::Path<String>, context: AccountContext, data: web::Data<WebData>) -> impl Responder {
    render_albums(&path.into_inner(), DisplayMode::Categories, &context, &data).await
}

#[get("/artist/{artist_id}/albums/{display_type}")]
pub async fn artist_albums(path: web::Path<(String, String)>, context: AccountContext, data: web::Data<WebData>) -> impl Responder {
    let (artist_id, display_type) = path.into_inner();

    render_albums(&artist_id, DisplayMode::from_segment(&display_type), &context, &data).await
}

async fn render_albums(artist_id: &str, mode: DisplayMode, context: &AccountContext, data: &WebData) -> HttpResponse {
    let albums = match data.spotify.discography(&context.account, artist_id).await {
        Ok(albums) => albums,
        Err(err) => return provider_failure(err, &data.config)
    };

    let html = match mode {
        DisplayMode::Categories => albums_categories_page(artist_id, &AlbumCategories::from_albums(&albums)),
        DisplayMode::Chronological => albums_chronological_page(artist_id, &albums)
    };

    HttpResponse::Ok().content_type(ContentType::html()).body(html)
}
