use actix_web::{get, HttpResponse, Responder};
use crate::managers::activity::{log_activity, Action};
use crate::routes::AccountContext;

#[get("/api/track/load/")]
pub async fn track_load(context: AccountContext) -> impl Responder {
    log_activity(&context.account, Action::Reload);

    HttpResponse::Ok().finish()
}

#[get("/api/track/tick-5m/")]
pub async fn track_tick(context: AccountContext) -> impl Responder {
    log_activity(&context.account, Action::Tick5m);

    HttpResponse::Ok().finish()
}
