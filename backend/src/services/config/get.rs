use actix_web::{web, HttpResponse, Responder};

use crate::config::AppConfig;

/// Actix web handler for `GET /api/config`.
pub async fn process(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(&config.client)
}
