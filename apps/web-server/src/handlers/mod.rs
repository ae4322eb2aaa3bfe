//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(posts::FORM_LIMIT))
        .route("/", web::get().to(posts::browse))
        .route(r"/post/{id:\d+}", web::get().to(posts::read))
        .service(
            web::resource("/post/add")
                .route(web::get().to(posts::add))
                .route(web::post().to(posts::add)),
        )
        .service(
            web::resource(r"/post/edit/{id:\d+}")
                .route(web::get().to(posts::edit))
                .route(web::post().to(posts::edit)),
        )
        .service(
            web::resource(r"/post/delete/{id:\d+}")
                .route(web::get().to(posts::delete))
                .route(web::post().to(posts::delete)),
        )
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)))
        .default_service(web::to(not_found));
}

async fn not_found() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::NotFound("No route matches this path".to_string()))
}
