//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
///
/// Each posts resource carries a default service so that undeclared verbs
/// answer 405 with an `Allow` header instead of the router's 404.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post))
                    .default_service(web::to(posts::collection_method_not_allowed)),
            )
            .service(
                web::resource("/posts/{slug}")
                    .route(web::get().to(posts::get_post))
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post))
                    .default_service(web::to(posts::item_method_not_allowed)),
            ),
    );
}
