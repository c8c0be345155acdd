pub mod auth;
pub mod debug;
pub mod health;
pub mod tasks;

use actix_web::{web, HttpResponse, Responder, Scope};
use serde_json::json;

use crate::auth::AuthMiddleware;
use crate::config::Config;
use crate::error::AppError;

/// Builds the whole `/api` scope.
///
/// Public routes (health, register, login, the optional debug listing) sit
/// outside the auth middleware; `/auth/me` and everything under `/tasks` are
/// wrapped by it.
pub fn api_scope(config: &Config) -> Scope {
    let mut api = web::scope("/api")
        .service(health::health)
        .service(
            web::scope("/auth")
                .service(auth::register)
                .service(auth::login)
                .service(
                    web::scope("")
                        .wrap(AuthMiddleware::new(&config.jwt_secret))
                        .service(auth::me),
                ),
        )
        .service(
            web::scope("/tasks")
                .wrap(AuthMiddleware::new(&config.jwt_secret))
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );

    if config.expose_debug_routes {
        api = api.service(web::scope("/debug").service(debug::list_users));
    }
    api
}

/// Catch-all for unmatched routes; keeps the response envelope shape.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "message": "Route not found",
    }))
}

/// Reports malformed or unparsable JSON bodies as a 400 envelope instead of
/// actix's default plain-text error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::MissingField(format!("Invalid request body: {}", err)).into()
    })
}

/// A non-numeric id in the path behaves like a miss, not a parse error.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| AppError::NotFound("Task not found".into()).into())
}
