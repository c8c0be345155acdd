use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use std::time::Instant;

/// Instant the server started, for the uptime report.
pub struct ServerStart(pub Instant);

/// Health check endpoint
///
/// Reports uptime and the current timestamp alongside the usual envelope.
#[get("/health")]
pub async fn health(started: web::Data<ServerStart>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Service is up",
        "timestamp": Utc::now(),
        "uptime": started.0.elapsed().as_secs_f64(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(ServerStart(Instant::now())))
                .service(health),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], true);
        assert!(json["timestamp"].is_string());
        assert!(json["uptime"].is_number());
    }
}
