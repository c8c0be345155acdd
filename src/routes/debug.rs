use crate::models::{ApiResponse, DebugUser};
use crate::store::UserStore;
use actix_web::{get, web, HttpResponse, Responder};

/// Unauthenticated listing of registered accounts, for local development.
///
/// Registered only when `Config::expose_debug_routes` is set: the route
/// reveals which usernames and emails exist. The entries carry a
/// `hasPassword` flag but never hash material.
#[get("/users")]
pub async fn list_users(users: web::Data<UserStore>) -> impl Responder {
    let listing: Vec<DebugUser> = users.all().iter().map(DebugUser::from).collect();
    HttpResponse::Ok().json(ApiResponse::ok(listing, "Registered users"))
}
