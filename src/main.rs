use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use chrono::Utc;
use dotenv::dotenv;
use std::time::Instant;

use taskbox::auth::hash_password;
use taskbox::config::Config;
use taskbox::models::{Task, User};
use taskbox::routes::{self, health::ServerStart};
use taskbox::store::{TaskStore, UserStore};

/// Seeds the stores the way the process has always started: two demo
/// accounts sharing the password `admin123` (hashed here, at startup) and a
/// few sample tasks. Both id counters continue above the seeded records.
fn seed_demo_data() -> (UserStore, TaskStore) {
    let password_hash = hash_password("admin123").expect("failed to hash seed password");

    let users = vec![
        User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: password_hash.clone(),
        },
        User {
            id: 2,
            username: "demo".to_string(),
            email: "demo@example.com".to_string(),
            password_hash,
        },
    ];

    let tasks = vec![
        Task {
            id: 1,
            title: "Learn Docker".to_string(),
            description: "Build containers for the apps".to_string(),
            completed: false,
            created_at: Utc::now(),
            user_id: 1,
        },
        Task {
            id: 2,
            title: "Set up the API".to_string(),
            description: "Expose the REST endpoints".to_string(),
            completed: true,
            created_at: Utc::now(),
            user_id: 1,
        },
        Task {
            id: 3,
            title: "Wire up the client".to_string(),
            description: "Point the client at the API".to_string(),
            completed: false,
            created_at: Utc::now(),
            user_id: 2,
        },
    ];

    (UserStore::with_users(users), TaskStore::with_tasks(tasks))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let bind_addr = config.server_addr();

    let (user_store, task_store) = seed_demo_data();
    log::info!("seeded demo users and tasks");

    // Shared across all workers; created once, outside the app factory.
    let users = web::Data::new(user_store);
    let tasks = web::Data::new(task_store);
    let app_config = web::Data::new(config.clone());
    let started = web::Data::new(ServerStart(Instant::now()));

    log::info!(
        "starting taskbox server on http://{}:{}",
        bind_addr.0,
        bind_addr.1
    );
    log::info!("allowed origin: {}", config.allowed_origin);
    log::info!(
        "routes: POST /api/auth/register | POST /api/auth/login | GET /api/auth/me | \
         GET /api/health | GET|POST /api/tasks | GET|PUT|DELETE /api/tasks/:id{}",
        if config.expose_debug_routes {
            " | GET /api/debug/users"
        } else {
            ""
        }
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(users.clone())
            .app_data(tasks.clone())
            .app_data(app_config.clone())
            .app_data(started.clone())
            .app_data(routes::json_config())
            .app_data(routes::path_config())
            .wrap(cors)
            .wrap(Logger::default())
            .service(routes::api_scope(&config))
            .default_service(web::route().to(routes::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
