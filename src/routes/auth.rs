use crate::{
    auth::{
        generate_token, hash_password, verify_password, AuthResponse, AuthenticatedUser,
        LoginRequest, RegisterRequest,
    },
    config::Config,
    error::AppError,
    models::ApiResponse,
    store::UserStore,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

/// Register a new user
///
/// Creates a new account and returns a session token alongside the public
/// profile. Username and email must both be unused.
#[post("/register")]
pub async fn register(
    users: web::Data<UserStore>,
    config: web::Data<Config>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    let (username, email, password) = register_data.fields()?;

    let password_hash = hash_password(password)?;
    // The duplicate check happens inside the store, under its lock.
    let user = users.create(username, email, &password_hash)?;

    let token = generate_token(&user, &config.jwt_secret)?;
    log::info!("registered user '{}'", user.username);

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        AuthResponse {
            token,
            user: user.profile(),
        },
        "User registered successfully",
    )))
}

/// Login
///
/// Authenticates by username or email. An unknown identifier and a wrong
/// password are deliberately reported identically.
#[post("/login")]
pub async fn login(
    users: web::Data<UserStore>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let (identifier, password) = login_data.fields()?;

    let user = users
        .find_by_username_or_email(identifier)
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash)? {
        log::warn!("failed login attempt for '{}'", identifier);
        return Err(AppError::InvalidCredentials);
    }

    let token = generate_token(&user, &config.jwt_secret)?;
    log::info!("user '{}' logged in", user.username);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        AuthResponse {
            token,
            user: user.profile(),
        },
        "Login successful",
    )))
}

/// Identity check for an existing session token.
///
/// Returns 404 for a verified token whose user no longer exists in this
/// process (a token issued before a restart).
#[get("/me")]
pub async fn me(
    users: web::Data<UserStore>,
    auth: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user = users
        .find_by_id(auth.user_id())
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        json!({ "user": user.profile() }),
        "Authenticated user",
    )))
}
