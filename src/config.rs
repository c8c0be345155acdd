use std::env;

/// Process-wide configuration, read from the environment once at startup and
/// passed by reference into the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Secret used to sign and verify session tokens. Constant for the
    /// process lifetime.
    pub jwt_secret: String,
    /// Origin allowed to call the API with credentials.
    pub allowed_origin: String,
    /// Registers the unauthenticated /api/debug/users listing when true.
    pub expose_debug_routes: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "taskbox-dev-secret-change-me".to_string()),
            allowed_origin: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            expose_debug_routes: env::var("DEBUG_ROUTES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    pub fn server_addr(&self) -> (String, u16) {
        (self.server_host.clone(), self.server_port)
    }
}
