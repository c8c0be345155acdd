//! Command-line client for the taskbox API.
//!
//! The session (token plus user profile) is persisted in a local JSON file
//! between invocations. On startup with a stored session the client
//! re-validates it against `/api/auth/me`; whenever the server answers 401 or
//! 403 the session file is discarded and the user is back to anonymous.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use taskbox::auth::AuthResponse;
use taskbox::models::{ApiResponse, Task, UserProfile};

const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug)]
enum ClientError {
    NotLoggedIn,
    SessionExpired,
    Usage(String),
    Api(String),
    Http(reqwest::Error),
    Io(std::io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::NotLoggedIn => {
                write!(f, "not logged in, run 'taskbox-client login <username> <password>' first")
            }
            ClientError::SessionExpired => {
                write!(f, "session expired or rejected, please login again")
            }
            ClientError::Usage(msg) => write!(f, "{}", msg),
            ClientError::Api(msg) => write!(f, "{}", msg),
            ClientError::Http(err) => write!(f, "request failed: {}", err),
            ClientError::Io(err) => write!(f, "session file error: {}", err),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err)
    }
}

/// The locally persisted session, the CLI analogue of the browser client's
/// localStorage entry.
#[derive(Debug, Serialize, Deserialize)]
struct Session {
    token: String,
    user: UserProfile,
}

fn session_path() -> PathBuf {
    if let Ok(path) = env::var("TASKBOX_SESSION") {
        return PathBuf::from(path);
    }
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".taskbox-session.json"),
        Err(_) => PathBuf::from(".taskbox-session.json"),
    }
}

fn load_session() -> Option<Session> {
    let raw = fs::read_to_string(session_path()).ok()?;
    serde_json::from_str(&raw).ok()
}

fn store_session(session: &Session) -> Result<(), ClientError> {
    let raw = serde_json::to_string_pretty(session)
        .map_err(|e| ClientError::Api(format!("could not encode session: {}", e)))?;
    fs::write(session_path(), raw)?;
    Ok(())
}

fn clear_session() {
    let _ = fs::remove_file(session_path());
}

/// Payload of the identity-check endpoint.
#[derive(Debug, Deserialize)]
struct MeData {
    user: UserProfile,
}

struct Api {
    http: reqwest::Client,
    base_url: String,
}

impl Api {
    fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: env::var("TASKBOX_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&json!({ "username": username, "email": email, "password": password }))
            .send()
            .await?;
        parse_public(resp).await
    }

    async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&json!({ "username": identifier, "password": password }))
            .send()
            .await?;
        parse_public(resp).await
    }

    async fn me(&self, session: &Session) -> Result<MeData, ClientError> {
        let resp = self
            .http
            .get(self.url("/api/auth/me"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        parse_protected(resp).await
    }

    async fn list_tasks(&self, session: &Session) -> Result<Vec<Task>, ClientError> {
        let resp = self
            .http
            .get(self.url("/api/tasks"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        parse_protected(resp).await
    }

    async fn get_task(&self, session: &Session, id: i32) -> Result<Task, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/tasks/{}", id)))
            .bearer_auth(&session.token)
            .send()
            .await?;
        parse_protected(resp).await
    }

    async fn create_task(
        &self,
        session: &Session,
        title: &str,
        description: &str,
    ) -> Result<Task, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/tasks"))
            .bearer_auth(&session.token)
            .json(&json!({ "title": title, "description": description }))
            .send()
            .await?;
        parse_protected(resp).await
    }

    async fn complete_task(&self, session: &Session, id: i32) -> Result<Task, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/tasks/{}", id)))
            .bearer_auth(&session.token)
            .json(&json!({ "completed": true }))
            .send()
            .await?;
        parse_protected(resp).await
    }

    async fn delete_task(&self, session: &Session, id: i32) -> Result<Task, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/tasks/{}", id)))
            .bearer_auth(&session.token)
            .send()
            .await?;
        parse_protected(resp).await
    }

    async fn health(&self) -> Result<serde_json::Value, ClientError> {
        let resp = self.http.get(self.url("/api/health")).send().await?;
        Ok(resp.json().await?)
    }
}

/// Unwraps the `{success, data, message}` envelope of a public endpoint.
async fn parse_public<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let envelope: ApiResponse<T> = resp.json().await?;
    if !envelope.success {
        return Err(ClientError::Api(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ClientError::Api("response carried no data".to_string()))
}

/// Like [`parse_public`], but a 401 or 403 discards the stored session: the
/// token is gone or no longer accepted, so the client returns to anonymous.
async fn parse_protected<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    if resp.status() == StatusCode::UNAUTHORIZED || resp.status() == StatusCode::FORBIDDEN {
        clear_session();
        return Err(ClientError::SessionExpired);
    }
    parse_public(resp).await
}

/// Loads the stored session and re-validates it against the identity-check
/// endpoint before any task operation runs.
async fn authenticated_session(api: &Api) -> Result<Session, ClientError> {
    let session = load_session().ok_or(ClientError::NotLoggedIn)?;
    api.me(&session).await?;
    Ok(session)
}

fn print_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    println!("[{}] {:>3}  {}: {}", mark, task.id, task.title, task.description);
}

fn usage() -> String {
    [
        "usage: taskbox-client <command>",
        "",
        "  register <username> <email> <password>   create an account and log in",
        "  login <username-or-email> <password>     obtain a session token",
        "  logout                                   discard the local session",
        "  whoami                                   show the authenticated user",
        "  list                                     list your tasks",
        "  show <id>                                show one task",
        "  add <title> <description>                create a task",
        "  done <id>                                mark a task completed",
        "  rm <id>                                  delete a task",
        "  health                                   check the server",
    ]
    .join("\n")
}

fn parse_id(arg: &str) -> Result<i32, ClientError> {
    arg.parse()
        .map_err(|_| ClientError::Usage(format!("'{}' is not a task id", arg)))
}

async fn run(args: Vec<String>) -> Result<(), ClientError> {
    let api = Api::new();
    let command = args.first().map(String::as_str).unwrap_or("help");

    match (command, args.len()) {
        ("register", 4) => {
            let auth = api.register(&args[1], &args[2], &args[3]).await?;
            let session = Session {
                token: auth.token,
                user: auth.user,
            };
            store_session(&session)?;
            println!("registered and logged in as {}", session.user.username);
        }
        ("login", 3) => {
            let auth = api.login(&args[1], &args[2]).await?;
            let session = Session {
                token: auth.token,
                user: auth.user,
            };
            store_session(&session)?;
            println!("logged in as {}", session.user.username);
        }
        ("logout", 1) => {
            clear_session();
            println!("logged out");
        }
        ("whoami", 1) => {
            let session = load_session().ok_or(ClientError::NotLoggedIn)?;
            let me = api.me(&session).await?;
            println!("{} <{}> (id {})", me.user.username, me.user.email, me.user.id);
        }
        ("list", 1) => {
            let session = authenticated_session(&api).await?;
            let tasks = api.list_tasks(&session).await?;
            if tasks.is_empty() {
                println!("no tasks");
            }
            for task in &tasks {
                print_task(task);
            }
        }
        ("show", 2) => {
            let session = authenticated_session(&api).await?;
            let task = api.get_task(&session, parse_id(&args[1])?).await?;
            print_task(&task);
        }
        ("add", 3) => {
            let session = authenticated_session(&api).await?;
            let task = api.create_task(&session, &args[1], &args[2]).await?;
            println!("created:");
            print_task(&task);
        }
        ("done", 2) => {
            let session = authenticated_session(&api).await?;
            let task = api.complete_task(&session, parse_id(&args[1])?).await?;
            println!("completed:");
            print_task(&task);
        }
        ("rm", 2) => {
            let session = authenticated_session(&api).await?;
            let task = api.delete_task(&session, parse_id(&args[1])?).await?;
            println!("deleted:");
            print_task(&task);
        }
        ("health", 1) => {
            let report = api.health().await?;
            println!(
                "{} (uptime {:.0}s)",
                report["message"].as_str().unwrap_or("unknown"),
                report["uptime"].as_f64().unwrap_or(0.0),
            );
        }
        ("help", _) => println!("{}", usage()),
        _ => return Err(ClientError::Usage(usage())),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
