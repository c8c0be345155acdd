#![doc = "The `taskbox` library crate."]
#![doc = ""]
#![doc = "A minimal multi-user to-do list service: JWT-authenticated REST API over"]
#![doc = "in-memory per-user task lists. This crate holds the domain models, the"]
#![doc = "stores, the auth gateway, the route handlers and the error handling; the"]
#![doc = "server binary (`main.rs`) and the CLI client (`bin/client.rs`) assemble it."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
