#![doc = "The `kanban_api` library crate."]
#![doc = ""]
#![doc = "Users own columns, columns own cards, cards own comments. This crate holds the"]
#![doc = "domain models, the services over the SQLite pool, authentication (bcrypt + JWT),"]
#![doc = "the ownership guards, route configuration and error handling. The binary in"]
#![doc = "`main.rs` wires them into an actix-web server."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod guards;
pub mod models;
pub mod routes;
pub mod services;

pub use crate::error::AppError;
