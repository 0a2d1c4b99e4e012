//! Typed client for the weeb.sh image API.
//! The CLI frontend is a thin caller of this crate.

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod models;
pub mod query;

pub use crate::client::WeebClient;
pub use crate::config::Config;
pub use crate::credential::{Credential, TokenType};
pub use crate::error::{Error, Result};
pub use crate::models::*;
pub use crate::query::RandomImageQuery;
