pub mod api;
pub mod catalog;
pub mod config;
mod error;
pub mod fetch;
pub mod models;
pub mod paths;
pub mod poll;
pub mod provision;
pub mod setup;

pub use error::{BootstrapError, Result};
