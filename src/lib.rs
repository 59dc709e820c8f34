pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod logging;
pub mod rewrite;
pub mod ui;

pub use error::{RelengError, Result};
