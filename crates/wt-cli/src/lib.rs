//! Work-time countdown CLI library.
//!
//! This crate provides the CLI interface over `wt-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
