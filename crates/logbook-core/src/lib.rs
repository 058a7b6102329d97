//! Logbook Core - Core library for changelog generation
//!
//! This crate provides the error taxonomy and the project manifest
//! configuration shared by the other logbook crates.

pub mod config;
pub mod error;

pub use config::{load_project_config, ProjectConfig, TitleMap};
pub use error::{LogbookError, Result};
