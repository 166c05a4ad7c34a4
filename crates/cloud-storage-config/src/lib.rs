//! Configuration for the cloud storage store
//!
//! This crate provides:
//! - Configuration file lookup (CWD first, then home directory)
//! - Application configuration (AppConfig)
//! - The update strategy applied to the record list on a successful update

pub mod app_config;
pub mod config_file;

pub use app_config::{AppConfig, UpdateStrategy};
pub use config_file::{config_search_roots, load_config_file, load_config_file_from, CONFIG_FILE};
