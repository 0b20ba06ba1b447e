//! Configuration module for tubescout.
//!
//! Handles loading settings from the config file, `.env` files and the environment,
//! and cleaning up API credentials.

pub mod credentials;
mod settings;

pub use settings::{GeneralSettings, ServerMode, ServerSettings, Settings, YoutubeSettings};
