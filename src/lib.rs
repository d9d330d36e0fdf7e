// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod state;

// Re-export commonly used items
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::ClubhouseClient;
pub use config::{get_api_token, load_config, save_config, Config};
pub use error::{ClubhouseError, ClubhouseResult};
pub use models::*;
pub use state::{get_state, StateSnapshot};
