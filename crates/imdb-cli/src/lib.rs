//! IMDb Movie Star Search command-line front end
//!
//! Interactive prompts, the filmography listing and the run flow on top of
//! `imdb-core`. The `imdb-search` binary wires these to stdin and stdout.

pub mod app;
pub mod config;
pub mod logger;
pub mod present;
pub mod prompt;

pub use app::{App, Outcome, RunError};
pub use config::CliConfig;
pub use prompt::Prompter;
