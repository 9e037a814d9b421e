//! yamldeck CLI - Command-line interface library
//!
//! Loads a YAML deck description and writes it out as a PPTX presentation.
//!
//! # Library Usage
//!
//! ```ignore
//! use yamldeck_cli::generate_command;
//!
//! generate_command(Path::new("deck.yaml"), Path::new("deck.pptx"))?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Read ./test.yaml, write ./output/todo-makethisavariable.pptx
//! yamldeck
//!
//! # Explicit paths, debug logging
//! yamldeck --config talk.yaml --output talk.pptx --verbose
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{generate_command, run_cli, Cli, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};
