//! CLI command handlers
//!
//! Argument parsing structures, routing and one module per subcommand.

pub mod args;
pub mod commands;
pub mod router;

pub use args::{Cli, Commands};
pub use router::execute_command;
