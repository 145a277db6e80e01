//! Command-line interface handling and user interaction

mod args;
mod interaction;

pub use args::{parse_args, get_help_message, CliArgs, Command};
pub use interaction::{get_input_path, read_input_path};
