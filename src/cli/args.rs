use std::path::PathBuf;
use crate::error::{Error, Result};
use crate::models::Config;

/// What the user asked the binary to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Convert one file; unset options fall back to names derived from the input
    Convert {
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        font_name: Option<String>,
        image_file: Option<String>,
    },
    Batch(PathBuf),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Config,
    pub command: Command,
}

fn required_value<I: Iterator<Item = String>>(args: &mut I, option: &str, what: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::Config(format!("{} option requires {}", option, what)))
}

/// Parse command line arguments, without the program name
pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config = Config::default();
    let mut help = false;
    let mut batch = None;
    let mut input = None;
    let mut output = None;
    let mut font_name = None;
    let mut image_file = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => help = true,
            "--debug" => config.debug_mode = true,
            "--flip-y" => config.flip_y = true,
            "-o" | "--output" => {
                output = Some(PathBuf::from(required_value(&mut args, &arg, "a file path")?));
            }
            "--name" => font_name = Some(required_value(&mut args, &arg, "a font name")?),
            "--image" => image_file = Some(required_value(&mut args, &arg, "a file name")?),
            "--batch" => {
                batch = Some(PathBuf::from(required_value(&mut args, &arg, "a file path")?));
            }
            other if other.starts_with('-') => {
                return Err(Error::Config(format!("Unknown option '{}'", other)));
            }
            other => {
                if input.is_some() {
                    return Err(Error::Config(format!("Unexpected argument '{}'", other)));
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let command = if help {
        Command::Help
    } else if let Some(batch_file) = batch {
        Command::Batch(batch_file)
    } else {
        Command::Convert {
            input,
            output,
            font_name,
            image_file,
        }
    };

    Ok(CliArgs { config, command })
}

/// Get the help message for command-line usage
pub fn get_help_message() -> String {
    r#"fnt2fontdef - Convert BMFont text .fnt files into .fontdef glyph tables

USAGE:
    fnt2fontdef [OPTIONS] [INPUT]

ARGS:
    <INPUT>    Path to the .fnt file (asked for when omitted)

OPTIONS:
    -h, --help              Show this help message
    --debug                 Enable debug output
    --flip-y                Move the glyph origin from top-left to bottom-left
    -o, --output <FILE>     Output path (default: INPUT with a .fontdef extension)
    --name <NAME>           Font name in the output (default: INPUT file name)
    --image <FILE>          Texture source in the output (default: INPUT name + .png)
    --batch <FILE>          Convert every .fnt file listed in a file

Batch files list one conversion per line as `<fnt> [name] [image]`.
Blank lines and lines starting with '#' are ignored.
"#.to_string()
}
