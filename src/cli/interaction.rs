use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::{Error, Result};

/// Use the input path from the command line, or ask for one
pub fn get_input_path(from_args: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = from_args {
        debug!("Using input file from command line: {}", path.display());
        return Ok(path);
    }

    print!("Enter the path to the .fnt file: ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let path = read_input_path(&mut stdin.lock())?;
    debug!("User input file: {}", path.display());
    Ok(path)
}

/// Read one line naming an existing file
pub fn read_input_path<R: BufRead>(reader: &mut R) -> Result<PathBuf> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    let path = Path::new(input.trim()).to_path_buf();

    if !path.is_file() {
        return Err(Error::InvalidPath(path));
    }
    Ok(path)
}
