use std::env;
use std::process;
use fnt2fontdef::cli::{get_help_message, get_input_path, parse_args, Command};
use fnt2fontdef::converter::batch_process;
use fnt2fontdef::utils::logging;
use fnt2fontdef::{ConversionJob, Error, Result};
use log::debug;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Error::Config(_) = e {
            eprintln!("Run with --help for usage.");
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = parse_args(env::args().skip(1))?;
    let config = cli.config;
    logging::init(&config);

    debug!("Debug mode enabled");
    debug!("Flip Y: {}", config.flip_y);

    match cli.command {
        Command::Help => {
            println!("{}", get_help_message());
        }
        Command::Batch(batch_file) => {
            batch_process(&config, &batch_file)?;
        }
        Command::Convert {
            input,
            output,
            font_name,
            image_file,
        } => {
            let input = get_input_path(input)?;
            let mut job = ConversionJob::from_input(input);
            if let Some(output) = output {
                job = job.with_output(output);
            }
            if let Some(font_name) = font_name {
                job = job.with_font_name(font_name);
            }
            if let Some(image_file) = image_file {
                job = job.with_image_file(image_file);
            }

            let report = job.run(&config)?;
            if report.malformed_count() > 0 {
                debug!("{} malformed lines ignored", report.malformed_count());
            }
        }
    }

    Ok(())
}
