use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use rectlist::prompt::{is_interactive, InquirePrompter, LinePrompter};
use rectlist::{session, utils, OutputFormat};

#[derive(Parser)]
#[command(name = "rectlist")]
#[command(about = "Describe a list of rectangles and see each one scaled by 3 about its midpoint", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    /// Output format for the report
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Read answers from a file instead of standard input
    #[arg(short, long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    input: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level depending on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let interactive = cli.input.is_none() && is_interactive();
    utils::color::init_color(interactive);

    if let Some(path) = &cli.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        return run_lines(BufReader::new(file), cli.format);
    }

    if interactive && cli.format == OutputFormat::Text {
        log::debug!("Using interactive terminal prompts");
        return session::run(&mut InquirePrompter, &mut io::stdout(), cli.format);
    }

    run_lines(io::stdin().lock(), cli.format)
}

/// Line-based session; in JSON mode the prompts go to stderr so stdout stays parseable.
fn run_lines<R: BufRead>(reader: R, format: OutputFormat) -> Result<()> {
    let console: Box<dyn Write> = match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut prompter = LinePrompter::new(reader, console);
    session::run(&mut prompter, &mut io::stdout(), format)
}
