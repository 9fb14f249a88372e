//! admin-board - admin dashboard stores over stdin/stdout
//!
//! # Examples
//!
//! ```bash
//! echo '{"op":"list_roles"}' | admin-board
//! admin-board --config-dir ./.admin --log-level debug < commands.jsonl
//! ```

use ad_cli::{Cli, CliErrorResult, Response, Session, logger};
use ad_config::Config;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliErrorResult<()> {
    let mut config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.parse().unwrap_or_else(|never| match never {});
    }

    logger::initialize(
        *config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    config.validate()?;
    config.log_summary();

    let mut session = Session::from_config(&config)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    let mut handled = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = session.handle(&line);
        write_response(&mut stdout, &response, cli.pretty)?;
        handled += 1;
    }

    info!(
        "Input closed after {} requests ({} users, {} roles)",
        handled,
        session.users().len(),
        session.roles().len()
    );
    Ok(())
}

fn write_response<W: Write>(out: &mut W, response: &Response, pretty: bool) -> CliErrorResult<()> {
    writeln!(out, "{}", response.to_line(pretty))?;
    out.flush()?;
    Ok(())
}
