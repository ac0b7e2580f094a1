//! # CLI Layer
//!
//! This module is **one possible front end** for abook, not the application
//! itself. It is the only code that:
//! - parses process arguments (clap) and session lines,
//! - reads stdin and writes stdout,
//! - sets up logging,
//! - turns errors into user-facing text.
//!
//! ## Modes
//!
//! - `abook` starts an interactive session (see [`session`]).
//! - `abook <verb> [args...]` runs one verb, saves if it changed anything,
//!   and exits non-zero if the verb was rejected.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `input`: session line → [`input::Verb`] + arguments
//! - `dispatch`: verb → API call, error → message
//! - `render`: `CmdResult` → terminal text
//! - `session`: the read-eval-print loop

mod dispatch;
mod input;
mod render;
mod session;
mod setup;

use abook::error::Result;
use abook::init::{initialize, resolve_home};
use clap::Parser;
use dispatch::{input_error_message, respond_to, Response};
use input::Input;
use setup::Cli;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let home = resolve_home()?;
    let mut ctx = initialize(&home, cli.file.as_deref())?;

    if cli.command.is_empty() {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        session::run_session(&mut ctx.api, stdin.lock(), &mut io::stdout(), prompt)?;
        return Ok(ExitCode::SUCCESS);
    }

    let (response, mutates) = match Input::from_tokens(&cli.command) {
        Ok(input) => (respond_to(&mut ctx.api, &input), input.verb.mutates()),
        Err(e) => (Response::failed(input_error_message(&e)), false),
    };

    if response.ok && mutates {
        ctx.api.save()?;
    }
    render::write_result(&mut io::stdout(), &response.result)?;

    Ok(if response.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Logs go to stderr so session output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "abook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
