//! Interactive member registry entry point.
//!
//! # Responsibility
//! - Parse configuration, start logging, open the single connection.
//! - Pick the terminal prompt for interactive stdin, line prompts otherwise.
//! - Run the controller and map the outcome to an exit code.

mod command;
mod config;
mod controller;
mod prompt;
mod terminal;
mod view;

use clap::Parser;
use config::{Backend, Config};
use controller::Controller;
use log::{debug, error};
use prompt::{OperatorPrompt, Prompter};
use registry_core::db::{open_db, open_db_in_memory};
use registry_core::{
    init_logging, logging_status, MemberRepository, RegistryService, SqliteMemberRepository,
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use terminal::TerminalPrompt;

fn main() -> ExitCode {
    let config = Config::parse();

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    if let Some((level, log_dir)) = logging_status() {
        debug!(
            "event=startup module=cli status=ok level={} log_dir={}",
            level,
            log_dir.display()
        );
    }

    let opened = match config.backend() {
        Backend::File(path) => open_db(path),
        Backend::Memory => open_db_in_memory(),
    };
    let conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open member database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let repo = match SqliteMemberRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            error!("event=startup module=cli status=error error={err}");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let service = RegistryService::new(repo);
    let terminal = if io::stdin().is_terminal() {
        TerminalPrompt::stdout()
    } else {
        None
    };
    match terminal {
        Some(prompt) => run_session(service, prompt),
        None => run_session(service, Prompter::new(io::stdin().lock(), io::stdout())),
    }
}

fn run_session<R: MemberRepository, P: OperatorPrompt>(
    service: RegistryService<R>,
    prompt: P,
) -> ExitCode {
    match Controller::new(service, prompt).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_end module=cli status=error error={err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
