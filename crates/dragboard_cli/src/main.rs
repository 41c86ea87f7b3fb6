//! Terminal host for the project board.
//!
//! # Responsibility
//! - Assemble one board from environment configuration.
//! - Feed stdin lines to the shell until `quit` or end of input.

mod command;
mod shell;

use dragboard_core::{core_version, init_logging, BoardConfig};
use log::info;
use shell::{summary, Flow, Shell};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("dragboard: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&config.logging()) {
        eprintln!("dragboard: logging disabled: {err}");
    }

    let mut shell = match Shell::new(&config) {
        Ok(shell) => shell,
        Err(err) => {
            eprintln!("dragboard: failed to mount board: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut shell) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dragboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(shell: &mut Shell) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "dragboard {} (type `help`)", core_version())?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };
        if shell.execute(command, &mut stdout)? == Flow::Quit {
            break;
        }
        writeln!(stdout, "[{}]", summary(shell.board()))?;
    }

    info!(
        "event=board_exit module=cli status=ok projects={}",
        shell.board().store().len()
    );
    Ok(())
}
