// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # factip CLI Entry Point
//!
//! Parses the command line, installs logging, gathers facts from the
//! requested sources and dispatches to a command in `commands/`.
//!
//! This is the error boundary: any error a command returns is logged as a
//! critical failure and turned into a non-zero `ExitCode`. No partial value
//! is ever printed.

mod commands;
mod terminal;

use std::process::ExitCode;

use factip_common::{config::Config, error};

use crate::{
    commands::{CommandLine, Commands, call, facts, find, functions},
    terminal::{logging, print::Print},
};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbosity);

    let cfg = Config::from(&commands);
    let _ = Print::init(&cfg);

    let result = run(&commands, &cfg);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(commands: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    match &commands.command {
        Commands::Functions => functions::functions(),
        Commands::Facts => facts::facts(&facts::gather(commands, cfg)?),
        Commands::Find { subnet } => find::find(subnet, &facts::gather(commands, cfg)?),
        Commands::Call { function, args } => {
            call::call(function, args, &facts::gather(commands, cfg)?)
        }
    }
}
