// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use factip_common::{config::Config, info, models::facts::Facts};

use crate::{
    commands::CommandLine,
    terminal::print::{self, Print},
};

/// Builds the fact set for this run.
///
/// Sources are layered file, then environment, then `--fact` pairs, so the
/// most explicit one wins.
pub fn gather(cmd: &CommandLine, cfg: &Config) -> anyhow::Result<Facts> {
    let mut facts = Facts::new();

    if let Some(path) = &cmd.facts_file {
        let from_file = Facts::from_json_file(path)?;
        info!("{} fact(s) loaded from {}", from_file.len(), path.display());
        facts.extend(from_file);
    }

    if cfg.env_facts {
        let from_env = Facts::from_env();
        info!("{} fact(s) read from environment", from_env.len());
        facts.extend(from_env);
    }

    let from_args = Facts::from_pairs(&cmd.facts).context("parsing --fact")?;
    facts.extend(from_args);

    Ok(facts)
}

pub fn facts(facts: &Facts) -> anyhow::Result<()> {
    if Print::is_quiet() {
        println!("{}", serde_json::to_string_pretty(facts)?);
        return Ok(());
    }

    Print::header("facts");
    if facts.is_empty() {
        print::print_status("No facts defined. Use --fact, --facts or --env-facts.");
    }
    for (key, value) in facts.iter() {
        print::aligned_line(key, print::address_colored(value));
    }
    Print::end_of_program();
    Ok(())
}
