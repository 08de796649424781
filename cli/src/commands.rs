// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! Argument, flag and help text definitions live here; each command's
//! execution lives in its own submodule.
//!
//! * [`CommandLine`]: global flags, chiefly where facts come from and how
//!   much to print.
//! * [`Commands`]: the operation to run. Exactly one per invocation.

pub mod call;
pub mod facts;
pub mod find;
pub mod functions;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use factip_common::config::Config;

#[derive(Parser)]
#[command(name = "factip")]
#[command(about = "Evaluate fact-driven template functions such as find_ip_in_subnet.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Set a fact (repeatable), e.g. --fact ipaddress_eth0=10.0.0.5
    #[arg(long = "fact", value_name = "KEY=VALUE", global = true)]
    pub facts: Vec<String>,

    /// Load facts from a flat JSON object
    #[arg(long = "facts", value_name = "FILE", global = true)]
    pub facts_file: Option<PathBuf>,

    /// Read FACTER_* environment variables as facts
    #[arg(long = "env-facts", global = true)]
    pub env_facts: bool,

    /// Print bare values only (-q)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase logging detail (-v: trace every lookup step)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the node address inside a subnet
    #[command(alias = "f")]
    Find {
        #[arg(value_name = "SUBNET")]
        subnet: String,
    },

    /// Call a registered function with positional arguments
    #[command(alias = "c")]
    Call {
        #[arg(value_name = "FUNCTION")]
        function: String,

        #[arg(value_name = "ARGS", num_args(0..))]
        args: Vec<String>,
    },

    /// List registered functions
    #[command(alias = "l")]
    Functions,

    /// Show the facts visible to functions
    Facts,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            verbosity: cmd.verbosity,
            quiet: cmd.quiet,
            env_facts: cmd.env_facts,
        }
    }
}
