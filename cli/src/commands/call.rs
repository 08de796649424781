// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use factip_common::models::facts::Facts;
use factip_core::Registry;

use crate::terminal::print::{self, Print};

pub fn call(function: &str, args: &[String], facts: &Facts) -> anyhow::Result<()> {
    let registry = Registry::builtin();
    let value = registry.call(function, args, facts)?;

    Print::header(function);
    if !Print::is_quiet() {
        print::aligned_line("Arguments", args.join(", "));
    }
    Print::value("Result", &value);
    Print::end_of_program();
    Ok(())
}
