// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use factip_core::Registry;

use crate::terminal::{
    colors,
    print::{self, Print},
};

pub fn functions() -> anyhow::Result<()> {
    let registry = Registry::builtin();

    if Print::is_quiet() {
        for function in registry.iter() {
            println!("{}", function.name());
        }
        return Ok(());
    }

    Print::header("functions");
    for function in registry.iter() {
        print::print_status(format!(
            "{} {}",
            function.name().color(colors::PRIMARY),
            function.doc().color(colors::TEXT_DEFAULT)
        ));
    }
    Print::end_of_program();
    Ok(())
}
