// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use factip_common::models::facts::Facts;
use factip_core::subnet_lookup;

use crate::terminal::{
    colors,
    print::{self, Print},
};

pub fn find(subnet: &str, facts: &Facts) -> anyhow::Result<()> {
    let interfaces = subnet_lookup::interfaces_fact(facts)?;

    let found = subnet_lookup::resolve_ip_in_subnet(subnet, &interfaces, facts)?;

    if Print::is_quiet() {
        println!("{}", found.address);
        return Ok(());
    }

    Print::header("find ip in subnet");
    print::aligned_line("Subnet", subnet);
    print::aligned_line("Interfaces", interfaces);
    match &found.interface {
        Some(name) => print::aligned_line("Interface", name.as_str().color(colors::SECONDARY)),
        None => print::aligned_line("Interface", "none, using fallback".color(colors::FALLBACK)),
    }
    Print::value("Address", &found.address);
    Print::end_of_program();
    Ok(())
}
