// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

pub mod function;
pub mod subnet_lookup;

pub use function::{Registry, TemplateFunction};
pub use subnet_lookup::{FindIpInSubnet, SubnetMatch, find_ip_in_subnet, interfaces_fact, resolve_ip_in_subnet};
