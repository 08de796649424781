// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Picks the node address that lives inside a given subnet.
//!
//! The node's interface names come from the comma-separated `interfaces`
//! fact, and each interface's address from `ipaddress_<name>`. Every
//! interface is checked in order and a later match replaces an earlier one.
//! When nothing matches, the loopback fallback is returned and a warning is
//! logged.

use factip_common::error::FunctionError;
use factip_common::models::facts::FactSource;
use factip_common::models::subnet::Subnet;
use factip_common::{debug, warn};

use crate::function::TemplateFunction;

/// Returned when no interface address lies in the subnet.
pub const FALLBACK_IP: &str = "127.0.0.1";

/// Fact holding the comma-separated interface names.
pub const INTERFACES_FACT: &str = "interfaces";

const ADDRESS_FACT_PREFIX: &str = "ipaddress_";

/// Outcome of a scan over the node's interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetMatch {
    /// The selected address, or [`FALLBACK_IP`].
    pub address: String,
    /// Interface the address came from. `None` means the fallback was used.
    pub interface: Option<String>,
}

impl SubnetMatch {
    pub fn is_fallback(&self) -> bool {
        self.interface.is_none()
    }
}

pub fn address_fact_key(interface: &str) -> String {
    format!("{ADDRESS_FACT_PREFIX}{interface}")
}

/// Reads the [`INTERFACES_FACT`]; an undefined fact is an error, not an empty list.
pub fn interfaces_fact<S>(facts: &S) -> Result<String, FunctionError>
where
    S: FactSource + ?Sized,
{
    facts
        .lookup(INTERFACES_FACT)
        .ok_or_else(|| FunctionError::MissingFact(INTERFACES_FACT.to_string()))
}

/// Returns the address of the last interface in `interfaces_fact` whose
/// `ipaddress_<name>` fact lies inside `subnet_spec`.
///
/// # Errors
///
/// * [`FunctionError::InvalidSubnet`] when `subnet_spec` is not a network.
/// * [`FunctionError::AddressEvaluation`] as soon as an interface has an
///   address fact that is not an IP address, even if a later one would match.
pub fn find_ip_in_subnet<S>(
    subnet_spec: &str,
    interfaces_fact: &str,
    facts: &S,
) -> Result<String, FunctionError>
where
    S: FactSource + ?Sized,
{
    resolve_ip_in_subnet(subnet_spec, interfaces_fact, facts).map(|m| m.address)
}

/// Same scan as [`find_ip_in_subnet`], also reporting which interface won.
pub fn resolve_ip_in_subnet<S>(
    subnet_spec: &str,
    interfaces_fact: &str,
    facts: &S,
) -> Result<SubnetMatch, FunctionError>
where
    S: FactSource + ?Sized,
{
    debug!("arg[0]: {subnet_spec}");
    let subnet: Subnet = subnet_spec.parse()?;

    // No trimming: " eth1" is looked up as "ipaddress_ eth1".
    let interfaces: Vec<&str> = interfaces_fact.split(',').collect();
    debug!("interfaces: {interfaces:?}");

    let mut found = SubnetMatch {
        address: FALLBACK_IP.to_string(),
        interface: None,
    };

    for name in interfaces {
        debug!("int: {name}");
        let Some(ip) = facts.lookup(&address_fact_key(name)) else {
            debug!("ip: undefined");
            continue;
        };
        debug!("ip: {ip}");

        if subnet.contains_str(&ip)? {
            debug!("correct_ip: {ip}");
            found = SubnetMatch {
                address: ip,
                interface: Some(name.to_string()),
            };
        }
    }

    if found.is_fallback() {
        warn!("No IP on this system is in the provided subnet. Defaulting to {FALLBACK_IP}");
    }

    debug!("final_ip: {}", found.address);
    Ok(found)
}

/// `find_ip_in_subnet(subnet)` as exposed to templates.
#[derive(Debug, Default, Clone, Copy)]
pub struct FindIpInSubnet;

impl TemplateFunction for FindIpInSubnet {
    fn name(&self) -> &'static str {
        "find_ip_in_subnet"
    }

    fn doc(&self) -> &'static str {
        "Find the IP on a node's interface that is within a given subnet."
    }

    fn call(&self, args: &[String], facts: &dyn FactSource) -> Result<String, FunctionError> {
        let [subnet_spec] = args else {
            return Err(FunctionError::Arity {
                function: self.name(),
                expected: 1,
                given: args.len(),
            });
        };

        let interfaces = interfaces_fact(facts)?;
        find_ip_in_subnet(subnet_spec, &interfaces, facts)
    }
}
