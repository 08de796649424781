// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use factip_common::error::FunctionError;
use factip_common::models::facts::{FactSource, Facts};
use factip_core::subnet_lookup::{FALLBACK_IP, resolve_ip_in_subnet};
use factip_core::{Registry, find_ip_in_subnet};

use crate::utils::{TempFactsFile, sample_host};

fn call(registry: &Registry, subnet: &str, facts: &Facts) -> Result<String, FunctionError> {
    registry.call("find_ip_in_subnet", &[subnet.to_string()], facts)
}

#[test]
fn test_registry_picks_interface_per_subnet() {
    let registry = Registry::builtin();
    let facts = sample_host();

    assert_eq!(call(&registry, "10.20.0.0/16", &facts).unwrap(), "10.20.0.15");
    assert_eq!(call(&registry, "192.168.56.0/24", &facts).unwrap(), "192.168.56.10");
    assert_eq!(call(&registry, "172.16.0.0/12", &facts).unwrap(), "172.17.0.1");
}

#[test]
fn test_broad_subnet_prefers_last_listed_interface() {
    let facts = sample_host();
    let found = resolve_ip_in_subnet("0.0.0.0/0", facts.get("interfaces").unwrap(), &facts)
        .unwrap();

    assert_eq!(found.interface.as_deref(), Some("lo"));
    assert_eq!(found.address, "127.0.0.1");
    assert!(!found.is_fallback());
}

#[test]
fn test_unmatched_subnet_falls_back_to_loopback() {
    let facts = sample_host();
    let found = resolve_ip_in_subnet("203.0.113.0/24", facts.get("interfaces").unwrap(), &facts)
        .unwrap();

    assert_eq!(found.address, FALLBACK_IP);
    assert!(found.is_fallback());
}

#[test]
fn test_json_facts_file_drives_lookup() -> anyhow::Result<()> {
    let file = TempFactsFile::new(
        "lookup",
        r#"{
            "interfaces": "eth0,eth1",
            "ipaddress_eth0": "10.0.0.5",
            "ipaddress_eth1": "10.0.0.9",
            "uptime_seconds": 4200
        }"#,
    )?;

    let facts = Facts::from_json_file(&file.path)?;
    assert_eq!(facts.lookup("uptime_seconds").as_deref(), Some("4200"));
    assert_eq!(call(&Registry::builtin(), "10.0.0.0/24", &facts)?, "10.0.0.9");
    Ok(())
}

#[test]
fn test_layered_sources_override_in_order() -> anyhow::Result<()> {
    let mut facts = Facts::from_json_str(
        r#"{"interfaces": "eth0", "ipaddress_eth0": "192.168.1.1"}"#,
    )?;
    facts.extend(Facts::from_env_vars([(
        "FACTER_IPADDRESS_ETH0".to_string(),
        "10.0.0.5".to_string(),
    )]));

    assert_eq!(call(&Registry::builtin(), "10.0.0.0/24", &facts)?, "10.0.0.5");

    facts.extend(Facts::from_pairs(["ipaddress_eth0=10.0.0.77"])?);
    assert_eq!(call(&Registry::builtin(), "10.0.0.0/24", &facts)?, "10.0.0.77");
    Ok(())
}

#[test]
fn test_empty_address_fact_aborts_evaluation() {
    let mut facts = sample_host();
    facts.insert("ipaddress_docker0", "");

    let err = call(&Registry::builtin(), "10.20.0.0/16", &facts).unwrap_err();
    assert!(matches!(err, FunctionError::AddressEvaluation));
}

#[test]
fn test_invalid_subnet_aborts_evaluation() {
    let err = call(&Registry::builtin(), "10.20.0.0/40", &sample_host()).unwrap_err();
    assert!(matches!(err, FunctionError::InvalidSubnet { ref spec, .. } if spec == "10.20.0.0/40"));
}

#[test]
fn test_dual_stack_host() {
    let facts: Facts = [
        ("ipaddress_eth0", "10.0.0.5"),
        ("ipaddress_eth0_v6", "fd00:10::5"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        find_ip_in_subnet("fd00:10::/64", "eth0,eth0_v6", &facts).unwrap(),
        "fd00:10::5"
    );
    assert_eq!(
        find_ip_in_subnet("10.0.0.0/8", "eth0,eth0_v6", &facts).unwrap(),
        "10.0.0.5"
    );
}
