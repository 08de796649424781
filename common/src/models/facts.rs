// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Host facts as seen by template functions.
//!
//! Functions never read ambient state. They receive a [`FactSource`] and ask
//! it for named values. [`Facts`] is the owned implementation the CLI fills
//! from `KEY=VALUE` pairs, a JSON document and `FACTER_*` environment
//! variables. Any `Fn(&str) -> Option<String>` works as a source too.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::debug;
use crate::error::FactError;

/// Prefix the host automation system uses for facts injected via environment.
pub const ENV_PREFIX: &str = "FACTER_";

/// Read access to named facts.
pub trait FactSource {
    /// Returns the current value of `key`, or `None` when it is undefined.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<F> FactSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Facts {
    values: BTreeMap<String, String>,
}

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(old) = self.values.insert(key.clone(), value) {
            debug!("fact {key} overridden (was {old:?})");
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Applies `other` on top of `self`; keys present in both take `other`'s value.
    pub fn extend(&mut self, other: Facts) {
        for (key, value) in other.values {
            self.insert(key, value);
        }
    }

    /// Splits `KEY=VALUE` at the first `=`. The value may be empty, the key may not.
    pub fn parse_pair(pair: &str) -> Result<(String, String), FactError> {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(FactError::MalformedPair(pair.to_string())),
        }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, FactError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut facts = Self::new();
        for pair in pairs {
            let (key, value) = Self::parse_pair(pair.as_ref())?;
            facts.insert(key, value);
        }
        Ok(facts)
    }

    /// Parses a flat JSON object of facts.
    ///
    /// Strings are kept verbatim, numbers and booleans are rendered the way
    /// they print, and `null` leaves the fact undefined.
    pub fn from_json_str(json: &str) -> Result<Self, FactError> {
        let Value::Object(map) = serde_json::from_str::<Value>(json)? else {
            return Err(FactError::NotAnObject);
        };

        let mut facts = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => continue,
                Value::String(s) => facts.insert(key, s),
                Value::Bool(b) => facts.insert(key, b.to_string()),
                Value::Number(n) => facts.insert(key, n.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(FactError::UnsupportedValue(key));
                }
            }
        }
        Ok(facts)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FactError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| FactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Collects `FACTER_<name>` variables, lowercasing the name.
    pub fn from_env_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut facts = Self::new();
        for (key, value) in vars {
            if let Some(name) = key.strip_prefix(ENV_PREFIX) {
                if !name.is_empty() {
                    facts.insert(name.to_lowercase(), value);
                }
            }
        }
        facts
    }

    pub fn from_env() -> Self {
        Self::from_env_vars(std::env::vars())
    }
}

impl FactSource for Facts {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for Facts
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut facts = Facts::new();
        for (key, value) in iter {
            facts.insert(key, value);
        }
        facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_splits_on_first_equals() {
        let (key, value) = Facts::parse_pair("custom=a=b").unwrap();
        assert_eq!(key, "custom");
        assert_eq!(value, "a=b");

        let (_, empty) = Facts::parse_pair("ipaddress_eth0=").unwrap();
        assert_eq!(empty, "");
    }

    #[test]
    fn pair_without_key_is_rejected() {
        assert!(matches!(
            Facts::parse_pair("=10.0.0.1"),
            Err(FactError::MalformedPair(_))
        ));
        assert!(matches!(
            Facts::parse_pair("interfaces"),
            Err(FactError::MalformedPair(_))
        ));
    }

    #[test]
    fn later_pairs_override_earlier_ones() {
        let facts = Facts::from_pairs(["interfaces=eth0", "interfaces=eth0,eth1"]).unwrap();
        assert_eq!(facts.get("interfaces"), Some("eth0,eth1"));
        assert_eq!(facts.len(), 1);
    }

    #[test]
    fn json_values_are_stringified() {
        let facts = Facts::from_json_str(
            r#"{"interfaces": "eth0,lo", "ipaddress_eth0": "10.0.0.5", "mtu_eth0": 1500, "is_virtual": false, "ipaddress_lo": null}"#,
        )
        .unwrap();

        assert_eq!(facts.lookup("interfaces").as_deref(), Some("eth0,lo"));
        assert_eq!(facts.lookup("mtu_eth0").as_deref(), Some("1500"));
        assert_eq!(facts.lookup("is_virtual").as_deref(), Some("false"));
        assert_eq!(facts.lookup("ipaddress_lo"), None);
    }

    #[test]
    fn json_must_be_a_flat_object() {
        assert!(matches!(
            Facts::from_json_str(r#"["eth0"]"#),
            Err(FactError::NotAnObject)
        ));
        assert!(matches!(
            Facts::from_json_str(r#"{"networking": {"ip": "10.0.0.5"}}"#),
            Err(FactError::UnsupportedValue(key)) if key == "networking"
        ));
        assert!(matches!(Facts::from_json_str("{"), Err(FactError::Json(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Facts::from_json_file("/nonexistent/factip/facts.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/factip/facts.json"));
    }

    #[test]
    fn env_vars_are_filtered_and_lowercased() {
        let vars = vec![
            ("FACTER_IPADDRESS_ETH0".to_string(), "10.0.0.5".to_string()),
            ("FACTER_".to_string(), "ignored".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
        ];
        let facts = Facts::from_env_vars(vars);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts.get("ipaddress_eth0"), Some("10.0.0.5"));
    }

    #[test]
    fn closures_are_fact_sources() {
        let source = |key: &str| (key == "interfaces").then(|| "eth0".to_string());
        assert_eq!(source.lookup("interfaces").as_deref(), Some("eth0"));
        assert_eq!(source.lookup("ipaddress_eth0"), None);
    }

    #[test]
    fn extend_prefers_incoming_values() {
        let mut base: Facts = [("interfaces", "eth0"), ("ipaddress_eth0", "10.0.0.5")]
            .into_iter()
            .collect();
        base.extend([("ipaddress_eth0", "10.0.0.9")].into_iter().collect());
        assert_eq!(base.get("ipaddress_eth0"), Some("10.0.0.9"));
        assert_eq!(base.get("interfaces"), Some("eth0"));
    }
}
