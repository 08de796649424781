// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::FunctionError;

/// A CIDR network parsed from a lookup argument.
///
/// Host bits in the address part are allowed (`10.0.0.7/24`) and a bare
/// address is read as a single-host network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subnet {
    network: IpNetwork,
}

impl Subnet {
    pub fn parse(spec: &str) -> Result<Self, FunctionError> {
        let network = IpNetwork::from_str(spec).map_err(|e| FunctionError::InvalidSubnet {
            spec: spec.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { network })
    }

    /// Addresses of the other family are never contained.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.network.contains(*ip)
    }

    /// Containment test against an address as it appears in a fact value.
    ///
    /// Host facts sometimes carry a prefix or netmask (`10.0.0.5/24`); such a
    /// value is contained when its network address is. Anything that is not
    /// an address or network fails with [`FunctionError::AddressEvaluation`].
    pub fn contains_str(&self, addr: &str) -> Result<bool, FunctionError> {
        let value = IpNetwork::from_str(addr).map_err(|_| FunctionError::AddressEvaluation)?;
        Ok(self.contains(&value.network()))
    }
}

impl FromStr for Subnet {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.network(), self.network.prefix())
    }
}
