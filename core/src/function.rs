// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Named helpers callable from configuration templates.
//!
//! The host system evaluates a template, meets a call like
//! `find_ip_in_subnet("10.0.0.0/24")`, and dispatches it by name with
//! positional string arguments and the node's facts.

use std::collections::BTreeMap;

use factip_common::debug;
use factip_common::error::FunctionError;
use factip_common::models::facts::FactSource;

use crate::subnet_lookup::FindIpInSubnet;

/// A function that produces a value for template substitution.
pub trait TemplateFunction {
    fn name(&self) -> &'static str;

    /// One-line description shown in listings.
    fn doc(&self) -> &'static str;

    fn call(&self, args: &[String], facts: &dyn FactSource) -> Result<String, FunctionError>;
}

/// Functions available for dispatch, keyed by name.
pub struct Registry {
    functions: BTreeMap<&'static str, Box<dyn TemplateFunction>>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// Every function this crate ships.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(FindIpInSubnet));
        registry
    }

    /// Replaces any function already registered under the same name.
    pub fn register(&mut self, function: Box<dyn TemplateFunction>) {
        let name = function.name();
        if self.functions.insert(name, function).is_some() {
            debug!("function {name} re-registered");
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn TemplateFunction, FunctionError> {
        self.functions
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FunctionError::UnknownFunction(name.to_string()))
    }

    pub fn call(
        &self,
        name: &str,
        args: &[String],
        facts: &dyn FactSource,
    ) -> Result<String, FunctionError> {
        debug!("calling {name} with {} argument(s)", args.len());
        self.get(name)?.call(args, facts)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn TemplateFunction> + '_ {
        self.functions
            .values()
            .map(|f| -> &dyn TemplateFunction { f.as_ref() })
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
