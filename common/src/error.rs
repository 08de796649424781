// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures raised while evaluating a template function.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("invalid subnet '{spec}': {reason}")]
    InvalidSubnet { spec: String, reason: String },

    /// Any failure of the per-interface containment test.
    ///
    /// The underlying cause is intentionally not carried.
    #[error("Unexpected error in find_ip_in_subnet custom puppet function.")]
    AddressEvaluation,

    #[error("{function}: expected {expected} argument(s), got {given}")]
    Arity {
        function: &'static str,
        expected: usize,
        given: usize,
    },

    #[error("fact '{0}' is not defined")]
    MissingFact(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),
}

/// Failures while assembling a fact set from user input.
#[derive(Debug, Error)]
pub enum FactError {
    #[error("malformed fact '{0}', expected KEY=VALUE")]
    MalformedPair(String),

    #[error("failed to read facts file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("facts file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("facts document must be a JSON object")]
    NotAnObject,

    #[error("fact '{0}' must be a string, number or boolean")]
    UnsupportedValue(String),
}
