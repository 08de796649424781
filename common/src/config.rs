// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

/// Runtime options for a single `factip` invocation.
///
/// Built from the command line, it tells the front end how much to say and
/// where facts may come from. The lookup functions themselves never read it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging detail.
    ///
    /// * **0** (Default): warnings and errors only.
    /// * **1+**: debug traces of every lookup step.
    pub verbosity: u8,

    /// Controls how much decoration surrounds the output.
    ///
    /// * **0** (Default): headers and aligned key/value lines.
    /// * **1+**: raw values only, suitable for shell substitution.
    pub quiet: u8,

    /// Reads `FACTER_*` environment variables as facts.
    pub env_facts: bool,
}
