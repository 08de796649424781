// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod lookup;

pub mod utils {
    use std::path::PathBuf;

    use factip_common::models::facts::Facts;

    /// Facts shaped like those of a dual-homed host with a docker bridge.
    pub fn sample_host() -> Facts {
        [
            ("interfaces", "docker0,eth0,eth1,lo"),
            ("ipaddress_docker0", "172.17.0.1"),
            ("ipaddress_eth0", "10.20.0.15"),
            ("ipaddress_eth1", "192.168.56.10"),
            ("ipaddress_lo", "127.0.0.1"),
        ]
        .into_iter()
        .collect()
    }

    /// JSON facts file in the temp dir, removed on drop.
    pub struct TempFactsFile {
        pub path: PathBuf,
    }

    impl TempFactsFile {
        pub fn new(name: &str, json: &str) -> anyhow::Result<Self> {
            let path = std::env::temp_dir().join(format!(
                "factip-{}-{}.json",
                name,
                std::process::id()
            ));
            std::fs::write(&path, json)?;
            Ok(Self { path })
        }
    }

    impl Drop for TempFactsFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
