// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::{fmt::Display, net::IpAddr, sync::OnceLock};

use anyhow::bail;
use colored::*;
use factip_common::config::Config;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 12;

static PRINT: OnceLock<Print> = OnceLock::new();

#[macro_export]
macro_rules! fprint {
    () => {
        $crate::fprint!("");
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: "factip::print",
            raw_msg = %format_args!($($arg)*)
        );
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub struct Print {
    q_level: u8,
}

impl Print {
    fn new(cfg: &Config) -> Self {
        Self { q_level: cfg.quiet }
    }

    pub fn init(cfg: &Config) -> anyhow::Result<()> {
        if PRINT.set(Self::new(cfg)).is_err() {
            bail!("terminal has already been initialized")
        }
        Ok(())
    }

    fn get() -> Option<&'static Self> {
        PRINT.get()
    }

    pub fn is_quiet() -> bool {
        Self::get().is_some_and(|p| p.q_level > 0)
    }

    pub fn header(msg: &str) {
        if Self::is_quiet() {
            return;
        }

        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = formatted.chars().count();

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: ColoredString = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().bright_green(),
            "─".repeat(right)
        )
        .bright_black();

        fprint!("{}", line);
    }

    /// The value a command produced. Quiet mode writes it bare to stdout.
    pub fn value(key: &str, value: &str) {
        if Self::is_quiet() {
            println!("{value}");
            return;
        }
        aligned_line(key, address_colored(value));
    }

    pub fn end_of_program() {
        if Self::is_quiet() {
            return;
        }
        fprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    }
}

pub fn address_colored(value: &str) -> ColoredString {
    match value.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => value.color(colors::IPV4_ADDR),
        Ok(IpAddr::V6(_)) => value.color(colors::IPV6_ADDR),
        Err(_) => value.color(colors::TEXT_DEFAULT),
    }
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    fprint!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    );
}
