// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Wires the `tracing` events emitted through `factip_common`'s macros to stderr.
//!
//! Events tagged with the `factip::print` target are decorated output and are
//! written raw. Everything else gets a coloured status symbol:
//!
//! * `[?]` debug traces (only with `-v` or `RUST_LOG`)
//! * `[»]` info, tagged or not
//! * `[*]` warnings
//! * `[-]` errors

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const PRINT_TARGET: &str = "factip::print";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set. Without `-v` only warnings, errors and
/// decorated output get through.
pub fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn,factip::print=info",
        _ => "debug",
    };

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let formatting_layer = tracing_subscriber::fmt::layer()
        .event_format(FactipFormatter)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(formatting_layer)
        .init();
}

pub struct FactipFormatter;

impl<S, N> FormatEvent<S, N> for FactipFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut visitor = RawVisitor::new(writer.by_ref());
            event.record(&mut visitor);
            return writeln!(writer);
        }

        let (symbol, color_func) = level_symbol(meta.level());

        write!(writer, "{} ", color_func(symbol.into()))?;

        let mut output_visitor = OutputVisitor::new(writer.by_ref());
        event.record(&mut output_visitor);

        writeln!(writer)
    }
}

type Paint = fn(ColoredString) -> ColoredString;

/// Status symbol for an event. Info events are plain status lines whether or
/// not they came through the `info!` wrapper.
fn level_symbol(level: &Level) -> (&'static str, Paint) {
    match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[»]", |s| s.cyan().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}

struct OutputVisitor<'a> {
    writer: Writer<'a>,
}

impl<'a> OutputVisitor<'a> {
    fn new(writer: Writer<'a>) -> Self {
        Self { writer }
    }
}

impl Visit for OutputVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "status" {
            return;
        }

        if field.name() == "message" {
            let _ = write!(self.writer, "{:?}", value);
        } else {
            let _ = write!(self.writer, " {}={:?}", field.name().italic(), value);
        }
    }
}

struct RawVisitor<'a> {
    writer: Writer<'a>,
}

impl<'a> RawVisitor<'a> {
    fn new(writer: Writer<'a>) -> Self {
        Self { writer }
    }
}

impl Visit for RawVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "raw_msg" {
            let _ = write!(self.writer, "{:?}", value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            let _ = write!(self.writer, "{}", value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_info_event_gets_the_status_symbol() {
        let (symbol, _) = level_symbol(&Level::INFO);
        assert_eq!(symbol, "[»]");
    }

    #[test]
    fn levels_have_distinct_symbols() {
        let symbols: Vec<&str> = [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR]
            .iter()
            .map(|level| level_symbol(level).0)
            .collect();
        assert_eq!(symbols, ["[ ]", "[?]", "[»]", "[*]", "[-]"]);
    }
}
