// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)] // Allow multiple versions from transitive dependencies
#![allow(clippy::cargo_common_metadata)] // Metadata is inherited from workspace

#[macro_use]
extern crate tracing;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter,
    fmt::layer,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub mod screen;
pub mod session;
pub mod term;

use ted_buffer::storage;
use ted_common::{args::Args, config::load_config, escape};

use crate::session::Session;

#[allow(clippy::too_many_lines)]
fn main() {
    // use env for filtering
    // example
    // RUST_LOG=none,ted=debug cargo run

    let args = Args::parse(std::env::args()).unwrap_or_else(|_| {
        process::exit(1);
    });

    let default_level = if args.show_all_debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if args.write_logs_to_file {
        let file_appender = match RollingFileAppender::builder()
            .rotation(Rotation::HOURLY) // rotate log files once every hour
            .max_log_files(2)
            .filename_prefix("ted")
            .filename_suffix("log")
            .build(log_dir())
        {
            Ok(appender) => appender,
            Err(e) => {
                eprintln!("Failed to create file appender: {e}");
                process::exit(1);
            }
        };
        subscriber
            .with(layer().with_ansi(false).with_writer(file_appender))
            .init();
    } else {
        // stdout IS the editor surface; anything printed there while the
        // session runs corrupts the display. Without the file appender,
        // logs go nowhere.
        subscriber.with(layer().with_writer(io::sink)).init();
    }

    info!("Starting ted");

    let cfg = match load_config(None) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("Failed to load config: {:#}", err);
            process::exit(1);
        }
    };

    debug!("Loaded config: {:#?}", cfg);

    // An explicitly named file must load; the scratch file may not exist
    // yet and starts empty.
    let (path, doc) = match args.file {
        Some(file) => {
            let path = PathBuf::from(file);
            let doc = storage::load_document(&path).unwrap_or_else(|err| {
                die_before_session(&format!("cannot open {}: {err:#}", path.display()))
            });
            (path, doc)
        }
        None => {
            let path = cfg.scratch.resolve();
            let doc = storage::load_document_or_empty(&path).unwrap_or_else(|err| {
                die_before_session(&format!("cannot open {}: {err:#}", path.display()))
            });
            (path, doc)
        }
    };

    let viewport = term::window_size().unwrap_or_else(|err| {
        die_before_session(&format!("cannot size the terminal: {err:#}"));
    });

    let raw = match term::RawMode::enable() {
        Ok(raw) => raw,
        Err(err) => die_before_session(&format!("cannot enter raw mode: {err:#}")),
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let result = Session::new(doc, viewport, stdin, stdout, path).run();

    // Restore the terminal before any diagnostic output.
    drop(raw);

    if let Err(err) = result {
        error!("session failed: {err:#}");

        let mut out = io::stdout();
        let _ = out.write_all(escape::CLEAR_SCREEN);
        let _ = out.write_all(escape::CURSOR_HOME);
        let _ = out.write_all(escape::SHOW_CURSOR);
        let _ = out.flush();

        eprintln!("ted: {err:#}");
        process::exit(1);
    }

    info!("ted exiting cleanly");
}

/// Fatal startup error, raised before the terminal is touched: plain
/// diagnostic, non-zero exit.
fn die_before_session(message: &str) -> ! {
    error!("{message}");
    eprintln!("ted: {message}");
    process::exit(1);
}

/// Log files go to the user's local data directory when available, the
/// working directory otherwise.
fn log_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from("."),
        |base| {
            let dir = base.data_local_dir().join("ted");
            let _ = std::fs::create_dir_all(&dir);
            dir
        },
    )
}
