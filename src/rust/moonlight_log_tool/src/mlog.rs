// Copyright (c) 2025 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0

//! Emit a single message through the Moonlight logging facade.

use core::str::FromStr;
use moonlight_log::prelude::*;
use std::ffi::OsString;

const HELP: &str = "\
mlog - emit a message through the Moonlight logging facade

USAGE:
  mlog [OPTIONS] [--] <MESSAGE>...

OPTIONS:
  -s, --severity <SEVERITY>  info, warning or severe [default: info]
  -b, --backend <BACKEND>    log, tracing or stderr [default: log]
  -h, --help                 Print help
  --                         Take every following word as message

ENVIRONMENT:
  RUST_LOG                   Filter for the `log` backend [default: info]
";

/// Sink backend selected on command line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Backend {
    Log,
    Tracing,
    Stderr,
}

impl FromStr for Backend {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(Backend::Log),
            "tracing" => Ok(Backend::Tracing),
            "stderr" => Ok(Backend::Stderr),
            _ => Err(ErrorCode::UnknownBackend(s.to_string())),
        }
    }
}

/// Parsed command line.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Emit {
        severity: Severity,
        backend: Backend,
        message: String,
    },
}

fn invalid_arguments(cause: pico_args::Error) -> ErrorCode {
    ErrorCode::InvalidArguments(cause.to_string())
}

/// Convert message words to UTF-8.
fn to_words(raw: Vec<OsString>) -> Result<Vec<String>, ErrorCode> {
    raw.into_iter()
        .map(|word| {
            word.into_string()
                .map_err(|w| ErrorCode::InvalidArguments(format!("non UTF-8 argument: {w:?}")))
        })
        .collect()
}

fn parse_args(mut raw: Vec<OsString>) -> Result<Command, ErrorCode> {
    // Words after `--` are message text, never options.
    let trailing = match raw.iter().position(|arg| arg.as_os_str() == "--") {
        Some(index) => {
            let trailing = raw.split_off(index + 1);
            raw.pop();
            trailing
        }
        None => Vec::new(),
    };

    let mut args = pico_args::Arguments::from_vec(raw);

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    // Parsed as strings, so unknown names surface as `ErrorCode` variants.
    let severity = match args
        .opt_value_from_str::<_, String>(["-s", "--severity"])
        .map_err(invalid_arguments)?
    {
        Some(name) => name.parse()?,
        None => Severity::Info,
    };
    let backend = match args
        .opt_value_from_str::<_, String>(["-b", "--backend"])
        .map_err(invalid_arguments)?
    {
        Some(name) => name.parse()?,
        None => Backend::Log,
    };

    let mut words = to_words(args.finish())?;
    if let Some(option) = words.iter().find(|w| w.starts_with('-') && w.len() > 1) {
        return Err(ErrorCode::InvalidArguments(format!("unknown option: {option}")));
    }
    words.extend(to_words(trailing)?);

    Ok(Command::Emit {
        severity,
        backend,
        message: words.join(" "),
    })
}

/// Set up backend output and return sink forwarding to it.
fn init_backend(backend: Backend) -> Result<Box<dyn LogSink>, String> {
    let sink: Box<dyn LogSink> = match backend {
        Backend::Log => {
            let mut builder = env_logger::Builder::new();
            match std::env::var("RUST_LOG") {
                Ok(filter) => builder.parse_filters(&filter),
                Err(_) => builder.filter_level(log::LevelFilter::Info),
            };
            builder.try_init().map_err(|e| e.to_string())?;
            Box::new(LogCrateSink)
        }
        Backend::Tracing => {
            let subscriber = tracing_subscriber::FmtSubscriber::builder()
                .with_max_level(tracing::Level::TRACE)
                .with_writer(std::io::stderr)
                .json()
                .finish();
            tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())?;
            Box::new(TracingSink)
        }
        Backend::Stderr => Box::new(StderrSink),
    };

    Ok(sink)
}

fn main() -> Result<(), String> {
    let raw_arguments: Vec<OsString> = std::env::args_os().skip(1).collect();

    match parse_args(raw_arguments).map_err(|e| e.to_string())? {
        Command::Help => print!("{HELP}"),
        Command::Emit {
            severity,
            backend,
            message,
        } => {
            install(init_backend(backend)?).map_err(|e| e.to_string())?;
            emit(severity, &message);
        }
    }

    Ok(())
}
