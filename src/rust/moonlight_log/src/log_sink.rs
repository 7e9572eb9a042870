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

use crate::severity::Severity;
use std::io::Write;
use std::sync::Arc;

/// Destination of log records.
///
/// Receives the severity, tag and message of every record emitted through
/// the facade. Writing is infallible from the caller's perspective: a sink
/// that cannot deliver a record handles that on its own.
pub trait LogSink: Send + Sync {
    /// Write a single record.
    fn write(&self, severity: Severity, tag: &str, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        (**self).write(severity, tag, message)
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        (**self).write(severity, tag, message)
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        (**self).write(severity, tag, message)
    }
}

/// Sink forwarding to the `log` crate.
/// Tag is used as the record target.
#[cfg(feature = "logging")]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogCrateSink;

#[cfg(feature = "logging")]
impl LogSink for LogCrateSink {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        log::log!(target: tag, severity.level(), "{message}");
    }
}

/// Sink forwarding to `tracing` events.
/// Tag is recorded as the `tag` field.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl LogSink for TracingSink {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        match severity {
            Severity::Info => tracing::info!(tag, "{message}"),
            Severity::Warning => tracing::warn!(tag, "{message}"),
            Severity::Severe => tracing::error!(tag, "{message}"),
        }
    }
}

/// Sink writing plain lines to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StderrSink;

impl StderrSink {
    fn format(severity: Severity, tag: &str, message: &str) -> String {
        format!("{} {tag}: {message}", severity.as_str().to_ascii_uppercase())
    }
}

impl LogSink for StderrSink {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        let line = Self::format(severity, tag, message);
        // Nowhere left to report a failed stderr write.
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }
}

/// Sink used by the process-wide facade when none was installed.
#[cfg(feature = "logging")]
pub(crate) fn default_sink() -> Box<dyn LogSink> {
    Box::new(LogCrateSink)
}

/// Sink used by the process-wide facade when none was installed.
#[cfg(not(feature = "logging"))]
pub(crate) fn default_sink() -> Box<dyn LogSink> {
    Box::new(StderrSink)
}
