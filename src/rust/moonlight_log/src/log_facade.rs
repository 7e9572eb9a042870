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

//! Severity-routing facade.
//!
//! Every record leaves with the fixed [`TAG`], the severity picked by the
//! called operation and the caller's message as-is.

use crate::error_code::ErrorCode;
use crate::log_sink::{default_sink, LogSink};
use crate::severity::Severity;
use std::sync::OnceLock;

/// Tag attached to every record.
pub const TAG: &str = "Moonlight";

/// Facade routing messages to a single sink.
pub struct LogFacade {
    sink: Box<dyn LogSink>,
}

impl LogFacade {
    pub fn new(sink: Box<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Tag attached to records, always [`TAG`].
    pub fn tag(&self) -> &'static str {
        TAG
    }

    /// Forward message at given severity.
    pub fn emit(&self, severity: Severity, message: &str) {
        self.sink.write(severity, TAG, message);
    }

    /// Forward message at informational severity.
    pub fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    /// Forward message at warning severity.
    pub fn warning(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    /// Forward message at error-level severity.
    pub fn severe(&self, message: &str) {
        self.emit(Severity::Severe, message);
    }
}

/// Process-wide facade, written once.
static PROCESS_FACADE: OnceLock<LogFacade> = OnceLock::new();

fn process_facade() -> &'static LogFacade {
    PROCESS_FACADE.get_or_init(|| LogFacade::new(default_sink()))
}

/// Install process-wide sink.
///
/// Must happen before the first logging call, which otherwise settles on the
/// default sink. Fails if a sink is already in place; that sink is kept.
pub fn install(sink: Box<dyn LogSink>) -> Result<(), ErrorCode> {
    PROCESS_FACADE
        .set(LogFacade::new(sink))
        .map_err(|_| ErrorCode::SinkAlreadyInstalled)
}

/// Forward message at given severity using process-wide sink.
pub fn emit(severity: Severity, message: &str) {
    process_facade().emit(severity, message);
}

/// Log informational message.
pub fn info(message: &str) {
    emit(Severity::Info, message);
}

/// Log warning message.
pub fn warning(message: &str) {
    emit(Severity::Warning, message);
}

/// Log error-level message.
pub fn severe(message: &str) {
    emit(Severity::Severe, message);
}
