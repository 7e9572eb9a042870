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

use crate::log_sink::LogSink;
use crate::severity::Severity;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Record captured by `RecordingSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(severity: Severity, tag: &str, message: &str) -> Self {
        Self {
            severity,
            tag: tag.to_string(),
            message: message.to_string(),
        }
    }
}

/// In-memory sink keeping every record written to it.
///
/// Clones share the same storage, so one clone can be handed to the facade
/// while another is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poisoning is ignored, records pushed before a panic stay valid.
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of all records, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Remove and return all records.
    pub fn take(&self) -> Vec<LogRecord> {
        core::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl LogSink for RecordingSink {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        self.lock().push(LogRecord::new(severity, tag, message));
    }
}
