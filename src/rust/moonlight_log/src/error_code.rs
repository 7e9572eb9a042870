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

/// Setup Error Codes
///
/// Logging operations never fail; these only cover sink installation
/// and parsing of user-supplied names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// Process sink was already installed or initialized
    SinkAlreadyInstalled,

    /// Severity name not recognized
    UnknownSeverity(String),

    /// Sink backend name not recognized
    UnknownBackend(String),

    /// Command line arguments could not be parsed
    InvalidArguments(String),
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorCode::SinkAlreadyInstalled => write!(f, "log sink already installed"),
            ErrorCode::UnknownSeverity(name) => write!(f, "unknown severity: {name}"),
            ErrorCode::UnknownBackend(name) => write!(f, "unknown backend: {name}"),
            ErrorCode::InvalidArguments(reason) => write!(f, "invalid arguments: {reason}"),
        }
    }
}

impl core::error::Error for ErrorCode {}
