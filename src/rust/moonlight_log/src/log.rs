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

//! Formatting macros.
//! Proxies for the process-wide `info`, `warning` and `severe` operations.

/// Log informational message built from format arguments.
#[clippy::format_args]
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => ($crate::info(&::std::format!($($arg)+)));
}

/// Log warning message built from format arguments.
#[clippy::format_args]
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => ($crate::warning(&::std::format!($($arg)+)));
}

/// Log error-level message built from format arguments.
#[clippy::format_args]
#[macro_export]
macro_rules! severe {
    ($($arg:tt)+) => ($crate::severe(&::std::format!($($arg)+)));
}
