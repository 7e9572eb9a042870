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

//! # Moonlight logging facade
//!
//! Three operations, [`info`], [`warning`] and [`severe`], forward a message
//! with the fixed [`TAG`] to a [`LogSink`] at the matching [`Severity`].
//!
//! The process-wide sink is injected once with [`install`]. Without it the
//! first call settles on the default sink: [`LogCrateSink`] with the
//! `logging` feature (default), [`StderrSink`] otherwise.
//!
//! ```
//! use moonlight_log::prelude::*;
//!
//! let sink = RecordingSink::new();
//! install(Box::new(sink.clone())).unwrap();
//!
//! info("Connected");
//! moonlight_log::warning!("Retry {}/{}", 3, 5);
//!
//! let records = sink.records();
//! assert_eq!(records[0], LogRecord::new(Severity::Info, TAG, "Connected"));
//! assert_eq!(records[1].message, "Retry 3/5");
//! ```
//!
//! Hosts preferring injection over global state can own a [`LogFacade`]
//! directly.

mod error_code;
mod log;
mod log_facade;
mod log_mock;
mod log_sink;
mod severity;

pub use error_code::ErrorCode;
pub use log_facade::{emit, info, install, severe, warning, LogFacade, TAG};
pub use log_mock::{LogRecord, RecordingSink};
#[cfg(feature = "logging")]
pub use log_sink::LogCrateSink;
#[cfg(feature = "tracing")]
pub use log_sink::TracingSink;
pub use log_sink::{LogSink, StderrSink};
pub use severity::Severity;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error_code::ErrorCode;
    pub use crate::log_facade::{emit, info, install, severe, warning, LogFacade, TAG};
    pub use crate::log_mock::{LogRecord, RecordingSink};
    #[cfg(feature = "logging")]
    pub use crate::log_sink::LogCrateSink;
    #[cfg(feature = "tracing")]
    pub use crate::log_sink::TracingSink;
    pub use crate::log_sink::{LogSink, StderrSink};
    pub use crate::severity::Severity;
}
