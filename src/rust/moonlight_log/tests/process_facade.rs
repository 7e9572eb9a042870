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

//! Process-wide facade with an installed recording sink.
//! Tests share one process, so each one filters records by its own messages.

use moonlight_log::prelude::*;
use std::collections::HashSet;
use std::sync::LazyLock;

static SINK: LazyLock<RecordingSink> = LazyLock::new(|| {
    let sink = RecordingSink::new();
    install(Box::new(sink.clone())).expect("Failed to install recording sink");
    sink
});

fn records_with_prefix(prefix: &str) -> Vec<LogRecord> {
    SINK.records()
        .into_iter()
        .filter(|r| r.message.starts_with(prefix))
        .collect()
}

#[test]
fn test_info_connected() {
    LazyLock::force(&SINK);
    info("Connected");

    let records = records_with_prefix("Connected");
    assert_eq!(
        records,
        vec![LogRecord::new(Severity::Info, "Moonlight", "Connected")]
    );
}

#[test]
fn test_warning_retry() {
    LazyLock::force(&SINK);
    warning("Retry 3/5");

    let records = records_with_prefix("Retry 3/5");
    assert_eq!(
        records,
        vec![LogRecord::new(Severity::Warning, "Moonlight", "Retry 3/5")]
    );
}

#[test]
fn test_severe_empty() {
    LazyLock::force(&SINK);
    severe("");

    let records: Vec<LogRecord> = SINK
        .records()
        .into_iter()
        .filter(|r| r.message.is_empty())
        .collect();
    assert_eq!(records, vec![LogRecord::new(Severity::Severe, "Moonlight", "")]);
}

#[test]
fn test_emit() {
    LazyLock::force(&SINK);
    emit(Severity::Warning, "emit: direct");

    let records = records_with_prefix("emit:");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Warning);
}

#[test]
fn test_install_twice() {
    LazyLock::force(&SINK);

    let result = install(Box::new(StderrSink));
    assert!(result.is_err_and(|e| e == ErrorCode::SinkAlreadyInstalled));

    // Installed sink stays in place.
    info("install twice: still recorded");
    assert_eq!(records_with_prefix("install twice:").len(), 1);
}

#[test]
fn test_macros() {
    LazyLock::force(&SINK);
    moonlight_log::info!("macro: info {}", 1);
    moonlight_log::warning!("macro: warning {:>3}", 2);
    let attempt = 3;
    moonlight_log::severe!("macro: severe {attempt}");

    let records = records_with_prefix("macro:");
    assert_eq!(
        records,
        vec![
            LogRecord::new(Severity::Info, TAG, "macro: info 1"),
            LogRecord::new(Severity::Warning, TAG, "macro: warning   2"),
            LogRecord::new(Severity::Severe, TAG, "macro: severe 3"),
        ]
    );
}

#[test]
fn test_concurrent_calls() {
    const THREADS: usize = 8;
    const CALLS: usize = 100;

    LazyLock::force(&SINK);
    let handles: Vec<_> = (0..THREADS)
        .map(|thread| {
            std::thread::spawn(move || {
                for call in 0..CALLS {
                    let message = format!("concurrent: {thread}:{call}");
                    match call % 3 {
                        0 => info(&message),
                        1 => warning(&message),
                        _ => severe(&message),
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = records_with_prefix("concurrent:");
    assert_eq!(records.len(), THREADS * CALLS);
    let unique: HashSet<&str> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(unique.len(), THREADS * CALLS);
    assert!(records.iter().all(|r| r.tag == TAG));
}
