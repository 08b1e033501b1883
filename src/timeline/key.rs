// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time keys used to order timeline entries.

use crate::models::{caption::Caption, clamp_seconds, event::Event};

/// Something that sits at a point on the video timeline.
pub trait TimeKey {
    /// Raw seconds offset as stored on the record.
    fn raw_time(&self) -> f64;

    /// Comparable key: finite and non-negative. Garbage resolves to 0.
    fn time_key(&self) -> f64 {
        clamp_seconds(self.raw_time())
    }
}

impl TimeKey for Caption {
    fn raw_time(&self) -> f64 {
        self.start
    }
}

impl TimeKey for Event {
    fn raw_time(&self) -> f64 {
        self.time
    }
}

/// Key of any timeline record.
pub fn key_of<T: TimeKey + ?Sized>(entry: &T) -> f64 {
    entry.time_key()
}
