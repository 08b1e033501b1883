// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Chronological views over captions and events.
//!
//! Nothing here owns data: every function reads borrowed collections and
//! returns a fresh view, so repeated calls over unchanged input agree.

pub mod key;
pub mod merge;
pub mod range;

pub use key::{key_of, TimeKey};
pub use merge::{merge, EntryKind, TimelineEntry};
pub use range::{filter_by_range, TimeWindow};
