// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Merge of captions and events into one time-ordered list.

use super::key::TimeKey;
use crate::models::{caption::Caption, event::Event};

/// Kind of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Caption,
    Event,
}

/// Read-only, kind-tagged view of one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEntry<'a> {
    Caption(&'a Caption),
    Event(&'a Event),
}

impl<'a> TimelineEntry<'a> {
    pub fn kind(&self) -> EntryKind {
        match self {
            TimelineEntry::Caption(_) => EntryKind::Caption,
            TimelineEntry::Event(_) => EntryKind::Event,
        }
    }

    pub fn sort_key(&self) -> f64 {
        match self {
            TimelineEntry::Caption(caption) => caption.time_key(),
            TimelineEntry::Event(event) => event.time_key(),
        }
    }

    pub fn as_caption(&self) -> Option<&'a Caption> {
        match self {
            TimelineEntry::Caption(caption) => Some(caption),
            TimelineEntry::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&'a Event> {
        match self {
            TimelineEntry::Event(event) => Some(event),
            TimelineEntry::Caption(_) => None,
        }
    }
}

/// Combine captions and events, ordered by time key.
///
/// The sort is stable: entries with equal keys keep input order, captions
/// first, then events, each in collection order.
pub fn merge<'a>(captions: &'a [Caption], events: &'a [Event]) -> Vec<TimelineEntry<'a>> {
    let mut entries: Vec<TimelineEntry<'a>> = captions
        .iter()
        .map(TimelineEntry::Caption)
        .chain(events.iter().map(TimelineEntry::Event))
        .collect();
    entries.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
    entries
}
