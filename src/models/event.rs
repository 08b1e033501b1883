// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point-in-time game events (objective takes, fights).

use super::{clamp_seconds, null_as_default};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventType {
    #[default]
    Dragon,
    Tower,
    Grubs,
    Herald,
    Baron,
    Fight,
}

impl EventType {
    /// All event types in menu order.
    pub const ALL: [EventType; 6] = [
        EventType::Dragon,
        EventType::Tower,
        EventType::Grubs,
        EventType::Herald,
        EventType::Baron,
        EventType::Fight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Dragon => "Dragon",
            EventType::Tower => "Tower",
            EventType::Grubs => "Grubs",
            EventType::Herald => "Herald",
            EventType::Baron => "Baron",
            EventType::Fight => "Fight",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-created event pinned to a moment of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Empty only for records read from a document that lacked ids;
    /// the store assigns one on ingestion.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: f64,
    pub event_type: EventType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl Event {
    /// Create an event with a fresh identity.
    pub fn new(event_type: EventType, time: f64, description: impl Into<String>) -> Self {
        Self {
            id: new_event_id(),
            time: clamp_seconds(time),
            event_type,
            description: description.into(),
        }
    }
}

pub(crate) fn new_event_id() -> String {
    Uuid::new_v4().to_string()
}
