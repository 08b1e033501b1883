// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotator settings.
//!
//! Settings are read from a YAML file. Every field has a default, so a
//! partial file (or none at all) is fine.

use crate::io::codec::DocumentFormat;
use crate::models::event::EventType;
use crate::store::DEFAULT_HISTORY_DEPTH;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// How often the player is expected to push the current time while playing.
    pub playback_poll_interval_ms: u64,
    /// Event type preselected when adding an event.
    pub default_event_type: EventType,
    /// Number of undo steps kept by the store.
    pub history_depth: usize,
    /// Format used when exporting without an explicit choice.
    pub export_format: DocumentFormat,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            playback_poll_interval_ms: 500,
            default_event_type: EventType::Dragon,
            history_depth: DEFAULT_HISTORY_DEPTH,
            export_format: DocumentFormat::Json,
        }
    }
}

impl AnnotatorConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid annotator config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_yaml_str(&text)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn playback_poll_interval(&self) -> Duration {
        Duration::from_millis(self.playback_poll_interval_ms)
    }
}
