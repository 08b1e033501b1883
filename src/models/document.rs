// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation document: the exported snapshot of a session.

use super::{caption::Caption, event::Event, match_info::MatchInfoField};
use serde::Serialize;

/// Complete annotation data for export and import.
///
/// Decoding goes through [`crate::io::codec::deserialize`], which applies
/// per-field defaults instead of failing on the first missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationDocument {
    /// `None` when an imported document did not name its video.
    #[serde(rename = "video_url", skip_serializing_if = "Option::is_none")]
    pub video_reference: Option<String>,
    pub captions: Vec<Caption>,
    pub events: Vec<Event>,
    #[serde(rename = "matchInfo")]
    pub match_info: Option<MatchInfoField>,
}

impl AnnotationDocument {
    /// Create a document for the given video with no annotations.
    pub fn new(video_reference: impl Into<String>) -> Self {
        Self {
            video_reference: Some(video_reference.into()),
            ..Self::default()
        }
    }
}
