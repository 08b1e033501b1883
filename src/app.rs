// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation session state.
//!
//! This module ties the annotation store to its collaborators: the
//! caption and match services, the video player, and document files.
//! A front end drives a [`Session`] with discrete calls and reads the
//! merged timeline back out.

use crate::config::AnnotatorConfig;
use crate::error::{CodecError, StoreError};
use crate::io::{
    codec::{self, DocumentFormat},
    player::{PlaybackFeed, PlayerSurface},
    remote::{fetch_captions_or_empty, fetch_matches_or_empty, CaptionService, MatchService},
    serialization,
};
use crate::models::{
    caption::CaptionId,
    document::AnnotationDocument,
    event::{Event, EventType},
    match_info::MatchInfoField,
};
use crate::store::{AnnotationStore, Command};
use crate::timeline::{key::TimeKey, merge::TimelineEntry, range::TimeWindow};
use anyhow::Result;
use std::path::Path;

/// What an import brought in.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub video_reference: String,
    pub captions: usize,
    pub events: usize,
}

/// One annotation session over one video.
#[derive(Debug)]
pub struct Session {
    config: AnnotatorConfig,

    /// Video being annotated (URL or other opaque reference)
    video_reference: String,

    /// Canonical captions and events
    store: AnnotationStore,

    /// Match metadata from the last fetch or import
    match_info: Option<MatchInfoField>,

    /// Most recent playback time reported by the player
    playhead: Option<f64>,

    /// Subscription to the player's time samples while attached
    playback: Option<PlaybackFeed>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AnnotatorConfig::default())
    }
}

impl Session {
    pub fn new(config: AnnotatorConfig) -> Self {
        let store = AnnotationStore::with_history_depth(config.history_depth);
        Self {
            config,
            video_reference: String::new(),
            store,
            match_info: None,
            playhead: None,
            playback: None,
        }
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    pub fn video_reference(&self) -> &str {
        &self.video_reference
    }

    pub fn set_video_reference(&mut self, reference: impl Into<String>) {
        self.video_reference = reference.into();
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn match_info(&self) -> Option<&MatchInfoField> {
        self.match_info.as_ref()
    }

    /// Merged, time-ordered captions and events.
    pub fn timeline(&self) -> Vec<TimelineEntry<'_>> {
        self.store.timeline()
    }

    /// Apply an edit coming from a caption or event card.
    pub fn dispatch(&mut self, command: Command) -> bool {
        self.store.apply(command)
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    /// Fetch captions and match details for the current video.
    ///
    /// Captions outside `window` are dropped. Existing events are kept.
    /// Service failures leave an empty caption list, not an error.
    pub fn load_captions(
        &mut self,
        captions: &dyn CaptionService,
        matches: &dyn MatchService,
        window: TimeWindow,
    ) -> usize {
        let fetched = fetch_captions_or_empty(captions, &self.video_reference);
        let kept = window.apply(fetched);
        let count = kept.len();
        self.store.replace_all(Some(kept), None);

        let fetched_matches = fetch_matches_or_empty(matches, &self.video_reference);
        self.match_info = MatchInfoField::from_matches(fetched_matches);

        log::info!("Loaded {} captions for {}", count, self.video_reference);
        count
    }

    /// Start listening to the player's time samples.
    pub fn attach_playback(&mut self, feed: PlaybackFeed) {
        self.playback = Some(feed);
    }

    /// Stop listening; the player sees its sends fail and stops polling.
    pub fn detach_playback(&mut self) {
        self.playback = None;
    }

    /// Pull the newest playback sample, if any arrived.
    pub fn poll_playback(&mut self) -> Option<f64> {
        if let Some(sample) = self.playback.as_ref().and_then(PlaybackFeed::latest) {
            self.playhead = Some(sample);
        }
        self.playhead
    }

    pub fn playhead(&self) -> Option<f64> {
        self.playhead
    }

    /// Create an event at the current playback time (0 before any sample).
    ///
    /// Returns the new event's id.
    pub fn add_event_at_playhead(
        &mut self,
        event_type: Option<EventType>,
        description: &str,
    ) -> Result<String, StoreError> {
        let time = self.poll_playback().unwrap_or(0.0);
        let event_type = event_type.unwrap_or(self.config.default_event_type);
        let event = Event::new(event_type, time, description);
        let id = event.id.clone();
        self.store.add_event(event)?;
        Ok(id)
    }

    /// Seek the player to a caption's start. False if the id is unknown.
    pub fn seek_to_caption(&self, player: &mut dyn PlayerSurface, id: &CaptionId) -> bool {
        match self.store.caption(id) {
            Some(caption) => {
                player.seek_to(caption.time_key());
                true
            }
            None => false,
        }
    }

    pub fn seek_to_entry(&self, player: &mut dyn PlayerSurface, entry: &TimelineEntry<'_>) {
        player.seek_to(entry.sort_key());
    }

    /// Snapshot of the session as a document.
    pub fn document(&self) -> AnnotationDocument {
        AnnotationDocument {
            video_reference: Some(self.video_reference.clone()).filter(|r| !r.is_empty()),
            captions: self.store.captions().to_vec(),
            events: self.store.events().to_vec(),
            match_info: self.match_info.clone(),
        }
    }

    /// Encode the session in the configured export format.
    pub fn export_text(&self) -> Result<String, CodecError> {
        codec::serialize(&self.document(), self.config.export_format)
    }

    /// Replace the session's annotations with a decoded document.
    ///
    /// The current video reference is kept when the document has none.
    /// On error nothing changes.
    pub fn import_text(&mut self, text: &str, format: DocumentFormat) -> Result<ImportSummary, CodecError> {
        let document = codec::deserialize(text, format)?;
        Ok(self.load_document(document))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        serialization::export_document(&self.document(), path)
    }

    pub fn open(&mut self, path: &Path) -> Result<ImportSummary> {
        let document = serialization::import_document(path)?;
        Ok(self.load_document(document))
    }

    fn load_document(&mut self, document: AnnotationDocument) -> ImportSummary {
        if let Some(reference) = document.video_reference {
            self.video_reference = reference;
        }
        self.store
            .replace_all(Some(document.captions), Some(document.events));
        self.match_info = document.match_info;

        let summary = ImportSummary {
            video_reference: self.video_reference.clone(),
            captions: self.store.captions().len(),
            events: self.store.events().len(),
        };
        log::info!(
            "Loaded {} annotations for video: {}",
            summary.captions,
            summary.video_reference
        );
        summary
    }
}
