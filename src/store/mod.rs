// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation store: the canonical caption and event collections.
//!
//! Every edit is addressed by identity, never by position, so edits from
//! different cards commute and repeated edits to one record are
//! last-write-wins. Reads always see the latest collections.

pub mod command;
mod history;
pub mod inherit;

pub use command::Command;
pub use inherit::{copy_from_previous, LabelAttributes};

use crate::error::StoreError;
use crate::models::{
    caption::{Caption, CaptionId},
    clamp_seconds,
    event::{new_event_id, Event},
};
use crate::timeline::merge::{merge, TimelineEntry};
use history::{History, Snapshot};
use std::collections::HashSet;
use uuid::Uuid;

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Owner of the session's captions and events.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    captions: Vec<Caption>,
    events: Vec<Event>,
    history: History,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::with_history_depth(DEFAULT_HISTORY_DEPTH)
    }

    pub fn with_history_depth(depth: usize) -> Self {
        Self {
            captions: Vec::new(),
            events: Vec::new(),
            history: History::new(depth),
        }
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn caption(&self, id: &CaptionId) -> Option<&Caption> {
        self.captions.iter().find(|c| c.id.as_ref() == Some(id))
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty() && self.events.is_empty()
    }

    /// Fresh time-ordered view of captions and events.
    pub fn timeline(&self) -> Vec<TimelineEntry<'_>> {
        merge(&self.captions, &self.events)
    }

    /// Replace a caption in place, matched by id, or by `start` when the
    /// update carries no id. The collection never grows or shrinks.
    pub fn update_caption(&mut self, mut updated: Caption) -> Result<(), StoreError> {
        let index = match &updated.id {
            Some(id) => self.captions.iter().position(|c| c.id.as_ref() == Some(id)),
            None => self.captions.iter().position(|c| c.start == updated.start),
        }
        .ok_or_else(|| StoreError::UnknownIdentity(caption_identity(&updated)))?;

        if updated.id.is_none() {
            updated.id = self.captions[index].id.clone();
        }
        updated.start = clamp_seconds(updated.start);
        updated.duration = clamp_seconds(updated.duration);
        updated.normalize_label();

        if self.captions[index] == updated {
            return Ok(());
        }
        self.save_to_history();
        self.captions[index] = updated;
        Ok(())
    }

    /// Overwrite an event's fields, matched by id.
    pub fn update_event(&mut self, updated: Event) -> Result<(), StoreError> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == updated.id)
            .ok_or_else(|| StoreError::UnknownIdentity(updated.id.clone()))?;

        let time = clamp_seconds(updated.time);
        let current = &self.events[index];
        if current.time == time
            && current.event_type == updated.event_type
            && current.description == updated.description
        {
            return Ok(());
        }

        self.save_to_history();
        let event = &mut self.events[index];
        event.time = time;
        event.event_type = updated.event_type;
        event.description = updated.description;
        Ok(())
    }

    /// Append a new event. An empty id is filled in; a taken id is refused.
    pub fn add_event(&mut self, mut event: Event) -> Result<(), StoreError> {
        if event.id.is_empty() {
            event.id = new_event_id();
        }
        if self.event(&event.id).is_some() {
            return Err(StoreError::DuplicateIdentity(event.id));
        }
        event.time = clamp_seconds(event.time);

        self.save_to_history();
        log::info!("Added {} event at {:.1}s", event.event_type, event.time);
        self.events.push(event);
        Ok(())
    }

    /// Remove an event. Returns whether anything was removed.
    pub fn delete_event(&mut self, id: &str) -> bool {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return false;
        };
        self.save_to_history();
        self.events.remove(index);
        log::info!("Deleted event {}, total: {}", id, self.events.len());
        true
    }

    /// Replace whole collections. `None` leaves that collection untouched.
    ///
    /// Incoming records are normalized: every caption gets an identity,
    /// times are clamped, and duplicate event ids are dropped. Undo
    /// history starts over.
    pub fn replace_all(&mut self, captions: Option<Vec<Caption>>, events: Option<Vec<Event>>) {
        if let Some(captions) = captions {
            self.captions = ingest_captions(captions);
        }
        if let Some(events) = events {
            self.events = ingest_events(events);
        }
        self.history.clear();
        log::debug!(
            "Store now holds {} captions and {} events",
            self.captions.len(),
            self.events.len()
        );
    }

    /// Label of the caption stored just before `id`.
    pub fn copy_from_previous(&self, id: &CaptionId) -> Option<LabelAttributes> {
        copy_from_previous(&self.captions, id)
    }

    /// Give caption `id` the label of the caption before it.
    ///
    /// `Ok(false)` when there is nothing to copy from.
    pub fn apply_previous_label(&mut self, id: &CaptionId) -> Result<bool, StoreError> {
        let Some(attrs) = self.copy_from_previous(id) else {
            return match self.caption(id) {
                Some(_) => Ok(false),
                None => Err(StoreError::UnknownIdentity(id.to_string())),
            };
        };
        let mut updated = self
            .caption(id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownIdentity(id.to_string()))?;
        updated.set_label(attrs.label);
        updated.custom_label = attrs.custom_label;
        self.update_caption(updated)?;
        Ok(true)
    }

    /// Run one edit command. Failures are logged and dropped so a stale
    /// edit never disturbs the rest of the session.
    pub fn apply(&mut self, command: Command) -> bool {
        let name = command.name();
        let result = match command {
            Command::UpdateCaption(caption) => self.update_caption(caption).map(|_| true),
            Command::UpdateEvent(event) => self.update_event(event).map(|_| true),
            Command::AddEvent(event) => self.add_event(event).map(|_| true),
            Command::DeleteEvent(id) => Ok(self.delete_event(&id)),
            Command::CopyPreviousLabel(id) => self.apply_previous_label(&id),
        };
        match result {
            Ok(changed) => changed,
            Err(e) => {
                log::warn!("Dropped {} command: {}", name, e);
                false
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                log::info!("Undo");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                log::info!("Redo");
                true
            }
            None => false,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            captions: self.captions.clone(),
            events: self.events.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.captions = snapshot.captions;
        self.events = snapshot.events;
    }

    fn save_to_history(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }
}

fn caption_identity(caption: &Caption) -> String {
    match &caption.id {
        Some(id) => id.to_string(),
        None => format!("start={}", caption.start),
    }
}

/// Give every caption a unique identity and sane times.
///
/// Existing ids win; a missing or repeated id becomes the caption's
/// position, or a fresh UUID if that position is already someone's id.
fn ingest_captions(mut captions: Vec<Caption>) -> Vec<Caption> {
    let explicit: HashSet<CaptionId> = captions.iter().filter_map(|c| c.id.clone()).collect();
    let mut seen: HashSet<CaptionId> = HashSet::with_capacity(captions.len());

    for (index, caption) in captions.iter_mut().enumerate() {
        let keep = matches!(&caption.id, Some(id) if !seen.contains(id));
        if !keep {
            let positional = CaptionId::Index(index as u64);
            let id = if explicit.contains(&positional) || seen.contains(&positional) {
                CaptionId::Key(Uuid::new_v4().to_string())
            } else {
                positional
            };
            if let Some(old) = &caption.id {
                log::warn!("Duplicate caption id {} reassigned to {}", old, id);
            }
            caption.id = Some(id);
        }
        if let Some(id) = &caption.id {
            seen.insert(id.clone());
        }

        let (start, duration) = (clamp_seconds(caption.start), clamp_seconds(caption.duration));
        if start != caption.start || duration != caption.duration {
            log::warn!(
                "Caption {} had invalid timing ({}, {}), clamped",
                index,
                caption.start,
                caption.duration
            );
            caption.start = start;
            caption.duration = duration;
        }
    }
    captions
}

/// Give every event an id, drop repeated ids, and clamp times.
fn ingest_events(events: Vec<Event>) -> Vec<Event> {
    let mut seen: HashSet<String> = HashSet::with_capacity(events.len());
    let mut kept = Vec::with_capacity(events.len());

    for mut event in events {
        if event.id.is_empty() {
            event.id = new_event_id();
        }
        if !seen.insert(event.id.clone()) {
            log::warn!("Dropped event with duplicate id {}", event.id);
            continue;
        }
        event.time = clamp_seconds(event.time);
        kept.push(event);
    }
    kept
}
