// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Edit commands emitted by caption and event cards.

use crate::models::{
    caption::{Caption, CaptionId},
    event::Event,
};

/// One discrete edit to the annotation store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    UpdateCaption(Caption),
    UpdateEvent(Event),
    AddEvent(Event),
    DeleteEvent(String),
    /// Give the caption the label of the caption before it.
    CopyPreviousLabel(CaptionId),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::UpdateCaption(_) => "update_caption",
            Command::UpdateEvent(_) => "update_event",
            Command::AddEvent(_) => "add_event",
            Command::DeleteEvent(_) => "delete_event",
            Command::CopyPreviousLabel(_) => "copy_previous_label",
        }
    }
}
