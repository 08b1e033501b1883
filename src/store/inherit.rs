// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Copying classification from the preceding caption.
//!
//! "Preceding" means the previous element of the caption collection as
//! stored, never the merged timeline: events in between do not count.

use crate::models::caption::{Caption, CaptionId, Label};

/// Classification attributes carried from one caption to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAttributes {
    pub label: Label,
    pub custom_label: String,
}

impl From<&Caption> for LabelAttributes {
    fn from(caption: &Caption) -> Self {
        Self {
            label: caption.label,
            custom_label: caption.custom_label.clone(),
        }
    }
}

/// Label of the caption just before `id`.
///
/// `None` when `id` is the first caption or is not in the collection.
pub fn copy_from_previous(captions: &[Caption], id: &CaptionId) -> Option<LabelAttributes> {
    let index = captions.iter().position(|c| c.id.as_ref() == Some(id))?;
    let previous = captions.get(index.checked_sub(1)?)?;
    Some(LabelAttributes::from(previous))
}
