// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption segments and their classification labels.
//!
//! A caption is a continuous stretch of transcribed commentary with a start
//! offset and a duration. Users edit its text and attach a label and a
//! comment to it.

use super::null_as_default;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identity of a caption within its collection.
///
/// Imported documents may carry either numeric or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaptionId {
    Index(u64),
    Key(String),
}

impl fmt::Display for CaptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptionId::Index(index) => write!(f, "{}", index),
            CaptionId::Key(key) => f.write_str(key),
        }
    }
}

impl From<u64> for CaptionId {
    fn from(index: u64) -> Self {
        CaptionId::Index(index)
    }
}

impl From<&str> for CaptionId {
    fn from(key: &str) -> Self {
        CaptionId::Key(key.to_string())
    }
}

/// Classification tag for a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Label {
    #[default]
    None,
    #[serde(rename = "Play by Play")]
    PlayByPlay,
    Storytelling,
    Analysis,
    #[serde(rename = "Hype / Reaction")]
    HypeReaction,
    Custom,
}

impl Label {
    /// All labels in menu order.
    pub const ALL: [Label; 6] = [
        Label::None,
        Label::PlayByPlay,
        Label::Storytelling,
        Label::Analysis,
        Label::HypeReaction,
        Label::Custom,
    ];

    /// Look up a label by its display text.
    pub fn parse(name: &str) -> Option<Label> {
        Label::ALL.iter().copied().find(|label| label.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::None => "None",
            Label::PlayByPlay => "Play by Play",
            Label::Storytelling => "Storytelling",
            Label::Analysis => "Analysis",
            Label::HypeReaction => "Hype / Reaction",
            Label::Custom => "Custom",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transcribed speech segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_id")]
    pub id: Option<CaptionId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub label: Label,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
}

impl Caption {
    /// Create an unlabelled caption without an identity.
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        Self {
            id: None,
            start,
            duration,
            text: text.into(),
            label: Label::None,
            custom_label: String::new(),
            comment: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<CaptionId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// End of the segment in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Change the label. Leaving `Custom` clears the custom label text.
    pub fn set_label(&mut self, label: Label) {
        self.label = label;
        if label != Label::Custom {
            self.custom_label.clear();
        }
    }

    /// Drop custom label text that no longer applies.
    pub(crate) fn normalize_label(&mut self) {
        if self.label != Label::Custom && !self.custom_label.is_empty() {
            self.custom_label.clear();
        }
    }

    /// Label text as shown to the user.
    pub fn display_label(&self) -> &str {
        match self.label {
            Label::Custom if !self.custom_label.is_empty() => &self.custom_label,
            label => label.as_str(),
        }
    }
}

/// Unsigned integers and strings are ids; anything else is dropped so
/// ingestion assigns a fresh one.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<CaptionId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(key) => Some(CaptionId::Key(key)),
        Value::Number(n) => match n.as_u64() {
            Some(index) => Some(CaptionId::Index(index)),
            None => {
                log::warn!("Ignoring unusable caption id {}", n);
                None
            }
        },
        other => {
            log::warn!("Ignoring unusable caption id {}", other);
            None
        }
    })
}

/// Empty, null and unknown labels read as `None`.
fn lenient_label<'de, D>(deserializer: D) -> Result<Label, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Label::None,
        Value::String(name) if name.is_empty() => Label::None,
        Value::String(name) => Label::parse(&name).unwrap_or_else(|| {
            log::warn!("Unknown caption label {:?}, using None", name);
            Label::None
        }),
        other => {
            log::warn!("Ignoring non-text caption label {}", other);
            Label::None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_label_clears_custom_text() {
        let mut caption = Caption::new(0.0, 2.0, "first blood");
        caption.set_label(Label::Custom);
        caption.custom_label = "Draft talk".to_string();
        assert_eq!(caption.display_label(), "Draft talk");

        caption.set_label(Label::Analysis);
        assert_eq!(caption.label, Label::Analysis);
        assert!(caption.custom_label.is_empty());
        assert_eq!(caption.display_label(), "Analysis");
    }

    #[test]
    fn test_deserialize_sparse_caption() {
        let caption: Caption =
            serde_json::from_str(r#"{"start": 4.5, "duration": 1.5, "text": "into baron", "label": null}"#)
                .unwrap();
        assert_eq!(caption.id, None);
        assert_eq!(caption.end(), 6.0);
        assert_eq!(caption.label, Label::None);
        assert!(caption.comment.is_empty());
    }

    #[test]
    fn test_label_wire_names() {
        let caption = Caption {
            label: Label::HypeReaction,
            ..Caption::new(1.0, 1.0, "what a steal")
        }
        .with_id(3u64);
        let json = serde_json::to_value(&caption).unwrap();
        assert_eq!(json["label"], "Hype / Reaction");
        assert_eq!(json["customLabel"], "");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn test_caption_id_accepts_numbers_and_strings() {
        let numeric: CaptionId = serde_json::from_str("7").unwrap();
        let keyed: CaptionId = serde_json::from_str(r#""cap-7""#).unwrap();
        assert_eq!(numeric, CaptionId::Index(7));
        assert_eq!(keyed, CaptionId::from("cap-7"));
        assert_eq!(keyed.to_string(), "cap-7");
    }

    #[test]
    fn test_unusable_ids_are_dropped() {
        for raw in ["1.5", "-1", "true", r#"{"k": 1}"#, "null"] {
            let text = format!(r#"{{"start": 1, "duration": 1, "text": "x", "id": {}}}"#, raw);
            let caption: Caption = serde_json::from_str(&text).unwrap();
            assert_eq!(caption.id, None, "id {}", raw);
        }
    }

    #[test]
    fn test_lenient_labels() {
        for (raw, expected) in [
            (r#""""#, Label::None),
            (r#""Lane swap""#, Label::None),
            ("42", Label::None),
            (r#""Play by Play""#, Label::PlayByPlay),
            (r#""Custom""#, Label::Custom),
        ] {
            let text = format!(r#"{{"start": 0, "label": {}}}"#, raw);
            let caption: Caption = serde_json::from_str(&text).unwrap();
            assert_eq!(caption.label, expected, "label {}", raw);
        }
        assert_eq!(Label::parse("Hype / Reaction"), Some(Label::HypeReaction));
        assert_eq!(Label::parse("hype"), None);
    }
}
