// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation document codec.
//!
//! Documents are decoded in two steps: the text is parsed into a generic
//! value tree, then each field is pulled out with its own default. Only
//! the caption list is mandatory.

use crate::error::CodecError;
use crate::models::{
    caption::Caption,
    document::AnnotationDocument,
    event::Event,
    match_info::MatchInfoField,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Text encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(CodecError::UnsupportedFormat(format!("{:?}", extension))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

/// Encode a document. JSON output is pretty-printed.
pub fn serialize(document: &AnnotationDocument, format: DocumentFormat) -> Result<String, CodecError> {
    let text = match format {
        DocumentFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| CodecError::Encode(e.to_string()))?,
        DocumentFormat::Yaml => {
            serde_yaml::to_string(document).map_err(|e| CodecError::Encode(e.to_string()))?
        }
    };
    Ok(text)
}

/// Decode a document.
///
/// Text that is not structured data at all is `MalformedDocument`; a
/// document without a caption list is `MissingCaptions`. A missing video
/// reference stays `None`, missing events become empty, and missing or
/// unreadable match info becomes `None`. Event entries that cannot be
/// read are skipped.
pub fn deserialize(text: &str, format: DocumentFormat) -> Result<AnnotationDocument, CodecError> {
    let root: Value = match format {
        DocumentFormat::Json => serde_json::from_str(text)
            .map_err(|e| CodecError::MalformedDocument(e.to_string()))?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| CodecError::MalformedDocument(e.to_string()))?,
    };

    let captions = match root.get("captions") {
        Some(Value::Array(items)) => decode_captions(items)?,
        _ => return Err(CodecError::MissingCaptions),
    };

    let video_reference = root
        .get("video_url")
        .and_then(Value::as_str)
        .map(str::to_string);

    let events = match root.get("events") {
        Some(Value::Array(items)) => decode_events(items),
        _ => Vec::new(),
    };

    let match_info = match root.get("matchInfo") {
        None | Some(Value::Null) => None,
        Some(value) => match MatchInfoField::deserialize(value) {
            Ok(field) => Some(field),
            Err(e) => {
                log::warn!("Ignoring unreadable matchInfo: {}", e);
                None
            }
        },
    };

    Ok(AnnotationDocument {
        video_reference,
        captions,
        events,
        match_info,
    })
}

fn decode_captions(items: &[Value]) -> Result<Vec<Caption>, CodecError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Caption::deserialize(item)
                .map_err(|e| CodecError::MalformedDocument(format!("caption {}: {}", index, e)))
        })
        .collect()
}

fn decode_events(items: &[Value]) -> Vec<Event> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match Event::deserialize(item) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("Skipping unreadable event {}: {}", index, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        caption::Label,
        event::EventType,
        match_info::MatchInfo,
    };
    use serde_json::json;

    fn document() -> AnnotationDocument {
        let mut labelled = Caption::new(12.0, 3.25, "T1 look for the dive").with_id(1u64);
        labelled.set_label(Label::Custom);
        labelled.custom_label = "Macro call".to_string();
        labelled.comment = "good example".to_string();

        let info: MatchInfo = serde_json::from_value(json!({
            "team1": {"team_name": "T1"},
            "team1score": 3,
            "tournament": "Worlds"
        }))
        .unwrap();

        AnnotationDocument {
            video_reference: Some("https://www.youtube.com/watch?v=abc123".to_string()),
            captions: vec![
                Caption::new(0.5, 11.5, "welcome to the finals").with_id(0u64),
                labelled,
                Caption::new(15.25, 0.0, "").with_id("late"),
            ],
            events: vec![Event {
                id: "0f8c1f8e-1d3a-4c57-9d0e-2a6d4e9b9b11".to_string(),
                time: 14.75,
                event_type: EventType::Tower,
                description: "first tower".to_string(),
            }],
            match_info: Some(MatchInfoField::Many(vec![info])),
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let original = document();
        let text = serialize(&original, DocumentFormat::Json).unwrap();
        let restored = deserialize(&text, DocumentFormat::Json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let original = document();
        let text = serialize(&original, DocumentFormat::Yaml).unwrap();
        let restored = deserialize(&text, DocumentFormat::Yaml).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_json_shape() {
        let text = serialize(&document(), DocumentFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["video_url"], "https://www.youtube.com/watch?v=abc123");
        assert_eq!(value["captions"][1]["customLabel"], "Macro call");
        assert_eq!(value["events"][0]["eventType"], "Tower");
        assert!(value["matchInfo"].is_array());
    }

    #[test]
    fn test_malformed_text() {
        let result = deserialize("{ not json", DocumentFormat::Json);
        assert!(matches!(result, Err(CodecError::MalformedDocument(_))));
    }

    #[test]
    fn test_missing_captions() {
        let result = deserialize(r#"{"video_url":"x"}"#, DocumentFormat::Json);
        assert!(matches!(result, Err(CodecError::MissingCaptions)));

        let result = deserialize(r#"{"captions": {"start": 1}}"#, DocumentFormat::Json);
        assert!(matches!(result, Err(CodecError::MissingCaptions)));
    }

    #[test]
    fn test_soft_defaults() {
        let doc = deserialize(
            r#"{"captions": [{"start": 1, "duration": 2, "text": "hi"}], "events": "oops"}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(doc.video_reference, None);
        assert_eq!(doc.captions.len(), 1);
        assert!(doc.events.is_empty());
        assert!(doc.match_info.is_none());
    }

    #[test]
    fn test_bad_caption_entry_is_malformed() {
        let result = deserialize(r#"{"captions": [{"start": "soon"}]}"#, DocumentFormat::Json);
        assert!(matches!(result, Err(CodecError::MalformedDocument(_))));
    }

    #[test]
    fn test_odd_label_and_id_values_keep_the_document() {
        let doc = deserialize(
            r#"{"captions": [
                {"start": 1, "duration": 2, "text": "a", "label": "", "customLabel": "", "comment": ""},
                {"id": 1.5, "start": 3, "duration": 1, "text": "b", "label": "Lane swap"},
                {"id": {"k": 1}, "start": 4, "duration": 1, "text": "c", "label": "Analysis"}
            ]}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(doc.captions.len(), 3);
        assert_eq!(doc.captions[0].label, Label::None);
        assert_eq!(doc.captions[1].label, Label::None);
        assert_eq!(doc.captions[1].id, None);
        assert_eq!(doc.captions[2].label, Label::Analysis);
        assert_eq!(doc.captions[2].id, None);
    }

    #[test]
    fn test_unreadable_event_is_skipped() {
        let doc = deserialize(
            r#"{"captions": [], "events": [
                {"id": "a", "time": 10, "eventType": "Baron"},
                {"id": "b", "time": 20, "eventType": "Nexus"}
            ]}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(doc.events.len(), 1);
        assert_eq!(doc.events[0].id, "a");
    }

    #[test]
    fn test_single_match_info_object() {
        let doc = deserialize(
            r#"{"captions": [], "matchInfo": {"tournament": "MSI"}}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        let field = doc.match_info.unwrap();
        assert_eq!(field.matches()[0].tournament(), Some("MSI"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("notes.yml")).unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("notes.json")).unwrap(),
            DocumentFormat::Json
        );
        assert!(DocumentFormat::from_path(Path::new("notes.txt")).is_err());
    }
}
