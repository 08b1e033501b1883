// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption and match-detail services.
//!
//! The services themselves live elsewhere; this module defines what the
//! session needs from them and how their failures degrade.

use crate::models::{caption::Caption, match_info::MatchInfo};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Body of a caption query. A missing `captions` field means the
/// service found none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionResponse {
    #[serde(default)]
    pub captions: Option<Vec<Caption>>,
}

impl CaptionResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("Invalid caption response")
    }
}

/// Body of a match-detail query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub matches: Vec<MatchInfo>,
}

impl MatchResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("Invalid match response")
    }
}

/// Source of machine-generated captions for a video.
pub trait CaptionService {
    fn fetch_captions(&self, video_reference: &str) -> Result<CaptionResponse>;
}

/// Source of match metadata for a video.
pub trait MatchService {
    fn fetch_matches(&self, video_reference: &str) -> Result<MatchResponse>;
}

/// Fetch captions; any failure or an absent list yields no captions.
pub fn fetch_captions_or_empty(service: &dyn CaptionService, video_reference: &str) -> Vec<Caption> {
    match service.fetch_captions(video_reference) {
        Ok(CaptionResponse {
            captions: Some(captions),
        }) => {
            log::info!("Fetched {} captions for {}", captions.len(), video_reference);
            captions
        }
        Ok(CaptionResponse { captions: None }) => {
            log::warn!("No captions found for {}", video_reference);
            Vec::new()
        }
        Err(e) => {
            log::warn!("Caption fetch failed for {}: {:#}", video_reference, e);
            Vec::new()
        }
    }
}

/// Fetch match metadata; any failure yields no matches.
pub fn fetch_matches_or_empty(service: &dyn MatchService, video_reference: &str) -> Vec<MatchInfo> {
    match service.fetch_matches(video_reference) {
        Ok(response) => response.matches,
        Err(e) => {
            log::warn!("Match fetch failed for {}: {:#}", video_reference, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Canned service responses for tests.
    pub(crate) struct StubService {
        pub captions: Option<&'static str>,
        pub matches: Option<&'static str>,
    }

    impl CaptionService for StubService {
        fn fetch_captions(&self, _video_reference: &str) -> Result<CaptionResponse> {
            let body = self.captions.context("service unavailable")?;
            CaptionResponse::from_json(body)
        }
    }

    impl MatchService for StubService {
        fn fetch_matches(&self, _video_reference: &str) -> Result<MatchResponse> {
            let body = self.matches.context("service unavailable")?;
            MatchResponse::from_json(body)
        }
    }

    #[test]
    fn test_captions_are_returned() {
        let service = StubService {
            captions: Some(r#"{"captions": [{"start": 0, "duration": 2.5, "text": "hello"}]}"#),
            matches: None,
        };
        let captions = fetch_captions_or_empty(&service, "vid");
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].duration, 2.5);
    }

    #[test]
    fn test_absent_captions_field_is_empty() {
        let service = StubService {
            captions: Some(r#"{"error": "no transcript"}"#),
            matches: None,
        };
        assert!(fetch_captions_or_empty(&service, "vid").is_empty());
    }

    #[test]
    fn test_failures_degrade_to_empty() {
        crate::init_logging();
        let service = StubService {
            captions: None,
            matches: Some("not json"),
        };
        assert!(fetch_captions_or_empty(&service, "vid").is_empty());
        assert!(fetch_matches_or_empty(&service, "vid").is_empty());
    }

    #[test]
    fn test_matches_default_to_empty() {
        let service = StubService {
            captions: None,
            matches: Some(r#"{}"#),
        };
        assert!(fetch_matches_or_empty(&service, "vid").is_empty());

        let service = StubService {
            captions: None,
            matches: Some(r#"{"matches": [{"tournament": "LPL"}]}"#),
        };
        assert_eq!(fetch_matches_or_empty(&service, "vid").len(), 1);
    }
}
