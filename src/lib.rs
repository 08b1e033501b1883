// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Momouchi - annotation timeline engine for League of Legends VoDs
//!
//! Captions fetched for a video and events added by the user are kept in
//! an [`AnnotationStore`], merged into one chronological timeline, and
//! exported to or imported from JSON/YAML annotation documents.

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod store;
pub mod timeline;
pub mod util;

pub use app::{ImportSummary, Session};
pub use config::AnnotatorConfig;
pub use error::{CodecError, StoreError};
pub use io::codec::{deserialize, serialize, DocumentFormat};
pub use models::{
    caption::{Caption, CaptionId, Label},
    document::AnnotationDocument,
    event::{Event, EventType},
    match_info::{MatchInfo, MatchInfoField},
};
pub use store::{AnnotationStore, Command, LabelAttributes};
pub use timeline::{filter_by_range, merge, EntryKind, TimeWindow, TimelineEntry};

/// Install the `env_logger` backend (configured through `RUST_LOG`).
///
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
