// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video player collaboration.
//!
//! The player is driven from outside: it can be asked to seek, and while
//! playing it pushes the current time over a channel. The session only
//! ever looks at the most recent sample.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

/// A player surface that can jump to a time offset.
pub trait PlayerSurface {
    fn seek_to(&mut self, seconds: f64);
}

/// Sending half of a playback subscription, held by the player.
#[derive(Debug, Clone)]
pub struct PlaybackSender {
    sender: Sender<f64>,
}

impl PlaybackSender {
    /// Push a time sample. Returns false once the feed has been dropped,
    /// which tells the player to stop its polling timer.
    pub fn send(&self, seconds: f64) -> bool {
        self.sender.send(seconds).is_ok()
    }
}

/// Receiving half of a playback subscription, held by the session.
#[derive(Debug)]
pub struct PlaybackFeed {
    receiver: Receiver<f64>,
}

impl PlaybackFeed {
    /// Drain pending samples without blocking and return the newest.
    pub fn latest(&self) -> Option<f64> {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(sample) if sample.is_finite() => latest = Some(sample),
                Ok(_) => {}
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }
}

/// Open a playback subscription.
pub fn playback_channel() -> (PlaybackSender, PlaybackFeed) {
    let (sender, receiver) = channel();
    (PlaybackSender { sender }, PlaybackFeed { receiver })
}

/// Extract the YouTube video id from a watch or short link.
pub fn youtube_video_id(reference: &str) -> Option<String> {
    let url = url::Url::parse(reference).ok()?;
    let host = url.host_str()?.trim_start_matches("www.");
    match host {
        "youtu.be" => url
            .path_segments()?
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        _ => url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty()),
    }
}
