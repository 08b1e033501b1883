// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time-window filtering of freshly fetched captions.

use crate::models::caption::Caption;
use crate::util::time::parse_time_input;

/// Half-open window `[start, end)`; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeWindow {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl TimeWindow {
    pub fn new(start: Option<f64>, end: Option<f64>) -> Self {
        Self { start, end }
    }

    /// Build a window from the user's range inputs. Unparseable text
    /// leaves that side unbounded.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self::new(parse_time_input(start), parse_time_input(end))
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `[start, start + duration)` overlaps this window.
    pub fn overlaps(&self, caption: &Caption) -> bool {
        let window_start = self.start.unwrap_or(0.0);
        let window_end = self.end.unwrap_or(f64::INFINITY);
        caption.start + caption.duration > window_start && caption.start < window_end
    }

    pub fn apply(&self, captions: Vec<Caption>) -> Vec<Caption> {
        if self.is_unbounded() {
            return captions;
        }
        captions.into_iter().filter(|c| self.overlaps(c)).collect()
    }
}

/// Keep captions overlapping `[start, end)`. No bounds returns the input.
pub fn filter_by_range(captions: Vec<Caption>, start: Option<f64>, end: Option<f64>) -> Vec<Caption> {
    TimeWindow::new(start, end).apply(captions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captions() -> Vec<Caption> {
        vec![
            Caption::new(0.0, 5.0, "a"),
            Caption::new(4.0, 3.0, "b"),
            Caption::new(10.0, 2.0, "c"),
        ]
    }

    #[test]
    fn test_overlap_window() {
        let kept = filter_by_range(captions(), Some(3.0), Some(8.0));
        let texts: Vec<_> = kept.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_no_bounds_is_identity() {
        assert_eq!(filter_by_range(captions(), None, None), captions());
    }

    #[test]
    fn test_open_ended_windows() {
        assert_eq!(filter_by_range(captions(), Some(6.0), None).len(), 2);
        assert_eq!(filter_by_range(captions(), None, Some(4.0)).len(), 1);
    }

    #[test]
    fn test_segment_ending_at_window_start_is_excluded() {
        let kept = filter_by_range(captions(), Some(5.0), Some(9.0));
        let texts: Vec<_> = kept.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["b"]);
    }

    #[test]
    fn test_window_from_text_inputs() {
        let window = TimeWindow::from_inputs("0:03", "8");
        assert_eq!(window, TimeWindow::new(Some(3.0), Some(8.0)));
        assert_eq!(window.apply(captions()).len(), 2);

        let garbled = TimeWindow::from_inputs("1:x", "");
        assert!(garbled.is_unbounded());
        assert_eq!(garbled.apply(captions()).len(), 3);
    }
}
