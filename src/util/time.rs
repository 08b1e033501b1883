// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Conversions between seconds and `m:ss` text.

/// Parse `mm:ss` or bare whole seconds. Anything else is `None`.
pub fn parse_time_input(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let mut parts = value.split(':');
    let first = whole_number(parts.next()?)?;
    match (parts.next(), parts.next()) {
        (None, _) => Some(first as f64),
        (Some(seconds), None) => {
            let total = first.checked_mul(60)?.checked_add(whole_number(seconds)?)?;
            Some(total as f64)
        }
        _ => None,
    }
}

/// Format seconds as `m:ss`, rounding down.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

fn whole_number(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
