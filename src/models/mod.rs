// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for captions, events, match metadata, and documents.

pub mod caption;
pub mod document;
pub mod event;
pub mod match_info;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be `null`, falling back to its default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Clamp a seconds value to a finite, non-negative number.
pub(crate) fn clamp_seconds(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
