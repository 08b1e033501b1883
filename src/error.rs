// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types shared across the crate.
//!
//! Codec failures and store failures are kept apart so a caller can tell
//! "the file is broken" from "that card no longer exists".

use thiserror::Error;

/// Failures while decoding or encoding an annotation document.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed annotation document: {0}")]
    MalformedDocument(String),

    #[error("Invalid file format: captions missing")]
    MissingCaptions,

    #[error("Failed to encode annotation document: {0}")]
    Encode(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedDocument(_) => "MALFORMED_DOCUMENT",
            Self::MissingCaptions => "MISSING_CAPTIONS",
            Self::Encode(_) => "ENCODE_FAILED",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

/// Failures of identity-keyed store mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No record with identity {0}")]
    UnknownIdentity(String),

    #[error("A record with identity {0} already exists")]
    DuplicateIdentity(String),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownIdentity(_) => "UNKNOWN_IDENTITY",
            Self::DuplicateIdentity(_) => "DUPLICATE_IDENTITY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(CodecError::MissingCaptions.code(), "MISSING_CAPTIONS");
        assert_eq!(
            CodecError::MalformedDocument("eof".into()).code(),
            "MALFORMED_DOCUMENT"
        );
        assert_eq!(
            StoreError::UnknownIdentity("x".into()).code(),
            "UNKNOWN_IDENTITY"
        );
    }

    #[test]
    fn test_missing_captions_message() {
        assert_eq!(
            CodecError::MissingCaptions.to_string(),
            "Invalid file format: captions missing"
        );
    }
}
