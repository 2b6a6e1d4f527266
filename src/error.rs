//! Error types for the classifier and the chat responder.

use thiserror::Error;

/// Rejected or undecodable image input.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("no image data provided")]
    EmptyInput,

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Rejected chat input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("no message provided")]
    EmptyInput,
}
