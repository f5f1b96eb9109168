//! Story Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("No story parts generated")]
    NoParts,

    #[error("Failed to parse story structure: {0}")]
    InvalidStructure(String),
}
