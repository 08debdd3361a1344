//! Error types for board store operations and snapshot parsing.

use super::Section;
use thiserror::Error;

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Structural errors raised by the task store.
///
/// These indicate bugs in the calling code rather than user mistakes. Benign
/// anomalies (moving an absent task, dropping on the origin section, blank
/// titles) are silent no-ops and never surface here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The section key is not one of the three fixed sections.
    #[error("unknown section: {0}")]
    InvalidSection(String),

    /// A bulk-load snapshot lacks one of the required section keys.
    #[error("malformed board state: missing section '{missing}'")]
    MalformedState {
        /// The first required section absent from the snapshot.
        missing: Section,
    },

    /// A bulk-load snapshot supplies one section under two keys, such as
    /// `todo` and its legacy spelling `to-do`.
    #[error("malformed board state: section '{section}' given more than once")]
    DuplicateSection {
        /// The section named twice.
        section: Section,
    },

    /// The filter field name is not recognised.
    #[error("unknown filter field: {0}")]
    UnknownFilterField(String),

    /// The priority value is neither `High` nor `Low`.
    #[error("invalid priority '{0}', expected High or Low")]
    InvalidPriority(String),

    /// The snapshot payload could not be decoded.
    #[error("invalid board snapshot: {0}")]
    Snapshot(String),
}
