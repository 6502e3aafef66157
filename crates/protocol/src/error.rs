//! Error types for protocol operations.

/// Errors raised while interpreting data crossing a UI boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A drag payload did not contain a task identifier.
    #[error("drag payload {payload:?} is not a task id: {source}")]
    InvalidDragPayload {
        /// The raw payload text.
        payload: String,
        /// The underlying parse error.
        #[source]
        source: uuid::Error,
    },
}

/// A form field failed validation.
///
/// The `Display` text is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is blank.
    #[error("Title is required.")]
    TitleRequired,
    /// The title is shorter than the minimum length.
    #[error("Use at least 3 characters.")]
    TitleTooShort,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
