/// Input errors raised before any review action reaches storage or notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("request message must not be empty")]
    EmptyMessage,
    #[error("unknown status filter '{0}' (expected all, pending, approved, or rejected)")]
    UnknownStatusFilter(String),
    #[error("unknown seller status '{0}'")]
    UnknownStatus(String),
}

/// Message sent to a seller when the reviewer needs more information.
///
/// Blank messages never make it past [`InfoRequestMessage::parse`]; the text itself is kept
/// exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRequestMessage(String);

impl InfoRequestMessage {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
