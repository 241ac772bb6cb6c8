use thiserror::Error;

/// Errors that can occur when reading a changes document
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changes file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse changes file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::ParseError(e) => format!("Malformed changes document: {e}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
