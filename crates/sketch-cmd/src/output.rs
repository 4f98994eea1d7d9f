//! Command output messages

use serde::{Deserialize, Serialize};

/// Output message kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputKind {
    /// Informational message (default)
    #[default]
    Info,
    /// Warning message
    Warning,
}

/// One line of command output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputMessage {
    pub text: String,
    #[serde(default)]
    pub kind: OutputKind,
}

impl OutputMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: OutputKind::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: OutputKind::Warning,
        }
    }
}
