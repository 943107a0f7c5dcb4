use serde::{Deserialize, Serialize};

/// An identifier (table, column, index, schema name).
///
/// `quoted` records that the source delimited the name. Unquoted names are still delimited at
/// render time when the target dialect needs it (reserved words, special characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub value: String,
    #[serde(default)]
    pub quoted: bool,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A comment hint placed after a leading keyword, e.g. `SELECT /*+ INDEX(t idx) */ ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentHint {
    pub text: String,
}

impl CommentHint {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
