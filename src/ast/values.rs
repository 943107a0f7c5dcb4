use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A literal value as written in the statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Integer(i64),
    /// Exact decimal text (`3.14`, `1e10`), kept as written to avoid float round-off.
    Number(String),
    String(String),
    Boolean(bool),
    Null,
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    /// Hex digits of a binary literal, without the `X'...'` wrapper.
    Hex(String),
}

impl Literal {
    /// Whether this literal is replaced by a placeholder in parameterized output.
    pub fn is_parameterizable(&self) -> bool {
        !matches!(self, Literal::Boolean(_) | Literal::Null)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Literal::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Literal::Null => write!(f, "NULL"),
            Literal::Date(d) => write!(f, "DATE '{}'", d.format("%Y-%m-%d")),
            Literal::Timestamp(ts) => write!(f, "TIMESTAMP '{}'", ts.format("%Y-%m-%d %H:%M:%S")),
            Literal::Hex(h) => write!(f, "X'{}'", h),
        }
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_escapes_quotes() {
        assert_eq!(Literal::from("it's").to_string(), "'it''s'");
    }

    #[test]
    fn test_display_temporal() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(Literal::Date(date).to_string(), "DATE '2024-01-31'");
        let ts = date.and_hms_opt(12, 5, 0).unwrap();
        assert_eq!(
            Literal::Timestamp(ts).to_string(),
            "TIMESTAMP '2024-01-31 12:05:00'"
        );
    }

    #[test]
    fn test_parameterizable() {
        assert!(Literal::Integer(1).is_parameterizable());
        assert!(!Literal::Null.is_parameterizable());
        assert!(!Literal::Boolean(true).is_parameterizable());
    }
}
