//! Reserved words shared by most dialects.

/// Words that cannot appear bare as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "all", "alter", "and", "as", "asc", "between", "by", "case", "check", "column", "constraint",
    "create", "cross", "database", "default", "delete", "desc", "distinct", "drop", "else", "end",
    "except", "exists", "false", "foreign", "from", "full", "group", "having", "in", "index",
    "inner", "insert", "intersect", "into", "is", "join", "key", "left", "like", "limit", "merge",
    "not", "null", "offset", "on", "or", "order", "outer", "primary", "references", "replace",
    "right", "schema", "select", "set", "table", "then", "true", "union", "unique", "update",
    "user", "using", "values", "when", "where", "with",
];

/// Case-insensitive membership test against [`RESERVED_WORDS`].
pub fn is_reserved(word: &str) -> bool {
    let lower = word.to_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_is_case_insensitive() {
        assert!(is_reserved("ORDER"));
        assert!(is_reserved("Group"));
        assert!(!is_reserved("users"));
    }

    #[test]
    fn test_list_is_lowercase() {
        for word in RESERVED_WORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
