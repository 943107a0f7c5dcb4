//! Builder helpers for constructing AST nodes programmatically.
//!
//! ```
//! use sqlout::ast::builders::*;
//!
//! let predicate = and(eq(col("u.active"), boolean(true)), eq(col("u.id"), int(7)));
//! ```

use crate::ast::{
    BinaryOperator, Expr, Ident, Literal, Select, SelectItem, TableSource, ValuesClause,
};

/// Create an unquoted identifier expression
pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident::new(name))
}

/// Create an identifier that is always delimited
pub fn quoted(name: &str) -> Expr {
    Expr::Identifier(Ident::quoted(name))
}

/// Create a column reference; dotted names (`schema.table.col`) become qualified references
pub fn col(name: &str) -> Expr {
    let mut parts = name.split('.');
    let first = ident(parts.next().unwrap_or_default());
    parts.fold(first, |owner, part| qualified(owner, part))
}

/// Create `owner.name`
pub fn qualified(owner: Expr, name: &str) -> Expr {
    Expr::Property {
        owner: Box::new(owner),
        name: Ident::new(name),
    }
}

/// Create `*`
pub fn star() -> Expr {
    Expr::AllColumns { owner: None }
}

/// Create an integer literal expression
pub fn int(value: i64) -> Expr {
    Expr::Literal(Literal::Integer(value))
}

/// Create an exact numeric literal from its text
pub fn number(text: &str) -> Expr {
    Expr::Literal(Literal::Number(text.to_string()))
}

/// Create a string literal expression
pub fn text(value: &str) -> Expr {
    Expr::Literal(Literal::String(value.to_string()))
}

pub fn boolean(value: bool) -> Expr {
    Expr::Literal(Literal::Boolean(value))
}

pub fn null() -> Expr {
    Expr::Literal(Literal::Null)
}

/// Create a function call
pub fn func(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Function {
        owner: None,
        name: name.to_string(),
        args,
        distinct: false,
    }
}

pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

pub fn eq(left: Expr, right: Expr) -> Expr {
    binary(left, BinaryOperator::Eq, right)
}

pub fn and(left: Expr, right: Expr) -> Expr {
    binary(left, BinaryOperator::And, right)
}

pub fn or(left: Expr, right: Expr) -> Expr {
    binary(left, BinaryOperator::Or, right)
}

/// Create a VALUES row
pub fn row(values: Vec<Expr>) -> ValuesClause {
    ValuesClause::new(values)
}

/// Create a FROM source for a (possibly dotted) table name
pub fn table(name: &str) -> TableSource {
    TableSource::Table {
        name: col(name),
        alias: None,
    }
}

/// Create `SELECT items FROM source`
pub fn select(items: Vec<Expr>, from: &str) -> Select {
    Select {
        projection: items.into_iter().map(SelectItem::from).collect(),
        from: Some(table(from)),
        ..Select::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_splits_qualified_names() {
        let expected = Expr::Property {
            owner: Box::new(Expr::Property {
                owner: Box::new(ident("app")),
                name: Ident::new("users"),
            }),
            name: Ident::new("id"),
        };
        assert_eq!(col("app.users.id"), expected);
    }

    #[test]
    fn test_col_plain_name() {
        assert_eq!(col("id"), ident("id"));
    }
}
