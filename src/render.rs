//! Rendering entry points.

use std::fmt;
use std::io;

use crate::ast::Literal;
use crate::config::RenderConfig;
use crate::dialect::Dialect;
use crate::error::{RenderError, RenderResult};
use crate::printer::Printer;
use crate::visitor::{Accept, OutputVisitor};

/// Renders nodes into a caller-owned sink with one dialect and one set of flags.
///
/// ```
/// use sqlout::ast::builders::*;
/// use sqlout::{Dialect, Renderer};
///
/// let mut sql = String::new();
/// let mut renderer = Renderer::new(&mut sql, Dialect::MySQL).uppercase(false);
/// renderer.render(&eq(col("u.name"), text("bob"))).unwrap();
/// assert_eq!(sql, "u.name = 'bob'");
/// ```
pub struct Renderer<'a> {
    printer: Printer<'a>,
    visitor: &'a dyn OutputVisitor,
}

impl<'a> Renderer<'a> {
    pub fn new(sink: &'a mut dyn fmt::Write, dialect: Dialect) -> Self {
        Self {
            printer: Printer::new(sink, dialect),
            visitor: dialect.visitor(),
        }
    }

    /// Render through a caller-supplied rule set.
    pub fn with_visitor(sink: &'a mut dyn fmt::Write, visitor: &'a dyn OutputVisitor) -> Self {
        Self {
            printer: Printer::new(sink, visitor.dialect()),
            visitor,
        }
    }

    pub fn from_config(sink: &'a mut dyn fmt::Write, config: &RenderConfig) -> Self {
        Self::new(sink, config.dialect)
            .uppercase(config.uppercase)
            .parameterized(config.parameterized)
            .indent(config.indent.clone())
    }

    /// Keyword case; on by default.
    pub fn uppercase(mut self, on: bool) -> Self {
        self.printer.set_ucase(on);
        self
    }

    /// Replace literal values with `?` and collect them.
    pub fn parameterized(mut self, on: bool) -> Self {
        self.printer.set_parameterized(on);
        self
    }

    /// One level of indentation; a tab by default.
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.printer.set_indent_unit(unit);
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.printer.dialect()
    }

    pub fn render<N: Accept + ?Sized>(&mut self, node: &N) -> RenderResult<()> {
        tracing::debug!(
            dialect = self.visitor.name(),
            node = std::any::type_name::<N>(),
            parameterized = self.printer.parameterized(),
            "rendering"
        );
        node.accept(self.visitor, &mut self.printer)
    }

    /// Literals replaced by placeholders so far.
    pub fn parameters(&self) -> &[Literal] {
        self.printer.parameters()
    }

    pub fn into_parameters(self) -> Vec<Literal> {
        self.printer.into_parameters()
    }
}

/// Trait for converting AST nodes to SQL.
pub trait ToSql {
    /// Convert this node to SQL using the generic dialect.
    fn to_sql(&self) -> String {
        self.to_sql_with_dialect(Dialect::default())
    }

    /// Convert this node to SQL for a specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> String;
}

impl<T: Accept + ?Sized> ToSql for T {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> String {
        render(self, dialect).expect("writing to String should not fail")
    }
}

/// Render `node` to a new string with uppercase keywords.
pub fn render<N: Accept + ?Sized>(node: &N, dialect: Dialect) -> RenderResult<String> {
    let mut out = String::new();
    Renderer::new(&mut out, dialect).render(node)?;
    Ok(out)
}

/// Render with `?` placeholders, returning the SQL and the extracted literals in order.
pub fn render_parameterized<N: Accept + ?Sized>(
    node: &N,
    dialect: Dialect,
) -> RenderResult<(String, Vec<Literal>)> {
    let mut out = String::new();
    let parameters = {
        let mut renderer = Renderer::new(&mut out, dialect).parameterized(true);
        renderer.render(node)?;
        renderer.into_parameters()
    };
    Ok((out, parameters))
}

/// Adapts an `io::Write` to the text sink, keeping the first I/O error for the caller.
struct IoSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

/// Render `node` straight into `writer`. The writer is neither flushed nor closed.
pub fn write_sql<W, N>(writer: W, node: &N, config: &RenderConfig) -> RenderResult<()>
where
    W: io::Write,
    N: Accept + ?Sized,
{
    let mut sink = IoSink {
        inner: writer,
        error: None,
    };
    let result = Renderer::from_config(&mut sink, config).render(node);
    match (result, sink.error.take()) {
        (Err(RenderError::Sink(_)), Some(e)) => Err(RenderError::Io(e)),
        (result, _) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::*;
    use crate::ast::{Expr, Statement};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_sql_defaults_to_generic() {
        let expr = eq(col("order"), int(1));
        assert_eq!(expr.to_sql(), "\"order\" = 1");
        assert_eq!(expr.to_sql_with_dialect(Dialect::MySQL), "`order` = 1");
    }

    #[test]
    fn test_render_parameterized_collects_in_order() {
        let expr = and(eq(col("a"), text("x")), eq(col("b"), int(2)));
        let (sql, params) = render_parameterized(&expr, Dialect::Generic).unwrap();
        assert_eq!(sql, "a = ? AND b = ?");
        assert_eq!(params, vec![Literal::String("x".into()), Literal::Integer(2)]);
    }

    #[test]
    fn test_renderer_accumulates_across_calls() {
        let mut out = String::new();
        let mut renderer = Renderer::new(&mut out, Dialect::Generic).parameterized(true);
        renderer.render(&int(1)).unwrap();
        renderer.render(&int(2)).unwrap();
        assert_eq!(renderer.parameters().len(), 2);
        drop(renderer);
        assert_eq!(out, "??");
    }

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_sql_surfaces_io_error() {
        let stmt = Statement::Select(select(vec![star()], "users").into());
        let err = write_sql(BrokenPipe, &stmt, &RenderConfig::default()).unwrap_err();
        match err {
            RenderError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_sql_to_vec() {
        let mut buf = Vec::new();
        let config = RenderConfig {
            uppercase: false,
            ..RenderConfig::default()
        };
        write_sql(&mut buf, &Expr::Default, &config).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "default");
    }
}
