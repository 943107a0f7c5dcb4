//! Formatting state threaded through one rendering pass.

use std::fmt::Write;

use crate::ast::Literal;
use crate::dialect::Dialect;
use crate::error::RenderResult;
use crate::visitor::{Accept, OutputVisitor};

/// Canonical list separator.
pub const COMMA: &str = ", ";

/// Output sink plus the flags every rule consults.
///
/// One `Printer` serves one render pass; concurrent renders each need their own.
pub struct Printer<'a> {
    out: &'a mut dyn Write,
    dialect: Dialect,
    ucase: bool,
    parameterized: bool,
    indent_unit: String,
    indent_level: usize,
    parameters: Vec<Literal>,
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn Write, dialect: Dialect) -> Self {
        Self {
            out,
            dialect,
            ucase: true,
            parameterized: false,
            indent_unit: "\t".to_string(),
            indent_level: 0,
            parameters: Vec::new(),
        }
    }

    pub fn set_ucase(&mut self, ucase: bool) {
        self.ucase = ucase;
    }

    pub fn set_parameterized(&mut self, parameterized: bool) {
        self.parameterized = parameterized;
    }

    pub fn set_indent_unit(&mut self, unit: impl Into<String>) {
        self.indent_unit = unit.into();
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn ucase(&self) -> bool {
        self.ucase
    }

    pub fn parameterized(&self) -> bool {
        self.parameterized
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Literals replaced by placeholders so far, in output order.
    pub fn parameters(&self) -> &[Literal] {
        &self.parameters
    }

    pub fn into_parameters(self) -> Vec<Literal> {
        self.parameters
    }

    pub fn record_parameter(&mut self, literal: Literal) {
        self.parameters.push(literal);
    }

    pub fn print(&mut self, text: &str) -> RenderResult<()> {
        self.out.write_str(text)?;
        Ok(())
    }

    pub fn print_char(&mut self, c: char) -> RenderResult<()> {
        self.out.write_char(c)?;
        Ok(())
    }

    /// Print keyword text in the configured case.
    pub fn print_ucase(&mut self, keyword: &str) -> RenderResult<()> {
        if self.ucase {
            self.out.write_str(&keyword.to_uppercase())?;
        } else {
            self.out.write_str(&keyword.to_lowercase())?;
        }
        Ok(())
    }

    /// Line break followed by the current indentation.
    pub fn println(&mut self) -> RenderResult<()> {
        self.out.write_char('\n')?;
        for _ in 0..self.indent_level {
            self.out.write_str(&self.indent_unit)?;
        }
        Ok(())
    }

    pub fn inc_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dec_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Marker for a list that is present but has no elements.
    pub fn print_empty_marker(&mut self) -> RenderResult<()> {
        self.print("()")
    }

    /// Dispatch each item, interleaving `separator`; no trailing separator.
    pub fn print_and_accept<V, T>(&mut self, v: &V, items: &[T], separator: &str) -> RenderResult<()>
    where
        V: OutputVisitor + ?Sized,
        T: Accept,
    {
        for (i, item) in items.iter().enumerate() {
            if i != 0 {
                self.print(separator)?;
            }
            item.accept(v, self)?;
        }
        Ok(())
    }

    pub fn print_comma_list<V, T>(&mut self, v: &V, items: &[T]) -> RenderResult<()>
    where
        V: OutputVisitor + ?Sized,
        T: Accept,
    {
        self.print_and_accept(v, items, COMMA)
    }

    /// `(a, b)`, or `()` for an empty slice.
    pub fn print_paren_list<V, T>(&mut self, v: &V, items: &[T]) -> RenderResult<()>
    where
        V: OutputVisitor + ?Sized,
        T: Accept,
    {
        if items.is_empty() {
            return self.print_empty_marker();
        }
        self.print_char('(')?;
        self.print_comma_list(v, items)?;
        self.print_char(')')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_ucase_follows_flag() {
        let mut out = String::new();
        let mut p = Printer::new(&mut out, Dialect::Generic);
        p.print_ucase("Merge Into ").unwrap();
        p.set_ucase(false);
        p.print_ucase("KEY").unwrap();
        assert_eq!(out, "MERGE INTO key");
    }

    #[test]
    fn test_println_indents() {
        let mut out = String::new();
        let mut p = Printer::new(&mut out, Dialect::Generic);
        p.set_indent_unit("  ");
        p.print("a").unwrap();
        p.inc_indent();
        p.inc_indent();
        p.println().unwrap();
        p.print("b").unwrap();
        p.dec_indent();
        p.dec_indent();
        p.dec_indent();
        assert_eq!(p.indent_level(), 0);
        p.println().unwrap();
        assert_eq!(out, "a\n    b\n");
    }

    #[test]
    fn test_empty_marker() {
        let mut out = String::new();
        let mut p = Printer::new(&mut out, Dialect::Generic);
        p.print_empty_marker().unwrap();
        assert_eq!(out, "()");
    }

    struct FullSink;

    impl Write for FullSink {
        fn write_str(&mut self, _s: &str) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut sink = FullSink;
        let mut p = Printer::new(&mut sink, Dialect::Generic);
        assert!(p.print("SELECT").is_err());
    }
}
