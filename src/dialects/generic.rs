use crate::dialect::Dialect;
use crate::visitor::OutputVisitor;

/// Dialect-neutral SQL; every rule is the default.
pub struct GenericVisitor;

impl OutputVisitor for GenericVisitor {
    fn dialect(&self) -> Dialect {
        Dialect::Generic
    }
}
