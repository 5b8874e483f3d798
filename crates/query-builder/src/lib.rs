use crate::ast::expr::{Expr, Ident};
use model::core::value::Value;

pub mod ast;
pub mod build;
pub mod dialect;
pub mod dsl;
pub mod keyset;
pub mod macros;
pub mod render;

/// Shorthand for an unqualified column identifier.
pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

/// Shorthand for a column reference that may carry a `table.` qualifier.
pub fn column(reference: &str) -> Expr {
    Expr::Identifier(Ident::parse(reference))
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}
