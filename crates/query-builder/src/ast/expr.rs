//! The AST for SQL boolean and scalar expressions.

use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// A literal value bound as a query parameter.
    Value(Value),

    /// A binary operation, e.g., `column = $1` or `a AND b`.
    BinaryOp(Box<BinaryOp>),

    /// An `IS NULL` / `IS NOT NULL` test.
    IsNull { expr: Box<Expr>, negated: bool },

    /// An aliased expression, e.g. `users.id AS user_id`.
    Alias { expr: Box<Expr>, alias: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}

impl Ident {
    /// Splits a column reference on its last `.` into qualifier and name.
    pub fn parse(reference: &str) -> Self {
        match reference.rsplit_once('.') {
            Some((qualifier, name)) => Ident {
                qualifier: Some(qualifier.to_string()),
                name: name.to_string(),
            },
            None => Ident {
                qualifier: None,
                name: reference.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Logical
    And,
    Or,
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    pub fn and(self, other: Expr) -> Expr {
        Expr::binary(self, BinaryOperator::And, other)
    }

    pub fn or(self, other: Expr) -> Expr {
        Expr::binary(self, BinaryOperator::Or, other)
    }

    pub fn is_null(self) -> Expr {
        Expr::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    pub fn is_not_null(self) -> Expr {
        Expr::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }
}
