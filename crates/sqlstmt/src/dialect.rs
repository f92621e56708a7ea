//! Dialect keyword lookup.
//!
//! Rendering never hard-codes keyword text: every abstract keyword and
//! operator goes through a [`Dialect`], passed explicitly to `render`. The
//! trait's provided methods return the dialect-agnostic defaults, so a
//! dialect only overrides the literals it actually changes and everything
//! else falls back automatically.

use crate::op::CmpOp;

/// An abstract statement keyword resolved to literal text by a [`Dialect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// WHERE clause prefix
    Where,
    /// Conjunction between conditions
    And,
    /// Disjunction inside a group
    Or,
    /// NULL literal emitted for null-valued conditions and assignments
    Null,
    /// UPDATE statement prefix
    Update,
    /// SET clause prefix
    Set,
    /// Assignment operator between column and value
    Assign,
    /// DELETE statement prefix
    Delete,
    /// FROM keyword
    From,
}

impl Keyword {
    /// Dialect-agnostic literal text.
    pub fn ansi(self) -> &'static str {
        match self {
            Keyword::Where => "WHERE",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Null => "NULL",
            Keyword::Update => "UPDATE",
            Keyword::Set => "SET",
            Keyword::Assign => "=",
            Keyword::Delete => "DELETE",
            Keyword::From => "FROM",
        }
    }
}

/// Maps abstract keywords and operators to dialect-specific literal text.
///
/// Implementors override only what differs from ANSI.
///
/// # Example
/// ```
/// use sqlstmt::{CmpOp, Dialect};
///
/// struct Legacy;
///
/// impl Dialect for Legacy {
///     fn operator(&self, op: CmpOp) -> &'static str {
///         match op {
///             CmpOp::Ne => "<>",
///             other => other.ansi(),
///         }
///     }
/// }
/// ```
pub trait Dialect {
    /// Literal text for a statement keyword.
    fn keyword(&self, keyword: Keyword) -> &'static str {
        keyword.ansi()
    }

    /// Literal text for a comparison operator.
    fn operator(&self, op: CmpOp) -> &'static str {
        op.ansi()
    }
}

/// The dialect-agnostic default text table.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ansi;

impl Dialect for Ansi {}
