//! Table-identifier validation.
//!
//! A statement targets exactly one bare table token, validated against
//! `[A-Za-z_][A-Za-z0-9_]*`. Dotted or quoted forms are not part of this
//! grammar; callers needing them should quote at a higher layer.

use crate::error::{StmtError, StmtResult};

/// Validate a table name against the identifier-token grammar.
pub(crate) fn check(name: &str) -> StmtResult<()> {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return Err(StmtError::InvalidIdentifier(name.to_string())),
    }
    for c in chars {
        if c != '_' && !c.is_ascii_alphanumeric() {
            return Err(StmtError::InvalidIdentifier(name.to_string()));
        }
    }
    Ok(())
}
