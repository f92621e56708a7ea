//! Per-statement rendering configuration.

use crate::error::{StmtError, StmtResult};
use crate::ident;

/// Target table plus the three rendering knobs shared by all statements.
///
/// The table name is validated against the identifier-token grammar at
/// construction; the knobs default to `?` / one space / `,` and reject empty
/// tokens.
#[derive(Clone, Debug)]
pub struct StatementConfig {
    table: String,
    placeholder: String,
    keyword_delimiter: String,
    field_delimiter: String,
}

impl StatementConfig {
    /// Create a config for the given table.
    pub fn new(table: &str) -> StmtResult<Self> {
        ident::check(table)?;
        Ok(Self {
            table: table.to_string(),
            placeholder: "?".to_string(),
            keyword_delimiter: " ".to_string(),
            field_delimiter: ",".to_string(),
        })
    }

    /// Set the parameter-placeholder token.
    pub fn with_placeholder(mut self, token: &str) -> StmtResult<Self> {
        if token.is_empty() {
            return Err(StmtError::EmptyToken("placeholder"));
        }
        self.placeholder = token.to_string();
        Ok(self)
    }

    /// Set the delimiter emitted between keywords and tokens.
    pub fn with_keyword_delimiter(mut self, token: &str) -> StmtResult<Self> {
        if token.is_empty() {
            return Err(StmtError::EmptyToken("keyword delimiter"));
        }
        self.keyword_delimiter = token.to_string();
        Ok(self)
    }

    /// Set the delimiter emitted between fields (assignments, IN elements).
    pub fn with_field_delimiter(mut self, token: &str) -> StmtResult<Self> {
        if token.is_empty() {
            return Err(StmtError::EmptyToken("field delimiter"));
        }
        self.field_delimiter = token.to_string();
        Ok(self)
    }

    /// The validated table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The parameter-placeholder token.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The keyword delimiter.
    pub fn keyword_delimiter(&self) -> &str {
        &self.keyword_delimiter
    }

    /// The field delimiter.
    pub fn field_delimiter(&self) -> &str {
        &self.field_delimiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = StatementConfig::new("users").unwrap();
        assert_eq!(cfg.table(), "users");
        assert_eq!(cfg.placeholder(), "?");
        assert_eq!(cfg.keyword_delimiter(), " ");
        assert_eq!(cfg.field_delimiter(), ",");
    }

    #[test]
    fn rejects_bad_table() {
        let err = StatementConfig::new("1users").unwrap_err();
        assert!(err.is_invalid_identifier());
    }

    #[test]
    fn knob_overrides() {
        let cfg = StatementConfig::new("users")
            .unwrap()
            .with_placeholder("$")
            .unwrap()
            .with_field_delimiter(";")
            .unwrap();
        assert_eq!(cfg.placeholder(), "$");
        assert_eq!(cfg.field_delimiter(), ";");
    }

    #[test]
    fn rejects_empty_tokens() {
        let cfg = StatementConfig::new("users").unwrap();
        assert_eq!(
            cfg.clone().with_placeholder("").unwrap_err(),
            StmtError::EmptyToken("placeholder")
        );
        assert_eq!(
            cfg.clone().with_keyword_delimiter("").unwrap_err(),
            StmtError::EmptyToken("keyword delimiter")
        );
        assert_eq!(
            cfg.with_field_delimiter("").unwrap_err(),
            StmtError::EmptyToken("field delimiter")
        );
    }
}
