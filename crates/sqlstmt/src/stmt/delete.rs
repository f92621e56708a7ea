//! DELETE statement builder.

use crate::config::StatementConfig;
use crate::dialect::{Dialect, Keyword};
use crate::error::StmtResult;
use crate::stmt::predicate_methods;
use crate::stmt::where_clause::Where;
use crate::value::Value;

/// DELETE builder: just a table and the embedded predicate engine.
#[derive(Clone, Debug)]
pub struct Delete {
    config: StatementConfig,
    filter: Where,
}

impl Delete {
    /// Create a DELETE builder for the given table.
    pub fn new(table: &str) -> StmtResult<Self> {
        Ok(Self::with_config(StatementConfig::new(table)?))
    }

    /// Create a DELETE builder from a prepared config.
    pub fn with_config(config: StatementConfig) -> Self {
        Self {
            config,
            filter: Where::new(),
        }
    }

    // ==================== Rendering knobs ====================

    /// Override the parameter-placeholder token.
    pub fn placeholder(mut self, token: &str) -> StmtResult<Self> {
        self.config = self.config.with_placeholder(token)?;
        Ok(self)
    }

    /// Override the keyword delimiter.
    pub fn keyword_delimiter(mut self, token: &str) -> StmtResult<Self> {
        self.config = self.config.with_keyword_delimiter(token)?;
        Ok(self)
    }

    /// Override the field delimiter.
    pub fn field_delimiter(mut self, token: &str) -> StmtResult<Self> {
        self.config = self.config.with_field_delimiter(token)?;
        Ok(self)
    }

    predicate_methods!();

    // ==================== Build ====================

    /// Render the statement, returning the SQL text and the parameters in
    /// placeholder order.
    pub fn render(&self, dialect: &dyn Dialect) -> StmtResult<(String, Vec<Value>)> {
        let cfg = &self.config;
        let kw = cfg.keyword_delimiter();
        let mut sql = String::new();
        let mut params = Vec::new();

        sql.push_str(dialect.keyword(Keyword::Delete));
        sql.push_str(kw);
        sql.push_str(dialect.keyword(Keyword::From));
        sql.push_str(kw);
        sql.push_str(cfg.table());
        sql.push_str(kw);
        self.filter.render_into(dialect, cfg, &mut sql, &mut params)?;

        tracing::debug!(sql = %sql, params = params.len(), "rendered delete");
        Ok((sql, params))
    }
}
