//! UPDATE statement builder.

use crate::config::StatementConfig;
use crate::dialect::{Dialect, Keyword};
use crate::error::{StmtError, StmtResult};
use crate::stmt::predicate_methods;
use crate::stmt::where_clause::Where;
use crate::value::Value;

/// UPDATE builder: SET assignments plus the embedded predicate engine.
///
/// Parameter order is assignments first, then predicates, matching the
/// left-to-right placeholder order of the rendered text.
#[derive(Clone, Debug)]
pub struct Update {
    config: StatementConfig,
    assignments: Vec<(String, Value)>,
    filter: Where,
}

impl Update {
    /// Create an UPDATE builder for the given table.
    pub fn new(table: &str) -> StmtResult<Self> {
        Ok(Self::with_config(StatementConfig::new(table)?))
    }

    /// Create an UPDATE builder from a prepared config.
    pub fn with_config(config: StatementConfig) -> Self {
        Self {
            config,
            assignments: Vec::new(),
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

    // ==================== SET assignments ====================

    /// Set a column value. A null value renders as the NULL literal and
    /// binds no parameter.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.assignments.push((column.to_string(), value.into()));
        self
    }

    /// Set an optional column value (None => skip the assignment).
    pub fn set_opt(self, column: &str, value: Option<impl Into<Value>>) -> Self {
        if let Some(v) = value {
            self.set(column, v)
        } else {
            self
        }
    }

    /// Serialize any `Serialize` value into a JSON assignment.
    pub fn set_json<T: serde::Serialize>(
        self,
        column: &str,
        value: &T,
    ) -> serde_json::Result<Self> {
        let json = serde_json::to_value(value)?;
        Ok(self.set(column, json))
    }

    predicate_methods!();

    // ==================== Build ====================

    /// Render the statement, returning the SQL text and the parameters in
    /// placeholder order.
    ///
    /// Fails with [`StmtError::EmptyAssignment`] before producing any output
    /// when no assignment was added.
    pub fn render(&self, dialect: &dyn Dialect) -> StmtResult<(String, Vec<Value>)> {
        if self.assignments.is_empty() {
            return Err(StmtError::EmptyAssignment);
        }

        let cfg = &self.config;
        let kw = cfg.keyword_delimiter();
        let mut sql = String::new();
        let mut params = Vec::new();

        sql.push_str(dialect.keyword(Keyword::Update));
        sql.push_str(kw);
        sql.push_str(cfg.table());
        sql.push_str(kw);
        sql.push_str(dialect.keyword(Keyword::Set));
        sql.push_str(kw);

        for (i, (column, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                sql.push_str(cfg.field_delimiter());
                sql.push_str(kw);
            }
            sql.push_str(column);
            sql.push_str(kw);
            sql.push_str(dialect.keyword(Keyword::Assign));
            sql.push_str(kw);
            if value.is_null() {
                sql.push_str(dialect.keyword(Keyword::Null));
            } else {
                sql.push_str(cfg.placeholder());
                params.push(value.clone());
            }
        }

        sql.push_str(kw);
        self.filter.render_into(dialect, cfg, &mut sql, &mut params)?;

        tracing::debug!(sql = %sql, params = params.len(), "rendered update");
        Ok((sql, params))
    }
}
