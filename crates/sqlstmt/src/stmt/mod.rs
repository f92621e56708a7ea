//! Statement builders.
//!
//! [`Update`] and [`Delete`] own a [`StatementConfig`] and an embedded
//! [`Where`] engine, and expose the whole predicate surface as consuming
//! builder methods. `render` takes the dialect explicitly and returns the
//! SQL text together with the parameters in placeholder order.

pub mod delete;
pub mod update;
pub mod where_clause;


pub use delete::Delete;
pub use update::Update;
pub use where_clause::{Predicate, Where};

use crate::config::StatementConfig;
use crate::error::StmtResult;

/// Start an UPDATE statement for `table`.
pub fn update(table: &str) -> StmtResult<Update> {
    Update::new(table)
}

/// Start a DELETE statement for `table`.
pub fn delete(table: &str) -> StmtResult<Delete> {
    Delete::new(table)
}

/// Alias for [`delete`].
pub fn delete_from(table: &str) -> StmtResult<Delete> {
    delete(table)
}

/// Start an UPDATE statement from a prepared config.
pub fn update_with(config: StatementConfig) -> Update {
    Update::with_config(config)
}

/// Start a DELETE statement from a prepared config.
pub fn delete_with(config: StatementConfig) -> Delete {
    Delete::with_config(config)
}

/// Expands the full predicate surface of [`Where`] as consuming builder
/// methods on a statement type with a `filter: Where` field, so `Update`
/// and `Delete` stay in lockstep without repeating forty delegations.
macro_rules! predicate_methods {
    () => {
        /// Add WHERE: column = value (null value becomes `column IS NULL`)
        pub fn eq(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).eq(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column = value
        pub fn eq_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).eq_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column = value
        pub fn eq_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).eq_if(column, value, keep);
            self
        }

        /// Add WHERE: column != value
        pub fn ne(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).ne(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column != value
        pub fn ne_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).ne_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column != value
        pub fn ne_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).ne_if(column, value, keep);
            self
        }

        /// Add WHERE: column > value
        pub fn gt(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).gt(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column > value
        pub fn gt_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).gt_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column > value
        pub fn gt_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).gt_if(column, value, keep);
            self
        }

        /// Add WHERE: column >= value
        pub fn gte(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).gte(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column >= value
        pub fn gte_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).gte_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column >= value
        pub fn gte_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).gte_if(column, value, keep);
            self
        }

        /// Add WHERE: column < value
        pub fn lt(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).lt(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column < value
        pub fn lt_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).lt_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column < value
        pub fn lt_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).lt_if(column, value, keep);
            self
        }

        /// Add WHERE: column <= value
        pub fn lte(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).lte(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column <= value
        pub fn lte_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).lte_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column <= value
        pub fn lte_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).lte_if(column, value, keep);
            self
        }

        /// Add WHERE: column LIKE %value%
        pub fn like(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).like(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column LIKE %value%
        pub fn like_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).like_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column LIKE %value%
        pub fn like_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).like_if(column, value, keep);
            self
        }

        /// Add WHERE: column NOT LIKE %value%
        pub fn not_like(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).not_like(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column NOT LIKE %value%
        pub fn not_like_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).not_like_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column NOT LIKE %value%
        pub fn not_like_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).not_like_if(column, value, keep);
            self
        }

        /// Add WHERE: column LIKE value% (prefix match)
        pub fn starts_with(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).starts_with(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column LIKE value%
        pub fn starts_with_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).starts_with_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column LIKE value%
        pub fn starts_with_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).starts_with_if(column, value, keep);
            self
        }

        /// Add WHERE: column LIKE %value (suffix match)
        pub fn ends_with(mut self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).ends_with(column, value);
            self
        }

        /// Add WHERE if the value is non-empty: column LIKE %value
        pub fn ends_with_non_empty(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).ends_with_non_empty(column, value);
            self
        }

        /// Add WHERE if `keep(&value)`: column LIKE %value
        pub fn ends_with_if(
            mut self,
            column: &str,
            value: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).ends_with_if(column, value, keep);
            self
        }

        /// Add WHERE: column IN (values...)
        pub fn in_list(mut self, column: &str, values: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).in_list(column, values);
            self
        }

        /// Add WHERE if the list is non-empty: column IN (values...)
        pub fn in_list_non_empty(
            mut self,
            column: &str,
            values: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).in_list_non_empty(column, values);
            self
        }

        /// Add WHERE if `keep(&values)`: column IN (values...)
        pub fn in_list_if(
            mut self,
            column: &str,
            values: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).in_list_if(column, values, keep);
            self
        }

        /// Add WHERE: column NOT IN (values...)
        pub fn not_in(mut self, column: &str, values: impl Into<$crate::value::Value>) -> Self {
            self.filter = std::mem::take(&mut self.filter).not_in(column, values);
            self
        }

        /// Add WHERE if the list is non-empty: column NOT IN (values...)
        pub fn not_in_non_empty(
            mut self,
            column: &str,
            values: impl Into<$crate::value::Value>,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).not_in_non_empty(column, values);
            self
        }

        /// Add WHERE if `keep(&values)`: column NOT IN (values...)
        pub fn not_in_if(
            mut self,
            column: &str,
            values: impl Into<$crate::value::Value>,
            keep: impl FnOnce(&$crate::value::Value) -> bool,
        ) -> Self {
            self.filter = std::mem::take(&mut self.filter).not_in_if(column, values, keep);
            self
        }

        /// Add WHERE: column IS NULL
        pub fn is_null(mut self, column: &str) -> Self {
            self.filter = std::mem::take(&mut self.filter).is_null(column);
            self
        }

        /// Add WHERE: column IS NOT NULL
        pub fn is_not_null(mut self, column: &str) -> Self {
            self.filter = std::mem::take(&mut self.filter).is_not_null(column);
            self
        }

        /// Start an OR group: following predicates render parenthesized and
        /// OR-joined once the group is closed with `to_and_mode`.
        pub fn to_or_mode(mut self) -> Self {
            self.filter = std::mem::take(&mut self.filter).to_or_mode();
            self
        }

        /// Close the current OR group and return to AND mode.
        pub fn to_and_mode(mut self) -> Self {
            self.filter = std::mem::take(&mut self.filter).to_and_mode();
            self
        }
    };
}

pub(crate) use predicate_methods;
