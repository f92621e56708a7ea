//! The predicate engine: accumulation and WHERE-clause rendering.
//!
//! Predicates collect into a `pending` group under a two-state AND/OR mode
//! machine; committed groups AND-join, and a multi-predicate group renders
//! parenthesized and OR-joined. Placeholder positions are emitted directly
//! at render time, so the returned parameter list is aligned with the text
//! by construction - there is no string rewriting pass.

use crate::config::StatementConfig;
use crate::dialect::{Dialect, Keyword};
use crate::error::{StmtError, StmtResult};
use crate::op::CmpOp;
use crate::value::Value;

/// LIKE pattern shaping applied to a bound value before it is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    Verbatim,
    /// `%v%`
    Contains,
    /// `v%`
    Prefix,
    /// `%v`
    Suffix,
}

impl Shape {
    fn apply(self, value: Value) -> Value {
        match self {
            Shape::Verbatim => value,
            Shape::Contains => Value::Text(format!("%{value}%")),
            Shape::Prefix => Value::Text(format!("{value}%")),
            Shape::Suffix => Value::Text(format!("%{value}")),
        }
    }
}

/// A single `(column, operator, value)` comparison unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: CmpOp,
    pub value: Value,
}

/// A committed entry: one predicate in place, or an OR-joined group.
#[derive(Clone, Debug, PartialEq)]
enum Group {
    Single(Predicate),
    AnyOf(Vec<Predicate>),
}

/// Grouping mode for newly added predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    And,
    Or,
}

/// Accumulates comparison predicates and renders the WHERE clause.
#[derive(Clone, Debug, Default)]
pub struct Where {
    pending: Vec<Predicate>,
    committed: Vec<Group>,
    mode: Mode,
}

impl Where {
    /// Create an empty predicate engine in AND mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no predicate has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.committed.is_empty()
    }

    // ==================== Accumulation core ====================

    /// Unconditional add. A null value downgrades any value-requiring
    /// operator to IS NULL; the shape transform runs after that check, so
    /// the LIKE forms downgrade before wrapping.
    pub(crate) fn add(&mut self, column: &str, op: CmpOp, value: Value, shape: Shape) {
        if value.is_null() && op.requires_value() {
            self.pending.push(Predicate {
                column: column.to_string(),
                op: CmpOp::IsNull,
                value: Value::Null,
            });
            return;
        }
        let value = if value.is_null() {
            Value::Null
        } else {
            shape.apply(value)
        };
        self.pending.push(Predicate {
            column: column.to_string(),
            op,
            value,
        });
    }

    /// Guarded add. The guard sees the raw, untransformed value; on success
    /// the predicate keeps the original operator even when the value is
    /// null (no IS NULL downgrade on this path).
    pub(crate) fn add_when(
        &mut self,
        column: &str,
        op: CmpOp,
        value: Value,
        shape: Shape,
        keep: impl FnOnce(&Value) -> bool,
    ) {
        if !keep(&value) {
            return;
        }
        let value = if value.is_null() {
            Value::Null
        } else {
            shape.apply(value)
        };
        self.pending.push(Predicate {
            column: column.to_string(),
            op,
            value,
        });
    }

    /// Switch to OR mode, committing each pending predicate as its own
    /// AND-joined entry. No-op when already in OR mode.
    pub(crate) fn or_mode(&mut self) {
        if self.mode == Mode::And {
            for p in self.pending.drain(..) {
                self.committed.push(Group::Single(p));
            }
            self.mode = Mode::Or;
        }
    }

    /// Switch back to AND mode, committing the whole pending group as one
    /// parenthesized OR group. No-op when already in AND mode.
    pub(crate) fn and_mode(&mut self) {
        if self.mode == Mode::Or {
            match self.pending.len() {
                0 => {}
                1 => {
                    let p = self.pending.remove(0);
                    self.committed.push(Group::Single(p));
                }
                _ => {
                    self.committed
                        .push(Group::AnyOf(std::mem::take(&mut self.pending)));
                }
            }
            self.mode = Mode::And;
        }
    }

    // ==================== Grouping ====================

    /// Start an OR group: predicates added until [`to_and_mode`](Self::to_and_mode)
    /// will render parenthesized and OR-joined.
    pub fn to_or_mode(mut self) -> Self {
        self.or_mode();
        self
    }

    /// Close the current OR group and return to AND mode.
    pub fn to_and_mode(mut self) -> Self {
        self.and_mode();
        self
    }

    // ==================== Fluent surface ====================

    /// Add: column = value (null value becomes `column IS NULL`)
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Eq, value.into(), Shape::Verbatim);
        self
    }

    /// Add if the value is non-empty: column = value
    pub fn eq_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Eq, value.into(), Shape::Verbatim, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column = value
    pub fn eq_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Eq, value.into(), Shape::Verbatim, keep);
        self
    }

    /// Add: column != value
    pub fn ne(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Ne, value.into(), Shape::Verbatim);
        self
    }

    /// Add if the value is non-empty: column != value
    pub fn ne_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Ne, value.into(), Shape::Verbatim, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column != value
    pub fn ne_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Ne, value.into(), Shape::Verbatim, keep);
        self
    }

    /// Add: column > value
    pub fn gt(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Gt, value.into(), Shape::Verbatim);
        self
    }

    /// Add if the value is non-empty: column > value
    pub fn gt_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Gt, value.into(), Shape::Verbatim, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column > value
    pub fn gt_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Gt, value.into(), Shape::Verbatim, keep);
        self
    }

    /// Add: column >= value
    pub fn gte(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Gte, value.into(), Shape::Verbatim);
        self
    }

    /// Add if the value is non-empty: column >= value
    pub fn gte_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Gte, value.into(), Shape::Verbatim, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column >= value
    pub fn gte_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Gte, value.into(), Shape::Verbatim, keep);
        self
    }

    /// Add: column < value
    pub fn lt(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Lt, value.into(), Shape::Verbatim);
        self
    }

    /// Add if the value is non-empty: column < value
    pub fn lt_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Lt, value.into(), Shape::Verbatim, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column < value
    pub fn lt_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Lt, value.into(), Shape::Verbatim, keep);
        self
    }

    /// Add: column <= value
    pub fn lte(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Lte, value.into(), Shape::Verbatim);
        self
    }

    /// Add if the value is non-empty: column <= value
    pub fn lte_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Lte, value.into(), Shape::Verbatim, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column <= value
    pub fn lte_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Lte, value.into(), Shape::Verbatim, keep);
        self
    }

    /// Add: column LIKE %value%
    pub fn like(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Like, value.into(), Shape::Contains);
        self
    }

    /// Add if the value is non-empty: column LIKE %value%
    pub fn like_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Like, value.into(), Shape::Contains, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column LIKE %value%
    pub fn like_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Like, value.into(), Shape::Contains, keep);
        self
    }

    /// Add: column NOT LIKE %value%
    pub fn not_like(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::NotLike, value.into(), Shape::Contains);
        self
    }

    /// Add if the value is non-empty: column NOT LIKE %value%
    pub fn not_like_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::NotLike, value.into(), Shape::Contains, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column NOT LIKE %value%
    pub fn not_like_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::NotLike, value.into(), Shape::Contains, keep);
        self
    }

    /// Add: column LIKE value% (prefix match)
    pub fn starts_with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Like, value.into(), Shape::Prefix);
        self
    }

    /// Add if the value is non-empty: column LIKE value%
    pub fn starts_with_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Like, value.into(), Shape::Prefix, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column LIKE value%
    pub fn starts_with_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Like, value.into(), Shape::Prefix, keep);
        self
    }

    /// Add: column LIKE %value (suffix match)
    pub fn ends_with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add(column, CmpOp::Like, value.into(), Shape::Suffix);
        self
    }

    /// Add if the value is non-empty: column LIKE %value
    pub fn ends_with_non_empty(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::Like, value.into(), Shape::Suffix, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&value)`: column LIKE %value
    pub fn ends_with_if(
        mut self,
        column: &str,
        value: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::Like, value.into(), Shape::Suffix, keep);
        self
    }

    /// Add: column IN (values...). A bare scalar is a one-element list.
    pub fn in_list(mut self, column: &str, values: impl Into<Value>) -> Self {
        self.add(column, CmpOp::In, values.into(), Shape::Verbatim);
        self
    }

    /// Add if the list is non-empty: column IN (values...)
    pub fn in_list_non_empty(mut self, column: &str, values: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::In, values.into(), Shape::Verbatim, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&values)`: column IN (values...)
    pub fn in_list_if(
        mut self,
        column: &str,
        values: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::In, values.into(), Shape::Verbatim, keep);
        self
    }

    /// Add: column NOT IN (values...)
    pub fn not_in(mut self, column: &str, values: impl Into<Value>) -> Self {
        self.add(column, CmpOp::NotIn, values.into(), Shape::Verbatim);
        self
    }

    /// Add if the list is non-empty: column NOT IN (values...)
    pub fn not_in_non_empty(mut self, column: &str, values: impl Into<Value>) -> Self {
        self.add_when(column, CmpOp::NotIn, values.into(), Shape::Verbatim, |v| {
            !v.is_empty()
        });
        self
    }

    /// Add if `keep(&values)`: column NOT IN (values...)
    pub fn not_in_if(
        mut self,
        column: &str,
        values: impl Into<Value>,
        keep: impl FnOnce(&Value) -> bool,
    ) -> Self {
        self.add_when(column, CmpOp::NotIn, values.into(), Shape::Verbatim, keep);
        self
    }

    /// Add: column IS NULL
    pub fn is_null(mut self, column: &str) -> Self {
        self.add(column, CmpOp::IsNull, Value::Null, Shape::Verbatim);
        self
    }

    /// Add: column IS NOT NULL
    pub fn is_not_null(mut self, column: &str) -> Self {
        self.add(column, CmpOp::IsNotNull, Value::Null, Shape::Verbatim);
        self
    }

    // ==================== Render ====================

    /// Render the WHERE clause into `out` and return the bound parameters
    /// in placeholder order.
    ///
    /// `out` is only appended to on success.
    pub fn render(
        &self,
        dialect: &dyn Dialect,
        config: &StatementConfig,
        out: &mut String,
    ) -> StmtResult<Vec<Value>> {
        let mut buf = String::new();
        let mut params = Vec::new();
        self.render_into(dialect, config, &mut buf, &mut params)?;
        out.push_str(&buf);
        Ok(params)
    }

    pub(crate) fn render_into(
        &self,
        dialect: &dyn Dialect,
        config: &StatementConfig,
        out: &mut String,
        params: &mut Vec<Value>,
    ) -> StmtResult<()> {
        let kw = config.keyword_delimiter();
        out.push_str(dialect.keyword(Keyword::Where));
        out.push_str(kw);

        if self.committed.is_empty() {
            return self.render_flat(&self.pending, dialect, config, out, params);
        }

        let and = dialect.keyword(Keyword::And);
        for (i, group) in self.committed.iter().enumerate() {
            if i > 0 {
                out.push_str(kw);
                out.push_str(and);
                out.push_str(kw);
            }
            match group {
                Group::Single(p) => render_predicate(p, dialect, config, out, params)?,
                Group::AnyOf(ps) => self.render_any_of(ps, dialect, config, out, params)?,
            }
        }
        if !self.pending.is_empty() {
            out.push_str(kw);
            out.push_str(and);
            out.push_str(kw);
            self.render_flat(&self.pending, dialect, config, out, params)?;
        }
        Ok(())
    }

    fn render_flat(
        &self,
        predicates: &[Predicate],
        dialect: &dyn Dialect,
        config: &StatementConfig,
        out: &mut String,
        params: &mut Vec<Value>,
    ) -> StmtResult<()> {
        let kw = config.keyword_delimiter();
        let and = dialect.keyword(Keyword::And);
        for (i, p) in predicates.iter().enumerate() {
            if i > 0 {
                out.push_str(kw);
                out.push_str(and);
                out.push_str(kw);
            }
            render_predicate(p, dialect, config, out, params)?;
        }
        Ok(())
    }

    fn render_any_of(
        &self,
        predicates: &[Predicate],
        dialect: &dyn Dialect,
        config: &StatementConfig,
        out: &mut String,
        params: &mut Vec<Value>,
    ) -> StmtResult<()> {
        let kw = config.keyword_delimiter();
        let or = dialect.keyword(Keyword::Or);
        out.push('(');
        for (i, p) in predicates.iter().enumerate() {
            if i > 0 {
                out.push_str(kw);
                out.push_str(or);
                out.push_str(kw);
            }
            render_predicate(p, dialect, config, out, params)?;
        }
        out.push(')');
        Ok(())
    }
}

fn render_predicate(
    p: &Predicate,
    dialect: &dyn Dialect,
    config: &StatementConfig,
    out: &mut String,
    params: &mut Vec<Value>,
) -> StmtResult<()> {
    let kw = config.keyword_delimiter();
    out.push_str(&p.column);
    out.push_str(kw);
    out.push_str(dialect.operator(p.op));

    match p.op {
        CmpOp::IsNull | CmpOp::IsNotNull => Ok(()),
        CmpOp::In | CmpOp::NotIn => {
            let elements: &[Value] = match &p.value {
                Value::List(items) => items,
                Value::Null => return Err(StmtError::MissingValue(p.column.clone())),
                scalar => std::slice::from_ref(scalar),
            };
            out.push_str(kw);
            out.push('(');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(config.field_delimiter());
                    out.push_str(kw);
                }
                out.push_str(config.placeholder());
                params.push(element.clone());
            }
            out.push(')');
            Ok(())
        }
        _ => {
            out.push_str(kw);
            if p.value.is_null() {
                out.push_str(dialect.keyword(Keyword::Null));
            } else {
                out.push_str(config.placeholder());
                params.push(p.value.clone());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Ansi;

    fn cfg() -> StatementConfig {
        StatementConfig::new("t").unwrap()
    }

    fn render(w: &Where) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let params = w.render(&Ansi, &cfg(), &mut sql).unwrap();
        (sql, params)
    }

    #[test]
    fn flat_and_join() {
        let w = Where::new().eq("a", 1).gt("b", 2);
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE a = ? AND b > ?");
        assert_eq!(params, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn null_downgrades_to_is_null() {
        let w = Where::new().eq("col", Value::Null);
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE col IS NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn null_downgrade_applies_to_every_value_operator() {
        for w in [
            Where::new().gt("col", Value::Null),
            Where::new().lte("col", Value::Null),
            Where::new().like("col", Value::Null),
            Where::new().starts_with("col", Value::Null),
            Where::new().not_in("col", Value::Null),
        ] {
            let (sql, params) = render(&w);
            assert_eq!(sql, "WHERE col IS NULL");
            assert!(params.is_empty());
        }
    }

    #[test]
    fn like_shapes_wrap_the_value() {
        let w = Where::new()
            .like("a", "x")
            .starts_with("b", "y")
            .ends_with("c", "z");
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE a LIKE ? AND b LIKE ? AND c LIKE ?");
        assert_eq!(
            params,
            vec![
                Value::Text("%x%".to_string()),
                Value::Text("y%".to_string()),
                Value::Text("%z".to_string()),
            ]
        );
    }

    #[test]
    fn guard_sees_raw_value_and_keeps_operator() {
        // The guard accepts null: the predicate keeps Eq and renders the
        // NULL literal, with no downgrade and no parameter.
        let w = Where::new().eq_if("col", Value::Null, |v| v.is_null());
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE col = NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn guard_runs_before_transform() {
        let w = Where::new().like_if("name", "bob", |v| v == &Value::from("bob"));
        let (_, params) = render(&w);
        assert_eq!(params, vec![Value::Text("%bob%".to_string())]);
    }

    #[test]
    fn non_empty_guard_suppresses() {
        let w = Where::new()
            .eq_non_empty("name", "")
            .eq_non_empty("tags", Vec::<i32>::new())
            .eq_non_empty("owner", Value::Null);
        assert!(w.is_empty());
    }

    #[test]
    fn non_empty_guard_passes() {
        let w = Where::new().eq_non_empty("name", "bob");
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE name = ?");
        assert_eq!(params, vec![Value::Text("bob".to_string())]);
    }

    #[test]
    fn or_mode_commits_pending_individually() {
        let w = Where::new().eq("a", 1).eq("b", 2).to_or_mode();
        assert_eq!(w.committed.len(), 2);
        assert!(w.pending.is_empty());
        assert_eq!(w.mode, Mode::Or);
    }

    #[test]
    fn or_mode_is_idempotent() {
        let once = Where::new().eq("a", 1).to_or_mode();
        let twice = Where::new().eq("a", 1).to_or_mode().to_or_mode();
        assert_eq!(once.committed, twice.committed);
        assert_eq!(once.pending, twice.pending);
        assert_eq!(once.mode, twice.mode);
    }

    #[test]
    fn and_mode_commits_pending_as_group() {
        let w = Where::new().to_or_mode().eq("c", 3).eq("d", 4).to_and_mode();
        assert_eq!(w.committed.len(), 1);
        assert!(matches!(w.committed[0], Group::AnyOf(ref ps) if ps.len() == 2));
    }

    #[test]
    fn single_element_or_group_commits_unparenthesized() {
        let w = Where::new().to_or_mode().eq("c", 3).to_and_mode();
        let (sql, _) = render(&w);
        assert_eq!(sql, "WHERE c = ?");
    }

    #[test]
    fn and_or_composition() {
        let w = Where::new()
            .eq("a", 1)
            .eq("b", 2)
            .to_or_mode()
            .eq("c", 3)
            .eq("d", 4)
            .to_and_mode()
            .eq("e", 5);
        let (sql, params) = render(&w);
        assert_eq!(
            sql,
            "WHERE a = ? AND b = ? AND (c = ? OR d = ?) AND e = ?"
        );
        assert_eq!(
            params,
            vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(4),
                Value::Int(5),
            ]
        );
    }

    #[test]
    fn trailing_or_mode_loses_grouping() {
        // Render without closing the OR group: the pending predicates fall
        // back to flat AND joining. Current behavior, asserted as-is.
        let w = Where::new().eq("a", 1).to_or_mode().eq("b", 2).eq("c", 3);
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE a = ? AND b = ? AND c = ?");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn in_expands_list() {
        let w = Where::new().in_list("x", vec![10, 20, 30]);
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE x IN (?, ?, ?)");
        assert_eq!(
            params,
            vec![Value::Int(10), Value::Int(20), Value::Int(30)]
        );
    }

    #[test]
    fn in_accepts_bare_scalar() {
        let w = Where::new().in_list("x", 10);
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE x IN (?)");
        assert_eq!(params, vec![Value::Int(10)]);
    }

    #[test]
    fn empty_in_list_renders_empty_parens() {
        let w = Where::new().in_list("x", Vec::<i64>::new());
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE x IN ()");
        assert!(params.is_empty());
    }

    #[test]
    fn in_with_guarded_null_is_missing_value() {
        let w = Where::new().in_list_if("x", Value::Null, |_| true);
        let mut sql = String::new();
        let err = w.render(&Ansi, &cfg(), &mut sql).unwrap_err();
        assert_eq!(err, StmtError::MissingValue("x".to_string()));
        // No partial output on failure.
        assert!(sql.is_empty());
    }

    #[test]
    fn null_checks_take_no_parameter() {
        let w = Where::new().is_null("a").is_not_null("b");
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE a IS NULL AND b IS NOT NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn render_is_repeatable() {
        let w = Where::new().eq("a", 1).to_or_mode().eq("b", 2);
        let (first_sql, first_params) = render(&w);
        let (second_sql, second_params) = render(&w);
        assert_eq!(first_sql, second_sql);
        assert_eq!(first_params, second_params);
    }

    #[test]
    fn empty_engine_still_emits_where() {
        let w = Where::new();
        let (sql, params) = render(&w);
        assert_eq!(sql, "WHERE ");
        assert!(params.is_empty());
    }
}
