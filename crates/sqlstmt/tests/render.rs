//! End-to-end rendering tests through the public API.

use sqlstmt::{delete, update, Ansi, CmpOp, Dialect, Keyword, StatementConfig, StmtError, Value, Where};

#[test]
fn update_full_shape() {
    let stmt = update("orders")
        .unwrap()
        .set("state", "shipped")
        .set("note", Value::Null)
        .eq("customer_id", 42i64)
        .to_or_mode()
        .eq("carrier", "dhl")
        .eq("carrier", "ups")
        .to_and_mode()
        .gte("total", 100i64);
    let (sql, params) = stmt.render(&Ansi).unwrap();
    assert_eq!(
        sql,
        "UPDATE orders SET state = ?, note = NULL WHERE customer_id = ? AND (carrier = ? OR carrier = ?) AND total >= ?"
    );
    assert_eq!(
        params,
        vec![
            Value::Text("shipped".to_string()),
            Value::Int(42),
            Value::Text("dhl".to_string()),
            Value::Text("ups".to_string()),
            Value::Int(100),
        ]
    );
}

#[test]
fn delete_with_like_family() {
    let stmt = delete("logs")
        .unwrap()
        .like("message", "timeout")
        .starts_with("source", "api")
        .ends_with("host", ".internal")
        .not_like("level", "debug");
    let (sql, params) = stmt.render(&Ansi).unwrap();
    assert_eq!(
        sql,
        "DELETE FROM logs WHERE message LIKE ? AND source LIKE ? AND host LIKE ? AND level NOT LIKE ?"
    );
    assert_eq!(
        params,
        vec![
            Value::Text("%timeout%".to_string()),
            Value::Text("api%".to_string()),
            Value::Text("%.internal".to_string()),
            Value::Text("%debug%".to_string()),
        ]
    );
}

#[test]
fn where_renders_standalone() {
    let cfg = StatementConfig::new("ignored").unwrap();
    let filter = Where::new()
        .eq("a", 1i64)
        .to_or_mode()
        .eq("b", 2i64)
        .eq("c", 3i64)
        .to_and_mode();
    let mut sql = String::new();
    let params = filter.render(&Ansi, &cfg, &mut sql).unwrap();
    assert_eq!(sql, "WHERE a = ? AND (b = ? OR c = ?)");
    assert_eq!(params.len(), 3);
}

#[test]
fn placeholder_alignment_under_mixed_conditions() {
    let stmt = update("t")
        .unwrap()
        .set("a", 1i64)
        .set("b", Value::Null)
        .is_null("c")
        .eq("d", 2i64)
        .in_list("e", vec![3i64, 4])
        .is_not_null("f")
        .eq("g", Value::Null);
    let (sql, params) = stmt.render(&Ansi).unwrap();
    assert_eq!(sql.matches('?').count(), params.len());
    assert_eq!(
        params,
        vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
    );
}

#[test]
fn numbered_placeholder_token() {
    // A fixed token like "$" serves dialects with uniform placeholders;
    // the token itself is opaque to the renderer.
    let stmt = delete("users")
        .unwrap()
        .placeholder("$1")
        .unwrap()
        .eq("id", 7i64);
    let (sql, _) = stmt.render(&Ansi).unwrap();
    assert_eq!(sql, "DELETE FROM users WHERE id = $1");
}

#[test]
fn lowercase_dialect() {
    struct Lower;
    impl Dialect for Lower {
        fn keyword(&self, keyword: Keyword) -> &'static str {
            match keyword {
                Keyword::Where => "where",
                Keyword::And => "and",
                Keyword::Or => "or",
                Keyword::Null => "null",
                Keyword::Update => "update",
                Keyword::Set => "set",
                Keyword::Delete => "delete",
                Keyword::From => "from",
                other => other.ansi(),
            }
        }
    }
    let stmt = delete("users").unwrap().eq("id", 1i64).is_null("email");
    let (sql, _) = stmt.render(&Lower).unwrap();
    assert_eq!(sql, "delete from users where id = ? and email IS NULL");
}

#[test]
fn operator_override_applies_everywhere() {
    struct Legacy;
    impl Dialect for Legacy {
        fn operator(&self, op: CmpOp) -> &'static str {
            match op {
                CmpOp::Ne => "<>",
                other => other.ansi(),
            }
        }
    }
    let stmt = delete("t").unwrap().ne("a", 1i64).to_or_mode().ne("b", 2i64).ne("c", 3i64).to_and_mode();
    let (sql, _) = stmt.render(&Legacy).unwrap();
    assert_eq!(sql, "DELETE FROM t WHERE a <> ? AND (b <> ? OR c <> ?)");
}

#[test]
fn identifier_validation_at_the_boundary() {
    assert_eq!(
        update("users u").unwrap_err(),
        StmtError::InvalidIdentifier("users u".to_string())
    );
    assert!(delete("_ok_table_1").is_ok());
}

#[test]
fn update_requires_an_assignment() {
    let stmt = update("users").unwrap().eq("id", 1i64);
    assert_eq!(stmt.render(&Ansi).unwrap_err(), StmtError::EmptyAssignment);
}

#[test]
fn option_values_flow_through_from() {
    let maybe: Option<i64> = None;
    let stmt = delete("t").unwrap().eq("a", maybe);
    let (sql, params) = stmt.render(&Ansi).unwrap();
    assert_eq!(sql, "DELETE FROM t WHERE a IS NULL");
    assert!(params.is_empty());
}
