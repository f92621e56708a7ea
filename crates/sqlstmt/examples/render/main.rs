//! Render an UPDATE and a DELETE and print the SQL with its parameters.
//!
//! Run with: cargo run --example render

use sqlstmt::{Ansi, StmtResult, Value, delete, update};

fn main() -> StmtResult<()> {
    let stmt = update("users")?
        .set("status", "inactive")
        .set("deactivated_reason", Value::Null)
        .eq("org_id", 42i64)
        .to_or_mode()
        .eq("role", "guest")
        .is_null("last_login")
        .to_and_mode()
        .lt("created_at", "2024-01-01");
    let (sql, params) = stmt.render(&Ansi)?;
    println!("{sql}");
    println!("  params: {params:?}");

    let search = ""; // empty user input simply drops its filter
    let stmt = delete("sessions")?
        .like_non_empty("agent", search)
        .in_list("shard", vec![1i64, 2, 3])
        .is_not_null("expired_at");
    let (sql, params) = stmt.render(&Ansi)?;
    println!("{sql}");
    println!("  params: {params:?}");

    Ok(())
}
