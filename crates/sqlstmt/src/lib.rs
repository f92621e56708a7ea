//! Parameterized UPDATE and DELETE statement rendering.
//!
//! Builders accumulate comparison predicates under a two-state AND/OR
//! grouping machine and render to SQL text plus a positionally aligned
//! parameter list. Keywords and operators resolve through an explicit
//! [`Dialect`]; placeholder and delimiter tokens come from the per-statement
//! [`StatementConfig`].
//!
//! # Example
//!
//! ```
//! use sqlstmt::{update, Ansi};
//!
//! let stmt = update("users")?
//!     .set("status", "inactive")
//!     .eq_non_empty("name", "")
//!     .gt("age", 30i64);
//! let (sql, params) = stmt.render(&Ansi)?;
//! assert_eq!(sql, "UPDATE users SET status = ? WHERE age > ?");
//! assert_eq!(params.len(), 2);
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```

pub mod config;
pub mod dialect;
pub mod error;
mod ident;
pub mod op;
pub mod stmt;
pub mod value;

pub use config::StatementConfig;
pub use dialect::{Ansi, Dialect, Keyword};
pub use error::{StmtError, StmtResult};
pub use op::CmpOp;
pub use stmt::{
    delete, delete_from, delete_with, update, update_with, Delete, Update, Where,
};
pub use value::Value;
