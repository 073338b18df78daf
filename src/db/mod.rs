//! Store Access
//!
//! SQLite reached through a managed `sqlx` connection pool. The pool is
//! created once at startup from an explicit [`DbConfig`] and handed to
//! the repositories; acquisition is scoped, so a connection is returned
//! to the pool on every exit path.

mod pool;

pub use pool::{init_schema, Database, DbConfig};
