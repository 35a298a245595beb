//! Internal diagnostics database (SQLite `log` table).

pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
