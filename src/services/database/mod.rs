// Database service module
// SQLite-backed key-value storage for the persisted documents

mod connection;
mod schema;

pub use connection::Database;
