pub mod connection;
pub mod scans;
pub mod schema;

pub use connection::Database;
