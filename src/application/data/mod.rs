mod log_level;
mod query;

pub use log_level::LogLevel;
pub use query::Query;
