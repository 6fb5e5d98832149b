//! CLI command handlers, one per file.

mod check;
mod checksum;
mod features;
mod schema;

pub use check::run_check;
pub use checksum::run_checksum;
pub use features::run_features;
pub use schema::run_schema;
