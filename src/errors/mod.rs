pub mod migrate_error;

pub use migrate_error::MigrateError;
