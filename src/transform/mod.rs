pub mod defaults;
pub mod insert_field;

pub use defaults::TierDefaults;
pub use insert_field::FieldInsertion;
