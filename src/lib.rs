//! clue-progress-migrate
//!
//! Librería de la migración puntual de la progresión diaria de clues:
//! - `data` expone los tipos ordenados `Record` y `Dataset`.
//! - `transform` reconstruye cada registro insertando `done_master: 0`
//!   inmediatamente después de `done_elite` (y ofrece el relleno de
//!   contadores por tier que usa la UI).
//! - `persistence` lee y escribe el dataset como JSON con indentación fija.
//!
//! Puede usarse desde `main.rs` o desde los tests de integración.

pub mod constants;
pub mod data;
pub mod errors;
pub mod persistence;
pub mod transform;

pub use data::{Dataset, Record};
pub use errors::MigrateError;
pub use transform::{FieldInsertion, TierDefaults};

use std::path::Path;

/// Pipeline completo de la migración: leer → insertar → escribir. Devuelve
/// el dataset escrito para inspección (el archivo de entrada no se muta).
pub fn migrate_file(input: &Path, output: &Path) -> Result<Dataset, MigrateError> {
    let dataset = persistence::read_dataset(input)?;
    let updated = FieldInsertion::master_after_elite().apply(&dataset);
    persistence::write_dataset(output, &updated)?;
    Ok(updated)
}
